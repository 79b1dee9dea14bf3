//! Core library for the `skilltap` application.
//!
//! Two independent commands share this entry point:
//! - `hook`: a prompt-inspection hook that conditionally queries the skill
//!   discovery service and prints injectable context. Producing no output is
//!   a meaningful result and tells the host there is nothing to inject.
//! - `agent-summary`: an offline analyzer that aggregates sub-agent `Task`
//!   invocations and durations from session transcript files.
//!
//! The main entry point is the [`run`] function.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::runtime::Runtime;

use skilltap_transcripts::{
    analyze_files, default_transcript_dir, find_transcripts, render_summary, NoTranscripts,
};

pub mod cli;
use cli::{Cli, Commands};

/// Parses the command line and runs the selected command.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Hook { prompt } => run_hook(&prompt),
        Commands::AgentSummary { paths } => run_agent_summary(paths),
    }
}

/// Runs the prompt-inspection hook.
///
/// The network lookup only happens for prompts that pass the keyword filter,
/// and a failed lookup degrades to a printed warning. The hook never fails
/// the host operation.
fn run_hook(prompt: &str) -> Result<()> {
    if !skilltap_discovery::should_check(prompt) {
        return Ok(());
    }

    let rt = Runtime::new()?;
    let result = rt.block_on(skilltap_discovery::discover(prompt));

    if let Some(context) = skilltap_discovery::render_skill_context(&result) {
        print!("{context}");
    }
    Ok(())
}

/// Runs the transcript aggregation and prints the summary table.
fn run_agent_summary(paths: Vec<PathBuf>) -> Result<()> {
    let paths = resolve_transcript_paths(paths)?;
    println!("Analyzing {} transcript file(s)...", paths.len());

    let summary = analyze_files(&paths);
    if summary.is_empty() {
        println!("No agent invocations found in transcripts.");
        return Ok(());
    }

    print!("{}", render_summary(&summary));
    Ok(())
}

/// Uses the given paths, or discovers transcripts under the default
/// directory when none were given.
///
/// Locating zero files is the one fatal condition of the analyzer; the error
/// names the directory that was searched.
fn resolve_transcript_paths(paths: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    if !paths.is_empty() {
        return Ok(paths);
    }
    let dir = default_transcript_dir()?;
    let found = find_transcripts(&dir);
    if found.is_empty() {
        return Err(NoTranscripts { dir }.into());
    }
    Ok(found)
}
