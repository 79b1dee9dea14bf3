use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for the `skilltap` application.
#[derive(Debug, Parser)]
#[command(
    name = "skilltap",
    about = "Prompt hook and transcript analytics for Claude Code sessions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `skilltap` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Inspects a prompt and prints discovered skill context for injection.
    Hook {
        /// Prompt text to inspect (uses env `PROMPT` if not provided).
        #[arg(long, env = "PROMPT", default_value = "", hide_env_values = true)]
        prompt: String,
    },
    /// Summarizes sub-agent invocations and durations from transcript files.
    AgentSummary {
        /// Transcript files to analyze (default: every `*.jsonl` under the
        /// transcript directory, recursively).
        paths: Vec<PathBuf>,
    },
}
