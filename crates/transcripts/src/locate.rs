//! Locating transcript files on disk.

use std::path::{Path, PathBuf};

use anyhow::Result;
use thiserror::Error;
use walkdir::WalkDir;

/// Raised when no transcript files can be located under the search directory.
#[derive(Debug, Error)]
#[error("no transcript files found under {}", dir.display())]
pub struct NoTranscripts {
    /// Directory that was searched.
    pub dir: PathBuf,
}

/// Returns the user's home directory.
fn home_dir() -> Result<PathBuf> {
    #[cfg(unix)]
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("home directory not found"))
}

/// Returns the directory searched for transcripts when no paths are given.
///
/// Defaults to `~/.claude/projects`; override with `SKILLTAP_TRANSCRIPT_DIR`.
pub fn default_transcript_dir() -> Result<PathBuf> {
    if let Ok(custom) = std::env::var("SKILLTAP_TRANSCRIPT_DIR") {
        return Ok(PathBuf::from(custom));
    }
    Ok(home_dir()?.join(".claude/projects"))
}

fn is_transcript_file(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .path()
            .extension()
            .map(|ext| ext == "jsonl")
            .unwrap_or(false)
}

/// Recursively collects `*.jsonl` files under `dir`, sorted by path.
pub fn find_transcripts(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(is_transcript_file)
        .map(|entry| entry.into_path())
        .collect();
    paths.sort();
    paths
}
