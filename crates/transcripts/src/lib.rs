//! Aggregation of sub-agent activity from Claude Code transcript logs.
//!
//! Transcripts are line-delimited JSON files written append-only by the host
//! assistant. This crate provides:
//! - A permissive record model for the lines this tool inspects.
//! - A streaming aggregator that correlates `Task` tool invocations with
//!   their results and accumulates per-agent counts and durations.
//! - Duration formatting and a fixed-width summary table.
//! - Location of transcript files under the default projects directory.
//!
//! # Examples
//!
//! ```
//! use skilltap_transcripts::SummaryBuilder;
//!
//! let builder = SummaryBuilder::new();
//! let summary = builder.finish();
//! assert!(summary.is_empty());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Error type for transcript operations.
pub type Error = anyhow::Error;
/// Result type for transcript operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Streaming aggregation of invocation statistics.
pub mod aggregate;
/// Duration formatting and table rendering.
pub mod format;
/// Locating transcript files on disk.
pub mod locate;
/// Permissive transcript record model.
pub mod record;

pub use aggregate::{analyze_files, AgentStats, AgentSummary, SummaryBuilder};
pub use format::{fmt_duration, render_summary};
pub use locate::{default_transcript_dir, find_transcripts, NoTranscripts};
pub use record::{ContentEntry, MessageBody, MessageContent, TaskInput, TranscriptRecord};
