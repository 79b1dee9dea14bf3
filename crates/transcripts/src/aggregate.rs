//! Streaming aggregation of `Task` invocations and their results.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::record::TranscriptRecord;

/// Aggregate statistics for one sub-agent type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AgentStats {
    /// Invocations issued, whether or not a result ever arrived.
    pub count: u64,
    /// Total duration over matched results only, in milliseconds.
    pub total_duration_ms: u64,
}

impl AgentStats {
    /// Average duration per invocation, in milliseconds.
    ///
    /// The denominator is the full invocation count, so an agent whose
    /// results never arrived reports a lower average than its matched
    /// results alone would suggest.
    pub fn avg_duration_ms(&self) -> u64 {
        if self.count == 0 {
            0
        } else {
            self.total_duration_ms / self.count
        }
    }
}

/// Accumulates agent statistics across transcript files.
///
/// Invocation/result correlation is scoped to one file at a time: ids left
/// unmatched at end of file are dropped with the file's pending map and
/// never contribute a duration. Statistics accumulate across files.
#[derive(Debug, Default)]
pub struct SummaryBuilder {
    stats: BTreeMap<String, AgentStats>,
}

impl SummaryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Streams one transcript file into the summary.
    ///
    /// Lines that are not valid JSON are skipped; transcripts routinely end
    /// in a truncated line while a session is live.
    pub fn ingest_file(&mut self, path: &Path) -> Result<()> {
        let file =
            File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let reader = BufReader::new(file);

        // tool_use_id -> agent type, for invocations awaiting a result.
        let mut pending: HashMap<String, String> = HashMap::new();

        for line in reader.lines() {
            let line = line.with_context(|| format!("reading {}", path.display()))?;
            let record: TranscriptRecord = match serde_json::from_str(line.trim()) {
                Ok(record) => record,
                Err(err) => {
                    debug!(error = %err, "skipping malformed transcript line");
                    continue;
                }
            };
            self.ingest_record(&record, &mut pending);
        }

        if !pending.is_empty() {
            debug!(
                file = %path.display(),
                unmatched = pending.len(),
                "invocations without results at end of file"
            );
        }
        Ok(())
    }

    /// Folds a single record into the summary.
    pub fn ingest_record(
        &mut self,
        record: &TranscriptRecord,
        pending: &mut HashMap<String, String>,
    ) {
        match record.kind.as_deref() {
            Some("assistant") => {
                for entry in record.content_entries() {
                    if let Some((id, agent_type)) = entry.task_invocation() {
                        pending.insert(id.to_string(), agent_type.to_string());
                        // Counted at issue time, independent of whether a
                        // result ever arrives.
                        self.stats.entry(agent_type.to_string()).or_default().count += 1;
                    }
                }
            }
            Some("user") => {
                for entry in record.content_entries() {
                    let Some(id) = entry.result_id() else {
                        continue;
                    };
                    // Each id is consumed at most once; a duplicate result is
                    // no longer pending and is ignored.
                    if let Some(agent_type) = pending.remove(id) {
                        let duration = record.result_duration_ms();
                        self.stats
                            .entry(agent_type)
                            .or_default()
                            .total_duration_ms += duration;
                    }
                }
            }
            _ => {}
        }
    }

    /// True when no invocations have been observed.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Finishes the build.
    pub fn finish(self) -> AgentSummary {
        AgentSummary { stats: self.stats }
    }
}

/// Finished per-agent aggregation.
#[derive(Debug, Default)]
pub struct AgentSummary {
    stats: BTreeMap<String, AgentStats>,
}

impl AgentSummary {
    /// True when no invocations were observed.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Iterates agents in lexicographic label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AgentStats)> {
        self.stats.iter().map(|(label, stats)| (label.as_str(), stats))
    }

    /// Looks up one agent's statistics.
    pub fn get(&self, agent_type: &str) -> Option<&AgentStats> {
        self.stats.get(agent_type)
    }

    /// Totals across all agents.
    pub fn totals(&self) -> AgentStats {
        let mut totals = AgentStats::default();
        for stats in self.stats.values() {
            totals.count += stats.count;
            totals.total_duration_ms += stats.total_duration_ms;
        }
        totals
    }
}

/// Aggregates agent invocations across `paths`.
///
/// An unreadable file is reported on the diagnostic stream and skipped; the
/// remaining files still contribute to the summary.
pub fn analyze_files<P: AsRef<Path>>(paths: &[P]) -> AgentSummary {
    let mut builder = SummaryBuilder::new();
    for path in paths {
        let path = path.as_ref();
        if let Err(err) = builder.ingest_file(path) {
            warn!(file = %path.display(), error = %err, "skipping unreadable transcript");
            eprintln!("Error reading {}: {err:#}", path.display());
        }
    }
    builder.finish()
}
