//! Duration formatting and the summary table.

use crate::aggregate::AgentSummary;

const TABLE_WIDTH: usize = 70;

/// Formats a millisecond duration for humans.
///
/// Durations under a second render as milliseconds, under a minute as
/// seconds with one decimal, and longer as minutes with one decimal.
pub fn fmt_duration(ms: u64) -> String {
    if ms >= 60_000 {
        format!("{:.1}m", ms as f64 / 60_000.0)
    } else if ms >= 1_000 {
        format!("{:.1}s", ms as f64 / 1_000.0)
    } else {
        format!("{ms}ms")
    }
}

/// Renders the summary as a fixed-width table with a trailing total row.
pub fn render_summary(summary: &AgentSummary) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("Claude Code Agent Run Summary\n");
    out.push_str(&"=".repeat(TABLE_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{:<30} {:>8} {:>14} {:>14}\n",
        "Agent Type", "Runs", "Total Time", "Avg Time"
    ));
    out.push_str(&"-".repeat(TABLE_WIDTH));
    out.push('\n');

    for (agent_type, stats) in summary.iter() {
        out.push_str(&format!(
            "{:<30} {:>8} {:>14} {:>14}\n",
            agent_type,
            stats.count,
            fmt_duration(stats.total_duration_ms),
            fmt_duration(stats.avg_duration_ms())
        ));
    }

    out.push_str(&"-".repeat(TABLE_WIDTH));
    out.push('\n');
    let totals = summary.totals();
    out.push_str(&format!(
        "{:<30} {:>8} {:>14}\n",
        "TOTAL",
        totals.count,
        fmt_duration(totals.total_duration_ms)
    ));
    out.push('\n');
    out
}
