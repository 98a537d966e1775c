//! Run summary reporting

use super::EngineStats;
use serde::Serialize;
use uuid::Uuid;

/// Summary statistics from one processing run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Identifier attached to every log line of the run
    pub run_id: Uuid,
    /// Input lines consumed, including failed ones
    pub lines_read: usize,
    /// Commands applied, by kind
    pub commands: EngineStats,
    /// Query results handed to the sink
    pub results_written: u64,
    /// Records dropped under the skip policy
    pub skipped_errors: u64,
    /// Bid levels resting at the end of the run
    pub bid_levels: usize,
    /// Ask levels resting at the end of the run
    pub ask_levels: usize,
}

impl RunSummary {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        format!(
            r#"
══════════════════════════════════════════════════════
               RUN SUMMARY  {}
══════════════════════════════════════════════════════

COMMANDS
───────────────────────────────────────────────────────
Lines Read:       {}
Updates:          {}
Queries:          {}
Market Orders:    {}
Ignored:          {}
Skipped Errors:   {}

OUTPUT
───────────────────────────────────────────────────────
Results Written:  {}
Bid Levels:       {}
Ask Levels:       {}
══════════════════════════════════════════════════════
"#,
            self.run_id,
            self.lines_read,
            self.commands.updates,
            self.commands.queries,
            self.commands.market_orders,
            self.commands.ignored,
            self.skipped_errors,
            self.results_written,
            self.bid_levels,
            self.ask_levels,
        )
    }

    /// Format as pretty JSON
    pub fn format_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
