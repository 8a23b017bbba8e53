//! Test fixtures
//!
//! Factory functions for creating test reports with sensible defaults.

use crate::domain::entities::{PriorReportSummary, Report};

/// A plain, non-spam incident report.
pub fn test_report() -> Report {
    Report::new("two cars collided at the intersection of 5th and main, one driver is injured")
}

/// A report that the keyword heuristics classify as spam when combined
/// with a long history.
pub fn spam_report() -> Report {
    Report::new("FREE FREE FREE!!! CLICK HERE NOW viagra bitcoin lottery winner")
        .with_history(history_of(12))
}

/// A submitter history of `n` distinct prior reports.
pub fn history_of(n: usize) -> Vec<PriorReportSummary> {
    (0..n)
        .map(|i| PriorReportSummary {
            text: format!("earlier report number {} about something unrelated", i),
        })
        .collect()
}
