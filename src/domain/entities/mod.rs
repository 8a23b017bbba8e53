//! Domain entities
//!
//! Pure domain models for reports and scoring outcomes. No transport or
//! storage concerns live here.

pub mod report;
pub mod scoring;

pub use report::{MediaItem, PriorReportSummary, Report};
pub use scoring::{Detection, ScoringResult, SeverityScore, SpamProbability};
