//! Scoring domain entities
//!
//! Bounded score newtypes and the result record handed back to the caller.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Severity estimate bounded to [0, 10].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SeverityScore(f64);

impl SeverityScore {
    pub const ZERO: SeverityScore = SeverityScore(0.0);
    pub const MAX: f64 = 10.0;

    /// Construct a severity score, clamping into [0, 10].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, Self::MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for SeverityScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for SeverityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Probability that a report is spam, bounded to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SpamProbability(f64);

impl SpamProbability {
    /// Returned when there is no text to judge.
    pub const NEUTRAL: SpamProbability = SpamProbability(0.5);

    /// Construct a spam probability, clamping into [0, 1].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for SpamProbability {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// A single object detection reported by a primary detector backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Detector class label, e.g. "knife" or "person".
    pub label: String,
    /// Detector confidence in [0, 1].
    pub confidence: f64,
}

impl Detection {
    // Constructed by detector adapters; only test stubs exist in this crate.
    #[allow(dead_code)]
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Final outcome of scoring one report. Created once, never mutated.
///
/// Serializes to the flat record the transport layer returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    pub emergency_score: f64,
    pub text_severity: SeverityScore,
    pub media_severity: SeverityScore,
    pub user_credibility: f64,
    pub spam_probability: SpamProbability,
    pub is_spam: bool,
    pub analysis_timestamp: DateTime<Utc>,
}
