//! Score aggregator
//!
//! Combines text severity, media severity and submitter credibility into
//! the final emergency score. Spam suppresses everything: a spam report
//! must not leak a nonzero severity.

use chrono::Utc;
use tracing::debug;

use crate::app::scoring_config::AggregationWeights;
use crate::domain::entities::{ScoringResult, SeverityScore, SpamProbability};

pub struct ScoreAggregator {
    weights: AggregationWeights,
}

impl ScoreAggregator {
    pub fn new(weights: AggregationWeights) -> Self {
        Self { weights }
    }

    /// Produce the final result record. Out-of-bound credibility is clamped
    /// defensively rather than propagated; the score newtypes are bounded by
    /// construction.
    pub fn aggregate(
        &self,
        text_severity: SeverityScore,
        media_severity: SeverityScore,
        user_credibility: f64,
        spam_probability: SpamProbability,
        is_spam: bool,
    ) -> ScoringResult {
        let user_credibility = user_credibility.clamp(0.0, 1.0);

        let (emergency_score, text_severity, media_severity) = if is_spam {
            (0.0, SeverityScore::ZERO, SeverityScore::ZERO)
        } else {
            let score = text_severity.value() * self.weights.text
                + media_severity.value() * self.weights.media
                + user_credibility * self.weights.credibility;
            (score, text_severity, media_severity)
        };

        debug!(emergency_score, is_spam, "aggregation complete");

        ScoringResult {
            emergency_score,
            text_severity,
            media_severity,
            user_credibility,
            spam_probability,
            is_spam,
            analysis_timestamp: Utc::now(),
        }
    }
}
