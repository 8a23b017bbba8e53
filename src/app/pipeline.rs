//! Scoring pipeline
//!
//! Sequences one report through the scoring stages:
//! received → spam-checked → (terminal spam | severity-scored) → aggregated.
//! The spam gate runs first and short-circuits severity scoring entirely;
//! otherwise the text and media scorers run concurrently and the aggregator
//! combines their outputs.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::app::aggregator::ScoreAggregator;
use crate::app::media_scorer::MediaSeverityScorer;
use crate::app::scoring_config::ScoringConfig;
use crate::app::spam_gate::SpamGate;
use crate::app::text_scorer::TextSeverityScorer;
use crate::domain::entities::{Report, ScoringResult, SeverityScore};
use crate::error::ScoringError;

/// Orchestrates the scorers for one report at a time.
///
/// Owns its collaborators by `Arc`; concurrent requests share the same
/// read-only scorer instances.
pub struct ScoringPipeline {
    spam_gate: Arc<SpamGate>,
    text_scorer: Arc<TextSeverityScorer>,
    media_scorer: Arc<MediaSeverityScorer>,
    aggregator: ScoreAggregator,
    spam_threshold: f64,
}

impl ScoringPipeline {
    pub fn new(
        config: &ScoringConfig,
        spam_gate: Arc<SpamGate>,
        text_scorer: Arc<TextSeverityScorer>,
        media_scorer: Arc<MediaSeverityScorer>,
    ) -> Self {
        Self {
            spam_gate,
            text_scorer,
            media_scorer,
            aggregator: ScoreAggregator::new(config.weights),
            spam_threshold: config.spam_threshold,
        }
    }

    /// Build a pipeline with heuristic-only scorers from configuration.
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(
            config,
            Arc::new(SpamGate::new(config)),
            Arc::new(TextSeverityScorer::new(config)),
            Arc::new(MediaSeverityScorer::new(config)),
        )
    }

    pub fn spam_gate(&self) -> &SpamGate {
        &self.spam_gate
    }

    pub fn text_scorer(&self) -> &TextSeverityScorer {
        &self.text_scorer
    }

    pub fn media_scorer(&self) -> &MediaSeverityScorer {
        &self.media_scorer
    }

    /// Score one report end to end.
    ///
    /// The only caller-visible error is a report with neither text nor
    /// media; every downstream failure degrades to a fallback score.
    #[instrument(skip_all, fields(media_items = report.media.len()))]
    pub async fn score_report(&self, report: &Report) -> Result<ScoringResult, ScoringError> {
        if !report.has_content() {
            return Err(ScoringError::NoContent);
        }

        let spam_probability = self
            .spam_gate
            .classify(&report.text, &report.report_history)
            .await;
        let is_spam = spam_probability.value() > self.spam_threshold;

        if is_spam {
            // Severity scoring is skipped on purpose: spam is not
            // informative about severity and scoring it would waste the
            // most expensive part of the pipeline.
            info!(
                spam_probability = spam_probability.value(),
                "report classified as spam, skipping severity scoring"
            );
            return Ok(self.aggregator.aggregate(
                SeverityScore::ZERO,
                SeverityScore::ZERO,
                report.user_credibility,
                spam_probability,
                true,
            ));
        }

        // Independent signals, no ordering dependency.
        let (text_severity, media_severity) = tokio::join!(
            self.text_scorer.score(&report.text),
            self.media_scorer.score_batch(&report.media),
        );

        let result = self.aggregator.aggregate(
            text_severity,
            media_severity,
            report.user_credibility,
            spam_probability,
            false,
        );

        info!(
            emergency_score = result.emergency_score,
            text_severity = result.text_severity.value(),
            media_severity = result.media_severity.value(),
            "analysis complete"
        );
        Ok(result)
    }
}
