//! Text severity scorer
//!
//! Maps free text to a severity score in [0, 10] via an optional
//! embedding-based backend blended with a tiered keyword heuristic.

use std::sync::Arc;

use regex::Regex;
use tracing::{debug, warn};

use crate::app::scoring_config::{
    ScoringConfig, TierVocabulary, TEXT_HEURISTIC_BLEND, TEXT_HIGH_WEIGHT, TEXT_LOW_WEIGHT,
    TEXT_MEDIUM_WEIGHT, TEXT_MODEL_BLEND, TEXT_SCALE_DIVISOR,
};
use crate::domain::entities::SeverityScore;
use crate::domain::ports::TextEmbeddingModel;

/// Severity estimator for report text.
pub struct TextSeverityScorer {
    model: Option<Arc<dyn TextEmbeddingModel>>,
    vocabulary: TierVocabulary,
    whitespace_pattern: Regex,
}

impl TextSeverityScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self::with_model(config, None)
    }

    pub fn with_model(
        config: &ScoringConfig,
        model: Option<Arc<dyn TextEmbeddingModel>>,
    ) -> Self {
        Self {
            model,
            vocabulary: config.text_vocabulary.clone(),
            whitespace_pattern: Regex::new(r"\s+").expect("valid whitespace pattern"),
        }
    }

    /// Whether an embedding backend is attached.
    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Score text severity. Empty text scores 0.
    pub async fn score(&self, text: &str) -> SeverityScore {
        if text.trim().is_empty() {
            return SeverityScore::ZERO;
        }

        let normalized = self.normalize(text);
        let heuristic = self.heuristic(&normalized);

        if let Some(model) = &self.model {
            match model.score(&normalized).await {
                Ok(model_score) => {
                    let blended = model_score * TEXT_MODEL_BLEND
                        + heuristic.value() * TEXT_HEURISTIC_BLEND;
                    return SeverityScore::new(blended);
                }
                Err(e) => {
                    warn!("text model failed, falling back to heuristic: {}", e);
                }
            }
        }

        heuristic
    }

    fn normalize(&self, text: &str) -> String {
        let text = text.to_lowercase();
        self.whitespace_pattern
            .replace_all(&text, " ")
            .trim()
            .to_string()
    }

    /// Distinct keyword matches per tier, weighted and scaled into [0, 10].
    fn heuristic(&self, normalized: &str) -> SeverityScore {
        let count_hits = |terms: &[String]| {
            terms
                .iter()
                .filter(|term| normalized.contains(term.as_str()))
                .count() as f64
        };

        let high = count_hits(&self.vocabulary.high);
        let medium = count_hits(&self.vocabulary.medium);
        let low = count_hits(&self.vocabulary.low);

        let weighted =
            high * TEXT_HIGH_WEIGHT + medium * TEXT_MEDIUM_WEIGHT + low * TEXT_LOW_WEIGHT;
        let score = SeverityScore::new((weighted / TEXT_SCALE_DIVISOR).min(SeverityScore::MAX));

        debug!(
            high,
            medium,
            low,
            score = score.value(),
            "text heuristic complete"
        );
        score
    }
}
