//! Spam gate
//!
//! Classifies a report as spam/not-spam from its text and the submitter's
//! prior reports. Reports a probability only; the pipeline owns the
//! threshold decision.

use std::sync::Arc;

use regex::Regex;
use tracing::{debug, warn};

use crate::app::scoring_config::{
    ScoringConfig, SPAM_CAPS_RATIO, SPAM_CAPS_WEIGHT, SPAM_DUPLICATE_SIMILARITY,
    SPAM_DUPLICATE_WEIGHT, SPAM_HISTORY_LEN, SPAM_HISTORY_WEIGHT, SPAM_KEYWORD_CAP,
    SPAM_KEYWORD_WEIGHT, SPAM_REPEAT_RUN, SPAM_REPEAT_WEIGHT, SPAM_SHORT_TEXT_LEN,
    SPAM_SHORT_TEXT_WEIGHT,
};
use crate::domain::entities::{PriorReportSummary, SpamProbability};
use crate::domain::ports::SpamClassifier;

/// Spam probability estimator with an optional learned backend.
///
/// The keyword heuristic is always available; a [`SpamClassifier`] passed at
/// construction supersedes it when its prediction succeeds.
pub struct SpamGate {
    classifier: Option<Arc<dyn SpamClassifier>>,
    keywords: Vec<String>,
    max_history_scan: usize,
    url_pattern: Regex,
    markup_pattern: Regex,
    whitespace_pattern: Regex,
}

impl SpamGate {
    pub fn new(config: &ScoringConfig) -> Self {
        Self::with_classifier(config, None)
    }

    pub fn with_classifier(
        config: &ScoringConfig,
        classifier: Option<Arc<dyn SpamClassifier>>,
    ) -> Self {
        Self {
            classifier,
            keywords: config.spam_keywords.clone(),
            max_history_scan: config.max_history_scan,
            url_pattern: Regex::new(r"https?://\S+|www\.\S+").expect("valid URL pattern"),
            markup_pattern: Regex::new(r"<[^>]*>").expect("valid markup pattern"),
            whitespace_pattern: Regex::new(r"\s+").expect("valid whitespace pattern"),
        }
    }

    /// Whether a learned backend is attached.
    pub fn is_loaded(&self) -> bool {
        self.classifier.is_some()
    }

    /// Estimate the probability that a report is spam.
    ///
    /// Empty text yields the neutral 0.5: not enough signal to judge.
    pub async fn classify(
        &self,
        text: &str,
        history: &[PriorReportSummary],
    ) -> SpamProbability {
        if text.trim().is_empty() {
            return SpamProbability::NEUTRAL;
        }

        // Measured before normalization lowercases everything away.
        let caps_ratio = uppercase_ratio(text);
        let normalized = self.normalize(text);

        if let Some(classifier) = &self.classifier {
            match classifier.predict(&normalized).await {
                Ok(probability) => return SpamProbability::new(probability),
                Err(e) => {
                    warn!("spam classifier failed, falling back to heuristic: {}", e);
                }
            }
        }

        self.heuristic(&normalized, caps_ratio, history)
    }

    /// Lowercase, strip URLs and markup, collapse whitespace.
    fn normalize(&self, text: &str) -> String {
        let text = text.to_lowercase();
        let text = self.url_pattern.replace_all(&text, "");
        let text = self.markup_pattern.replace_all(&text, "");
        self.whitespace_pattern
            .replace_all(&text, " ")
            .trim()
            .to_string()
    }

    fn heuristic(
        &self,
        normalized: &str,
        caps_ratio: f64,
        history: &[PriorReportSummary],
    ) -> SpamProbability {
        let keyword_hits = self
            .keywords
            .iter()
            .filter(|keyword| normalized.contains(keyword.as_str()))
            .count();
        let mut score =
            (keyword_hits as f64 * SPAM_KEYWORD_WEIGHT).min(SPAM_KEYWORD_CAP);

        if normalized.chars().count() < SPAM_SHORT_TEXT_LEN {
            score += SPAM_SHORT_TEXT_WEIGHT;
        }

        if caps_ratio > SPAM_CAPS_RATIO {
            score += SPAM_CAPS_WEIGHT;
        }

        if has_repeated_run(normalized, SPAM_REPEAT_RUN) {
            score += SPAM_REPEAT_WEIGHT;
        }

        if history.len() > SPAM_HISTORY_LEN {
            score += SPAM_HISTORY_WEIGHT;
        }

        // First duplicate wins; the scan is bounded to keep per-request cost
        // independent of history size.
        let duplicate = history
            .iter()
            .take(self.max_history_scan)
            .any(|prior| jaccard_similarity(normalized, &prior.text) > SPAM_DUPLICATE_SIMILARITY);
        if duplicate {
            score += SPAM_DUPLICATE_WEIGHT;
        }

        let probability = SpamProbability::new(score);
        debug!(
            keyword_hits,
            history_len = history.len(),
            probability = probability.value(),
            "spam heuristic complete"
        );
        probability
    }
}

/// Fraction of uppercase characters among all characters.
fn uppercase_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let upper = text.chars().filter(|c| c.is_uppercase()).count();
    upper as f64 / total as f64
}

/// True when any single character repeats `run` times consecutively.
fn has_repeated_run(text: &str, run: usize) -> bool {
    let mut current = None;
    let mut count = 0;
    for c in text.chars() {
        if Some(c) == current {
            count += 1;
        } else {
            current = Some(c);
            count = 1;
        }
        if count >= run {
            return true;
        }
    }
    false
}

/// Word-set Jaccard similarity between two texts.
fn jaccard_similarity(a: &str, b: &str) -> f64 {
    use std::collections::HashSet;

    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let b = b.to_lowercase();
    let words_b: HashSet<&str> = b.split_whitespace().collect();

    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();
    intersection as f64 / union as f64
}
