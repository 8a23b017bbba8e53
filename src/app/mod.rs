//! Application layer
//!
//! The scoring pipeline and its component scorers. Each scorer owns a
//! deterministic fallback heuristic and an optional primary backend slot;
//! the pipeline wires them together per report.

pub mod aggregator;
pub mod media_scorer;
pub mod pipeline;
pub mod scoring_config;
pub mod spam_gate;
pub mod text_scorer;

pub use aggregator::ScoreAggregator;
pub use media_scorer::MediaSeverityScorer;
pub use pipeline::ScoringPipeline;
pub use scoring_config::{AggregationWeights, ScoringConfig, TierVocabulary};
pub use spam_gate::SpamGate;
pub use text_scorer::TextSeverityScorer;
