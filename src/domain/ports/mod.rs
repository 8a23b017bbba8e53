//! Domain ports (traits)
//!
//! Port traits define the capabilities the scoring core may be given.
//! Concrete inference backends live outside this crate; tests provide
//! in-memory stubs.

pub mod models;

pub use models::{ObjectDetector, SpamClassifier, TextEmbeddingModel};
