//! Primary-model port traits
//!
//! Each scorer can be constructed with an optional "primary backend"
//! capability. Absence is a normal, tested configuration: every scorer owns
//! a documented fallback heuristic that takes over when the slot is empty or
//! the backend call fails. Selection happens once at construction, never
//! per call.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::entities::Detection;
use crate::error::ModelError;

/// Embedding-based text severity backend.
///
/// Output is expected to already be scaled to [0, 10]; the scorer blends it
/// with its keyword heuristic and clamps the combination.
#[async_trait]
pub trait TextEmbeddingModel: Send + Sync {
    async fn score(&self, text: &str) -> Result<f64, ModelError>;
}

/// Object/scene detection backend for media items.
#[async_trait]
pub trait ObjectDetector: Send + Sync {
    async fn detect(&self, path: &Path) -> Result<Vec<Detection>, ModelError>;
}

/// Learned spam classification backend.
///
/// Output is a probability in [0, 1]. When present it supersedes the
/// keyword heuristic entirely; when it fails the heuristic takes over.
#[async_trait]
pub trait SpamClassifier: Send + Sync {
    async fn predict(&self, text: &str) -> Result<f64, ModelError>;
}
