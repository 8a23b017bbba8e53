//! Stub implementations of the model port traits
//!
//! Fixed-value and always-failing variants cover both sides of every
//! capability slot: backend present and healthy, and backend present but
//! failing (which must degrade to the heuristic, never error out).

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::entities::Detection;
use crate::domain::ports::{ObjectDetector, SpamClassifier, TextEmbeddingModel};
use crate::error::ModelError;

/// Text model returning one fixed score for every input.
pub struct FixedTextModel {
    score: f64,
}

impl FixedTextModel {
    pub fn new(score: f64) -> Self {
        Self { score }
    }
}

#[async_trait]
impl TextEmbeddingModel for FixedTextModel {
    async fn score(&self, _text: &str) -> Result<f64, ModelError> {
        Ok(self.score)
    }
}

/// Text model whose every call fails.
pub struct FailingTextModel;

#[async_trait]
impl TextEmbeddingModel for FailingTextModel {
    async fn score(&self, _text: &str) -> Result<f64, ModelError> {
        Err(ModelError::Inference("stub text model failure".to_string()))
    }
}

/// Spam classifier returning one fixed probability for every input.
pub struct FixedSpamClassifier {
    probability: f64,
}

impl FixedSpamClassifier {
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }
}

#[async_trait]
impl SpamClassifier for FixedSpamClassifier {
    async fn predict(&self, _text: &str) -> Result<f64, ModelError> {
        Ok(self.probability)
    }
}

/// Spam classifier whose every call fails.
pub struct FailingSpamClassifier;

#[async_trait]
impl SpamClassifier for FailingSpamClassifier {
    async fn predict(&self, _text: &str) -> Result<f64, ModelError> {
        Err(ModelError::Unavailable(
            "stub spam classifier failure".to_string(),
        ))
    }
}

/// Detector returning scripted detections keyed by file name.
///
/// Files without a script entry detect nothing.
#[derive(Default)]
pub struct ScriptedDetector {
    by_file: HashMap<String, Vec<Detection>>,
}

impl ScriptedDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detections(mut self, file_name: &str, detections: Vec<Detection>) -> Self {
        self.by_file.insert(file_name.to_string(), detections);
        self
    }
}

#[async_trait]
impl ObjectDetector for ScriptedDetector {
    async fn detect(&self, path: &Path) -> Result<Vec<Detection>, ModelError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        Ok(self.by_file.get(name).cloned().unwrap_or_default())
    }
}

/// Detector whose every call fails.
pub struct FailingDetector;

#[async_trait]
impl ObjectDetector for FailingDetector {
    async fn detect(&self, _path: &Path) -> Result<Vec<Detection>, ModelError> {
        Err(ModelError::Inference("stub detector failure".to_string()))
    }
}
