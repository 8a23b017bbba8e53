//! Media severity scorer
//!
//! Maps a batch of media items to one severity score in [0, 10]. Each item
//! is scored through an optional object detector, or through raw pixel
//! statistics when no detector is available; the batch result is the
//! maximum across items so a single severe item is never diluted.

use std::path::Path;
use std::sync::Arc;

use image::GenericImageView;
use tracing::{debug, warn};

use crate::app::scoring_config::{
    ScoringConfig, TierVocabulary, MEDIA_AREA_POINTS, MEDIA_AREA_SATURATION,
    MEDIA_DETECTION_SCALE, MEDIA_HIGH_WEIGHT, MEDIA_LOW_WEIGHT, MEDIA_LUMA_POINTS,
    MEDIA_MEDIUM_WEIGHT, MEDIA_RED_POINTS, UNDECODABLE_MEDIA_SCORE,
};
use crate::domain::entities::{Detection, MediaItem, SeverityScore};
use crate::domain::ports::ObjectDetector;
use crate::error::MediaError;

/// Severity estimator for uploaded media.
pub struct MediaSeverityScorer {
    detector: Option<Arc<dyn ObjectDetector>>,
    vocabulary: TierVocabulary,
    max_batch: usize,
}

impl MediaSeverityScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self::with_detector(config, None)
    }

    pub fn with_detector(
        config: &ScoringConfig,
        detector: Option<Arc<dyn ObjectDetector>>,
    ) -> Self {
        Self {
            detector,
            vocabulary: config.media_vocabulary.clone(),
            max_batch: config.max_media_batch,
        }
    }

    /// Whether a detector backend is attached.
    pub fn is_loaded(&self) -> bool {
        self.detector.is_some()
    }

    /// Score a batch of media items; the result is the per-item maximum.
    pub async fn score_batch(&self, items: &[MediaItem]) -> SeverityScore {
        if items.is_empty() {
            return SeverityScore::ZERO;
        }
        if items.len() > self.max_batch {
            warn!(
                submitted = items.len(),
                scored = self.max_batch,
                "media batch truncated"
            );
        }

        let mut max = SeverityScore::ZERO;
        for item in items.iter().take(self.max_batch) {
            let score = self.score_one(item).await;
            if score > max {
                max = score;
            }
        }

        debug!(items = items.len(), score = max.value(), "media batch scored");
        max
    }

    /// Score a single media item. Never errors: a missing file scores 0 and
    /// any other failure degrades to a bounded fallback.
    pub async fn score_one(&self, item: &MediaItem) -> SeverityScore {
        let path = item.path();
        if !path.exists() {
            let err = MediaError::NotFound(path.display().to_string());
            warn!("{}", err);
            return SeverityScore::ZERO;
        }

        if let Some(detector) = &self.detector {
            match detector.detect(path).await {
                Ok(detections) => return self.severity_from_detections(&detections),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        "detector failed, falling back to pixel statistics: {}", e
                    );
                }
            }
        }

        self.pixel_fallback(path)
    }

    /// Bucket detections into severity tiers and combine their confidences.
    ///
    /// A label joins the first tier (high → medium → low) containing any
    /// vocabulary term as a substring; one tier per detection.
    fn severity_from_detections(&self, detections: &[Detection]) -> SeverityScore {
        if detections.is_empty() {
            return SeverityScore::ZERO;
        }

        let mut high = 0.0;
        let mut medium = 0.0;
        let mut low = 0.0;

        for detection in detections {
            let label = detection.label.to_lowercase();
            let matches = |terms: &[String]| terms.iter().any(|term| label.contains(term.as_str()));

            if matches(&self.vocabulary.high) {
                high += detection.confidence;
            } else if matches(&self.vocabulary.medium) {
                medium += detection.confidence;
            } else if matches(&self.vocabulary.low) {
                low += detection.confidence;
            }
        }

        let weighted =
            high * MEDIA_HIGH_WEIGHT + medium * MEDIA_MEDIUM_WEIGHT + low * MEDIA_LOW_WEIGHT;
        SeverityScore::new((weighted * MEDIA_DETECTION_SCALE).min(SeverityScore::MAX))
    }

    /// Severity proxy from raw pixel statistics: image area plus red
    /// intensity (color) or luminance (grayscale).
    fn pixel_fallback(&self, path: &Path) -> SeverityScore {
        let img = match load_media(path) {
            Ok(img) => img,
            Err(e) => {
                // Present but unreadable: a bounded "unknown" score, not an
                // error and not zero.
                warn!(path = %path.display(), "{}", e);
                return SeverityScore::new(UNDECODABLE_MEDIA_SCORE);
            }
        };

        let (width, height) = img.dimensions();
        let area_factor =
            ((width as f64 * height as f64) / MEDIA_AREA_SATURATION).min(1.0);

        let score = if img.color().has_color() {
            let rgb = img.to_rgb8();
            let red_sum: u64 = rgb.pixels().map(|p| p.0[0] as u64).sum();
            let red_mean = red_sum as f64 / (rgb.pixels().len() as f64 * 255.0);
            area_factor * MEDIA_AREA_POINTS + red_mean * MEDIA_RED_POINTS
        } else {
            let luma = img.to_luma8();
            let luma_sum: u64 = luma.pixels().map(|p| p.0[0] as u64).sum();
            let luma_mean = luma_sum as f64 / (luma.pixels().len() as f64 * 255.0);
            area_factor * MEDIA_AREA_POINTS + luma_mean * MEDIA_LUMA_POINTS
        };

        SeverityScore::new(score.min(SeverityScore::MAX))
    }
}

fn load_media(path: &Path) -> Result<image::DynamicImage, MediaError> {
    Ok(image::open(path)?)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use image::{GrayImage, Rgb, RgbImage};
    use tempfile::TempDir;

    use super::*;
    use crate::test_utils::{FailingDetector, ScriptedDetector};

    fn scorer() -> MediaSeverityScorer {
        MediaSeverityScorer::new(&ScoringConfig::default())
    }

    fn write_red_png(dir: &TempDir, name: &str, width: u32, height: u32) -> MediaItem {
        let path = dir.path().join(name);
        let img = RgbImage::from_pixel(width, height, Rgb([255, 0, 0]));
        img.save(&path).unwrap();
        MediaItem::from(path)
    }

    fn write_gray_png(dir: &TempDir, name: &str, value: u8) -> MediaItem {
        let path = dir.path().join(name);
        let img = GrayImage::from_pixel(100, 100, image::Luma([value]));
        img.save(&path).unwrap();
        MediaItem::from(path)
    }

    fn touch(dir: &TempDir, name: &str) -> MediaItem {
        let path = dir.path().join(name);
        fs::write(&path, b"").unwrap();
        MediaItem::from(path)
    }

    #[tokio::test]
    async fn empty_batch_scores_zero() {
        assert_eq!(scorer().score_batch(&[]).await, SeverityScore::ZERO);
    }

    #[tokio::test]
    async fn missing_file_scores_zero() {
        let score = scorer()
            .score_one(&MediaItem::from("no/such/file.jpg"))
            .await;
        assert_eq!(score, SeverityScore::ZERO);
    }

    #[tokio::test]
    async fn undecodable_file_gets_bounded_fallback() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corrupt.jpg");
        fs::write(&path, b"not actually a jpeg").unwrap();
        let score = scorer().score_one(&MediaItem::from(path)).await;
        assert_eq!(score.value(), UNDECODABLE_MEDIA_SCORE);
    }

    #[tokio::test]
    async fn red_image_pixel_fallback_arithmetic() {
        let dir = TempDir::new().unwrap();
        // 100x100 fully red: area factor 0.01, red mean 1.0
        let item = write_red_png(&dir, "red.png", 100, 100);
        let score = scorer().score_one(&item).await;
        let expected = 0.01 * MEDIA_AREA_POINTS + 1.0 * MEDIA_RED_POINTS;
        assert!((score.value() - expected).abs() < 1e-9, "got {}", score);
    }

    #[tokio::test]
    async fn gray_image_uses_luminance_weighting() {
        let dir = TempDir::new().unwrap();
        let item = write_gray_png(&dir, "gray.png", 255);
        let score = scorer().score_one(&item).await;
        let expected = 0.01 * MEDIA_AREA_POINTS + 1.0 * MEDIA_LUMA_POINTS;
        assert!((score.value() - expected).abs() < 1e-9, "got {}", score);
    }

    #[tokio::test]
    async fn batch_takes_maximum_not_average() {
        let dir = TempDir::new().unwrap();
        let items = vec![
            touch(&dir, "a.jpg"),
            touch(&dir, "b.jpg"),
            touch(&dir, "c.jpg"),
        ];
        // Per-item scores 2.0, 9.0, 1.0 via scripted detections.
        let detector = ScriptedDetector::new()
            .with_detections("a.jpg", vec![Detection::new("person", 1.0)])
            .with_detections("b.jpg", vec![Detection::new("gun", 0.9)])
            .with_detections("c.jpg", vec![Detection::new("person", 0.5)]);
        let scorer = MediaSeverityScorer::with_detector(
            &ScoringConfig::default(),
            Some(Arc::new(detector)),
        );

        let score = scorer.score_batch(&items).await;
        assert!((score.value() - 9.0).abs() < 1e-9, "got {}", score);
    }

    #[tokio::test]
    async fn detection_labels_bucket_by_first_matching_tier() {
        let dir = TempDir::new().unwrap();
        let item = touch(&dir, "scene.jpg");
        // "person with knife" contains both a high and a low term; only the
        // high tier counts for that detection.
        let detector = ScriptedDetector::new().with_detections(
            "scene.jpg",
            vec![
                Detection::new("person with knife", 0.6),
                Detection::new("baseball bat", 0.4),
                Detection::new("bicycle", 0.5),
            ],
        );
        let scorer = MediaSeverityScorer::with_detector(
            &ScoringConfig::default(),
            Some(Arc::new(detector)),
        );

        let score = scorer.score_one(&item).await;
        let expected = ((0.6 * MEDIA_HIGH_WEIGHT + 0.4 * MEDIA_MEDIUM_WEIGHT
            + 0.5 * MEDIA_LOW_WEIGHT)
            * MEDIA_DETECTION_SCALE)
            .min(10.0);
        assert!((score.value() - expected).abs() < 1e-9, "got {}", score);
    }

    #[tokio::test]
    async fn unrecognized_labels_score_zero() {
        let dir = TempDir::new().unwrap();
        let item = touch(&dir, "plants.jpg");
        let detector = ScriptedDetector::new().with_detections(
            "plants.jpg",
            vec![Detection::new("potted plant", 0.95)],
        );
        let scorer = MediaSeverityScorer::with_detector(
            &ScoringConfig::default(),
            Some(Arc::new(detector)),
        );
        assert_eq!(scorer.score_one(&item).await, SeverityScore::ZERO);
    }

    #[tokio::test]
    async fn detector_failure_degrades_to_pixel_fallback() {
        let dir = TempDir::new().unwrap();
        let item = write_red_png(&dir, "red.png", 100, 100);
        let scorer = MediaSeverityScorer::with_detector(
            &ScoringConfig::default(),
            Some(Arc::new(FailingDetector)),
        );
        let score = scorer.score_one(&item).await;
        let expected = 0.01 * MEDIA_AREA_POINTS + 1.0 * MEDIA_RED_POINTS;
        assert!((score.value() - expected).abs() < 1e-9);
    }

    #[tokio::test]
    async fn batch_is_truncated_to_configured_size() {
        let dir = TempDir::new().unwrap();
        let mut config = ScoringConfig::default();
        config.max_media_batch = 1;
        let items = vec![touch(&dir, "first.jpg"), touch(&dir, "second.jpg")];
        // Only the first item is scored; the severe second one is dropped.
        let detector = ScriptedDetector::new()
            .with_detections("first.jpg", vec![Detection::new("person", 0.5)])
            .with_detections("second.jpg", vec![Detection::new("gun", 1.0)]);
        let scorer = MediaSeverityScorer::with_detector(&config, Some(Arc::new(detector)));

        let score = scorer.score_batch(&items).await;
        assert!((score.value() - 1.0).abs() < 1e-9);
    }
}
