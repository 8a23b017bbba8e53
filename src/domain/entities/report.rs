//! Report domain entities
//!
//! An incident report as submitted for scoring: free text, optional media
//! items, and per-submitter context (credibility, prior reports).

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Reference to one uploaded media item (image or video frame) on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem(pub PathBuf);

impl MediaItem {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for MediaItem {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&str> for MediaItem {
    fn from(path: &str) -> Self {
        Self(PathBuf::from(path))
    }
}

/// Summary of a prior report from the same submitter.
///
/// Only the text is kept; it feeds the duplicate/frequency spam signals.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PriorReportSummary {
    pub text: String,
}

/// An incident report, immutable for the duration of one scoring pass.
#[derive(Debug, Clone)]
pub struct Report {
    pub text: String,
    pub media: Vec<MediaItem>,
    /// Caller-supplied trust weight for the submitter, in [0, 1].
    pub user_credibility: f64,
    pub report_history: Vec<PriorReportSummary>,
}

impl Report {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            media: Vec::new(),
            user_credibility: 1.0,
            report_history: Vec::new(),
        }
    }

    pub fn with_media(mut self, media: Vec<MediaItem>) -> Self {
        self.media = media;
        self
    }

    pub fn with_credibility(mut self, credibility: f64) -> Self {
        self.user_credibility = credibility;
        self
    }

    pub fn with_history(mut self, history: Vec<PriorReportSummary>) -> Self {
        self.report_history = history;
        self
    }

    /// A report must carry text or media to be scorable.
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty() || !self.media.is_empty()
    }
}
