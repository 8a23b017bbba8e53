//! Report analysis handler
//!
//! `POST /analyze` accepts either a JSON body or a multipart form with
//! media attachments, runs the report through the scoring pipeline and
//! returns the flat scoring record.

use std::path::{Path, PathBuf};

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header, HeaderMap},
    Json,
};
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::domain::entities::{MediaItem, PriorReportSummary, Report, ScoringResult};
use crate::error::AppError;
use crate::AppState;

const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "mp4", "avi", "mov"];

/// JSON request body for `/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_credibility")]
    pub user_credibility: f64,
    #[serde(default)]
    pub report_history: Vec<PriorReportSummary>,
}

fn default_credibility() -> f64 {
    1.0
}

/// POST /analyze
///
/// Score an incident report. Multipart requests carry the same fields as
/// the JSON body plus any number of `media` file parts; accepted files are
/// stored under the upload directory and scored as a batch.
pub async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
) -> Result<Json<ScoringResult>, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let report = if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        report_from_multipart(multipart, &state.upload_dir).await?
    } else {
        let Json(body) = Json::<AnalyzeRequest>::from_request(request, &state)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        Report::new(body.text)
            .with_credibility(body.user_credibility)
            .with_history(body.report_history)
    };

    let result = state.pipeline.score_report(&report).await?;
    Ok(Json(result))
}

async fn report_from_multipart(
    mut multipart: Multipart,
    upload_dir: &Path,
) -> Result<Report, AppError> {
    let mut text = String::new();
    let mut user_credibility = default_credibility();
    let mut report_history = Vec::new();
    let mut media = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "text" => {
                text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            "user_credibility" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                user_credibility = raw
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("invalid credibility: {}", raw)))?;
            }
            "report_history" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                report_history = serde_json::from_str(&raw)
                    .map_err(|e| AppError::BadRequest(format!("invalid report history: {}", e)))?;
            }
            "media" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Upload(e.to_string()))?;
                match save_upload(upload_dir, &file_name, &bytes).await? {
                    Some(path) => media.push(MediaItem::from(path)),
                    None => warn!(%file_name, "rejected upload with disallowed extension"),
                }
            }
            other => {
                warn!(field = other, "ignoring unknown multipart field");
            }
        }
    }

    Ok(Report::new(text)
        .with_credibility(user_credibility)
        .with_history(report_history)
        .with_media(media))
}

/// Store an uploaded file under a collision-free name. Returns `None` for
/// files without an allowed extension.
async fn save_upload(
    upload_dir: &Path,
    file_name: &str,
    bytes: &[u8],
) -> Result<Option<PathBuf>, AppError> {
    let sanitized = sanitize_file_name(file_name);
    if !has_allowed_extension(&sanitized) {
        return Ok(None);
    }

    let path = upload_dir.join(format!("{}_{}", Uuid::new_v4(), sanitized));
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?;
    Ok(Some(path))
}

fn has_allowed_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Keep only the final path component and drop characters that could
/// escape the upload directory.
fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    base.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect()
}
