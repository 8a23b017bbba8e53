//! Health check handler

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub models: ModelStatus,
}

/// Which primary backends are attached; `false` means the corresponding
/// scorer runs on its fallback heuristic.
#[derive(Serialize)]
pub struct ModelStatus {
    pub text_analyzer: bool,
    pub image_analyzer: bool,
    pub spam_detector: bool,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
        models: ModelStatus {
            text_analyzer: state.pipeline.text_scorer().is_loaded(),
            image_analyzer: state.pipeline.media_scorer().is_loaded(),
            spam_detector: state.pipeline.spam_gate().is_loaded(),
        },
    })
}
