//! Axum route handlers for the Storage API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::storage::{FeedbackData, Improvement, StoredResume, UserPreferences, UserRating};
use crate::state::AppState;
use crate::storage::manager::StorageKey;

const FEATURES: &[&str] = &[
    "ai_suggestions",
    "ats_optimization",
    "job_matching",
    "templates",
    "overall",
];

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub saved: bool,
}

#[derive(Debug, Deserialize)]
pub struct RatingRequest {
    pub feature: String,
    pub rating: u8,
    #[serde(default)]
    pub feedback: String,
}

#[derive(Debug, Deserialize)]
pub struct ImprovementRequest {
    pub section: String,
    pub suggestion: String,
    pub applied: bool,
}

#[derive(Debug, Deserialize)]
pub struct ClearQuery {
    pub key: Option<StorageKey>,
}

#[derive(Debug, Serialize)]
pub struct SizeResponse {
    pub bytes: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/storage/resume
pub async fn handle_load_resume(State(state): State<AppState>) -> Json<Option<StoredResume>> {
    Json(state.storage.load_resume().await)
}

/// PUT /api/v1/storage/resume
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(data): Json<StoredResume>,
) -> Json<SaveResponse> {
    Json(SaveResponse {
        saved: state.storage.save_resume(data).await,
    })
}

/// GET /api/v1/storage/draft
pub async fn handle_load_draft(State(state): State<AppState>) -> Json<Option<StoredResume>> {
    Json(state.storage.load_draft().await)
}

/// PUT /api/v1/storage/draft
pub async fn handle_save_draft(
    State(state): State<AppState>,
    Json(data): Json<StoredResume>,
) -> Json<SaveResponse> {
    Json(SaveResponse {
        saved: state.storage.save_draft(data).await,
    })
}

/// GET /api/v1/storage/preferences
pub async fn handle_load_preferences(
    State(state): State<AppState>,
) -> Json<Option<UserPreferences>> {
    Json(state.storage.load_preferences().await)
}

/// PUT /api/v1/storage/preferences
pub async fn handle_save_preferences(
    State(state): State<AppState>,
    Json(preferences): Json<UserPreferences>,
) -> Json<SaveResponse> {
    Json(SaveResponse {
        saved: state.storage.save_preferences(&preferences).await,
    })
}

/// GET /api/v1/storage/feedback
pub async fn handle_load_feedback(State(state): State<AppState>) -> Json<Option<FeedbackData>> {
    Json(state.storage.load_feedback().await)
}

/// PUT /api/v1/storage/feedback
pub async fn handle_save_feedback(
    State(state): State<AppState>,
    Json(feedback): Json<FeedbackData>,
) -> Json<SaveResponse> {
    Json(SaveResponse {
        saved: state.storage.save_feedback(&feedback).await,
    })
}

/// POST /api/v1/storage/feedback/ratings
///
/// Requires a known feature and a 1 to 5 star rating.
pub async fn handle_record_rating(
    State(state): State<AppState>,
    Json(request): Json<RatingRequest>,
) -> Result<Json<SaveResponse>, AppError> {
    if !FEATURES.contains(&request.feature.as_str()) || !(1..=5).contains(&request.rating) {
        return Err(AppError::Validation(
            "Please select a feature and provide a rating.".to_string(),
        ));
    }

    let rating = UserRating {
        feature: request.feature,
        rating: request.rating,
        feedback: request.feedback,
        timestamp: Utc::now(),
    };

    Ok(Json(SaveResponse {
        saved: state.storage.record_rating(rating).await,
    }))
}

/// POST /api/v1/storage/feedback/improvements
pub async fn handle_record_improvement(
    State(state): State<AppState>,
    Json(request): Json<ImprovementRequest>,
) -> Result<Json<SaveResponse>, AppError> {
    if request.section.trim().is_empty() {
        return Err(AppError::Validation("section cannot be empty".to_string()));
    }

    let improvement = Improvement {
        section: request.section,
        suggestion: request.suggestion,
        applied: request.applied,
        timestamp: Utc::now(),
    };

    Ok(Json(SaveResponse {
        saved: state.storage.record_improvement(improvement).await,
    }))
}

/// DELETE /api/v1/storage?key=DRAFT_DATA
///
/// Clears one record, or all of them without `key`.
pub async fn handle_clear(
    State(state): State<AppState>,
    Query(query): Query<ClearQuery>,
) -> axum::http::StatusCode {
    state.storage.clear(query.key).await;
    axum::http::StatusCode::NO_CONTENT
}

/// GET /api/v1/storage/size
///
/// Reports UTF-8 bytes of stored JSON.
pub async fn handle_storage_size(State(state): State<AppState>) -> Json<SizeResponse> {
    Json(SizeResponse {
        bytes: state.storage.storage_size().await,
    })
}
