pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::assist::handlers as assist;
use crate::proxy::handlers as proxy;
use crate::state::AppState;
use crate::storage::handlers as storage;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generative proxy (remote endpoint contract)
        .route("/api/v1/ai", post(proxy::handle_generate))
        // AI assistance entry points
        .route(
            "/api/v1/assist/content-suggestions",
            post(assist::handle_content_suggestions),
        )
        .route("/api/v1/assist/ats", post(assist::handle_ats_analysis))
        .route("/api/v1/assist/job-match", post(assist::handle_job_match))
        .route(
            "/api/v1/assist/smart-suggestions",
            post(assist::handle_smart_suggestions),
        )
        // Storage
        .route("/api/v1/storage", delete(storage::handle_clear))
        .route("/api/v1/storage/size", get(storage::handle_storage_size))
        .route(
            "/api/v1/storage/resume",
            get(storage::handle_load_resume).put(storage::handle_save_resume),
        )
        .route(
            "/api/v1/storage/draft",
            get(storage::handle_load_draft).put(storage::handle_save_draft),
        )
        .route(
            "/api/v1/storage/preferences",
            get(storage::handle_load_preferences).put(storage::handle_save_preferences),
        )
        .route(
            "/api/v1/storage/feedback",
            get(storage::handle_load_feedback).put(storage::handle_save_feedback),
        )
        .route(
            "/api/v1/storage/feedback/ratings",
            post(storage::handle_record_rating),
        )
        .route(
            "/api/v1/storage/feedback/improvements",
            post(storage::handle_record_improvement),
        )
        .with_state(state)
}
