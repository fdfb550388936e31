pub mod auth;
pub mod chat;
pub mod health;
pub mod listings;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};

use crate::narrative::handlers as narrative;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

/// Resume uploads are the largest bodies this service accepts.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth proxy
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/register", post(auth::handle_register))
        .route("/api/v1/auth/profile", post(auth::handle_fetch_profile))
        .route(
            "/api/v1/auth/profile/:email/:section",
            put(auth::handle_update_profile),
        )
        // Career narratives
        .route("/api/v1/career/parse", post(narrative::handle_parse_career))
        .route("/api/v1/career/recommend", post(narrative::handle_recommend))
        .route("/api/v1/career/default", get(narrative::handle_default_path))
        // Resume evaluation
        .route(
            "/api/v1/resume/evaluation/parse",
            post(narrative::handle_parse_evaluation),
        )
        .route("/api/v1/resume/evaluate", post(narrative::handle_evaluate))
        // Roadmaps
        .route("/api/v1/roadmaps", post(roadmap::handle_create))
        .route(
            "/api/v1/roadmaps/:id",
            get(roadmap::handle_get).delete(roadmap::handle_delete),
        )
        .route(
            "/api/v1/roadmaps/:id/sections/:section_id/expanded",
            patch(roadmap::handle_toggle_expanded),
        )
        .route(
            "/api/v1/roadmaps/:id/sections/:section_id/completed",
            patch(roadmap::handle_toggle_section),
        )
        .route(
            "/api/v1/roadmaps/:id/sections/:section_id/items/:item_id/completed",
            patch(roadmap::handle_toggle_item),
        )
        // Chat and listings
        .route("/api/v1/chat", post(chat::handle_chat))
        .route(
            "/api/v1/network/recommendations",
            get(listings::handle_network),
        )
        .route("/api/v1/news", get(listings::handle_news))
        .route("/api/v1/jobs", get(listings::handle_jobs))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
