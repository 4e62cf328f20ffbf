pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::health_handler))
        .route("/upload-resume", post(handlers::handle_upload_resume))
        .route("/upload-resume/v2", post(handlers::handle_upload_resume_v2))
        .route("/match-resume-jd", post(handlers::handle_match_resume_jd))
        .route("/rewrite-resume", post(handlers::handle_rewrite_resume))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
