//! API routes for the quiz server

pub mod quiz;
pub mod sources;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Source acquisition - with larger body limit for file uploads
        .route(
            "/sources/upload",
            post(sources::upload_source).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        .route("/sources/wikipedia", post(sources::wikipedia_source))
        // Source registry
        .route("/sources", get(sources::list_sources))
        .route("/sources/:label", get(sources::get_source))
        // Quiz generation and grading
        .route("/quiz", post(quiz::generate))
        .route("/quiz/grade", post(quiz::grade_submission))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "quizforge",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Multiple-choice quizzes from uploaded documents or Wikipedia articles",
        "endpoints": {
            "POST /api/sources/upload": "Upload a .pdf, .txt or .docx file and register it as a quiz source",
            "POST /api/sources/wikipedia": "Register the top-matching Wikipedia article for a topic",
            "GET /api/sources": "List registered sources",
            "GET /api/sources/:label": "Get source details",
            "POST /api/quiz": "Generate (or re-serve a memoized) quiz for a source",
            "POST /api/quiz/grade": "Grade answer selections against a source's quiz"
        }
    }))
}
