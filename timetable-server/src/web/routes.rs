//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use tracing::error;

use super::dto::*;
use super::state::AppState;
use super::templates::TimetableTemplate;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(timetable_page))
        .route("/health", get(health))
        .route("/api/timetable", get(timetable_json))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The timetable as an HTML page.
async fn timetable_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut page = TimetableTemplate::default();
    state.timetable.render(&mut page);

    let html = page.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html))
}

/// The timetable as JSON.
async fn timetable_json(State(state): State<AppState>) -> Json<TimetableResponse> {
    Json(TimetableResponse {
        journeys: state.timetable.views(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
