//! Route definitions for survey submission and listing, mounted at `/api`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::survey;
use crate::state::AppState;

/// ```text
/// POST /submit  -> submit_survey
/// GET  /stats   -> list_responses
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit", post(survey::submit_survey))
        .route("/stats", get(survey::list_responses))
}
