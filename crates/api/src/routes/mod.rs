pub mod health;
pub mod survey;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// POST /submit     store one survey response
/// GET  /stats      list every response, newest first
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(survey::router())
}
