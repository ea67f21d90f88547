use std::sync::Arc;

use survey_db::ResponseStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// The persistence collaborator. Lives for the whole process.
    pub store: Arc<dyn ResponseStore>,
}
