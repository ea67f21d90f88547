//! Liveness endpoint for load balancers and the local CLI.
//!
//! `GET /health` always answers 200. A store that fails its check turns the
//! body `degraded` rather than failing the request, so survey traffic keeps
//! flowing to a server whose database is briefly unreachable.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub status: ServiceStatus,
    pub version: &'static str,
    /// `false` when the survey store did not answer its health query.
    pub db_healthy: bool,
}

impl ServiceHealth {
    fn from_store_check(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy {
                ServiceStatus::Ok
            } else {
                ServiceStatus::Degraded
            },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn service_health(State(state): State<AppState>) -> Json<ServiceHealth> {
    let db_healthy = match state.store.health_check().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Survey store failed health check");
            false
        }
    };

    Json(ServiceHealth::from_store_check(db_healthy))
}

/// `/health`, mounted beside `/api` rather than under it.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(service_health))
}
