//! Handlers for survey submission and listing.
//!
//! Neither endpoint requires authentication.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use survey_core::survey::{SubmitAck, SubmitSurvey};

use crate::error::AppResult;
use crate::state::AppState;

/// Confirmation message returned with every stored submission.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Saved successfully";

/// POST /api/submit
///
/// Validate the three survey fields and store exactly one new response.
/// Invalid input never reaches the store. Retried submissions are stored
/// again; there is no deduplication.
///
/// A body that is not a JSON object carries none of the fields and is
/// rejected with the same missing-fields error as an empty object.
pub async fn submit_survey(
    State(state): State<AppState>,
    payload: Result<Json<SubmitSurvey>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Undecodable submission body");
            SubmitSurvey::default()
        }
    };

    let record = input.validate()?;
    let stored = state.store.insert(&record).await?;

    tracing::info!(id = stored.id, accessory_type = %stored.accessory_type, "Survey response stored");

    Ok(Json(SubmitAck {
        message: SUBMIT_SUCCESS_MESSAGE.to_string(),
        data: stored,
    }))
}

/// GET /api/stats
///
/// Every stored response, newest first, with no filtering or paging.
pub async fn list_responses(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let responses = state.store.list_newest_first().await?;

    tracing::debug!(count = responses.len(), "Listed survey responses");

    Ok(Json(responses))
}
