//! HTTP client for the survey API.
//!
//! Wraps `POST /api/submit` and `GET /api/stats` using [`reqwest`].

use async_trait::async_trait;
use survey_core::survey::{SubmitAck, SubmitSurvey, SurveyResponse};

/// Errors from the survey API layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Survey API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// The two operations the clients need from the backend.
#[async_trait]
pub trait SurveyBackend: Send + Sync {
    /// Store one submission.
    async fn submit(&self, survey: &SubmitSurvey) -> Result<SubmitAck, ClientError>;

    /// Every stored response, newest first.
    async fn fetch_responses(&self) -> Result<Vec<SurveyResponse>, ClientError>;
}

/// HTTP client for one survey API deployment.
pub struct SurveyApi {
    client: reqwest::Client,
    api_url: String,
}

impl SurveyApi {
    /// Create a client for the API at `api_url`, e.g. `http://localhost:5000`.
    /// A trailing slash is ignored.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Ensure the response has a success status code, otherwise capture the
    /// status and body as [`ClientError::Api`].
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl SurveyBackend for SurveyApi {
    async fn submit(&self, survey: &SubmitSurvey) -> Result<SubmitAck, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/submit", self.api_url))
            .json(survey)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn fetch_responses(&self) -> Result<Vec<SurveyResponse>, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/stats", self.api_url))
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }
}
