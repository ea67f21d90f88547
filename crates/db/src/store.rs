//! The persistence seam used by the HTTP handlers.

use async_trait::async_trait;
use survey_core::survey::{NewSurveyResponse, SurveyResponse};

use crate::repositories::SurveyResponseRepo;
use crate::DbPool;

/// Errors reported by a [`ResponseStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Append-only storage for survey responses.
///
/// Implementations own `id` assignment: ids are unique and increase with
/// insertion order.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Append one response and return it as stored, `id` included.
    async fn insert(&self, input: &NewSurveyResponse) -> Result<SurveyResponse, StoreError>;

    /// Every stored response ordered by `id` descending.
    async fn list_newest_first(&self) -> Result<Vec<SurveyResponse>, StoreError>;

    /// Verify the store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// [`ResponseStore`] backed by the `user_preferences` Postgres table.
#[derive(Clone)]
pub struct PgResponseStore {
    pool: DbPool,
}

impl PgResponseStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResponseStore for PgResponseStore {
    async fn insert(&self, input: &NewSurveyResponse) -> Result<SurveyResponse, StoreError> {
        let row = SurveyResponseRepo::create(&self.pool, input).await?;
        Ok(row.into())
    }

    async fn list_newest_first(&self) -> Result<Vec<SurveyResponse>, StoreError> {
        let rows = SurveyResponseRepo::list_newest_first(&self.pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
