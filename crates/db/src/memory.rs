//! In-process [`ResponseStore`] for local development and tests.

use async_trait::async_trait;
use survey_core::survey::{NewSurveyResponse, SurveyResponse};
use survey_core::types::DbId;
use tokio::sync::RwLock;

use crate::store::{ResponseStore, StoreError};

/// Holds responses in insertion order. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryResponseStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: DbId,
    rows: Vec<SurveyResponse>,
}

impl MemoryResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored responses.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ResponseStore for MemoryResponseStore {
    async fn insert(&self, input: &NewSurveyResponse) -> Result<SurveyResponse, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let row = SurveyResponse {
            id: inner.last_id,
            full_name: input.full_name.clone(),
            accessory_type: input.accessory_type.clone(),
            color_preference: input.color_preference.clone(),
        };
        inner.rows.push(row.clone());
        Ok(row)
    }

    async fn list_newest_first(&self) -> Result<Vec<SurveyResponse>, StoreError> {
        let inner = self.inner.read().await;
        let mut rows = inner.rows.clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
