//! Repository for the `user_preferences` table.

use sqlx::PgPool;
use survey_core::survey::NewSurveyResponse;

use crate::models::survey_response::SurveyResponseRow;

/// Column list for `user_preferences` queries.
const COLUMNS: &str = "id, full_name, accessory_type, color_preference";

/// Insert and list operations for survey responses. There is no update or
/// delete: rows are immutable once written.
pub struct SurveyResponseRepo;

impl SurveyResponseRepo {
    /// Insert one response and return it with its assigned `id`.
    pub async fn create(
        pool: &PgPool,
        input: &NewSurveyResponse,
    ) -> Result<SurveyResponseRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_preferences (full_name, accessory_type, color_preference) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SurveyResponseRow>(&query)
            .bind(&input.full_name)
            .bind(&input.accessory_type)
            .bind(&input.color_preference)
            .fetch_one(pool)
            .await
    }

    /// All responses, most recently created first.
    pub async fn list_newest_first(pool: &PgPool) -> Result<Vec<SurveyResponseRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_preferences ORDER BY id DESC");
        sqlx::query_as::<_, SurveyResponseRow>(&query)
            .fetch_all(pool)
            .await
    }
}
