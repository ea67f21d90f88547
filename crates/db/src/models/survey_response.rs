//! Row model for the `user_preferences` table.

use sqlx::FromRow;
use survey_core::survey::SurveyResponse;
use survey_core::types::DbId;

/// A row from the `user_preferences` table.
#[derive(Debug, Clone, FromRow)]
pub struct SurveyResponseRow {
    pub id: DbId,
    pub full_name: String,
    pub accessory_type: String,
    pub color_preference: String,
}

impl From<SurveyResponseRow> for SurveyResponse {
    fn from(row: SurveyResponseRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            accessory_type: row.accessory_type,
            color_preference: row.color_preference,
        }
    }
}
