//! Survey submission and response types.
//!
//! Requests arrive in camelCase (`fullName`, `accessoryType`,
//! `colorPreference`). Everything stored or listed uses the snake_case
//! column names of the `user_preferences` table.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Wire name of the respondent's name field.
pub const FIELD_FULL_NAME: &str = "fullName";

/// Wire name of the accessory field.
pub const FIELD_ACCESSORY_TYPE: &str = "accessoryType";

/// Wire name of the color field.
pub const FIELD_COLOR_PREFERENCE: &str = "colorPreference";

// ---------------------------------------------------------------------------
// Entity structs
// ---------------------------------------------------------------------------

/// A persisted survey answer. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub id: DbId,
    pub full_name: String,
    pub accessory_type: String,
    pub color_preference: String,
}

/// A validated answer ready to be inserted. Every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSurveyResponse {
    pub full_name: String,
    pub accessory_type: String,
    pub color_preference: String,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request body of `POST /api/submit`.
///
/// Fields are optional at the type level so that an absent or `null` field
/// surfaces as a [`CoreError::MissingFields`] instead of a decode failure.
/// A value that is not a string (`false`, `0`, an object) decodes as absent
/// too. A body that does not decode at all is the [`Default`] value, which
/// lacks every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSurvey {
    #[serde(default, deserialize_with = "text_or_absent")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "text_or_absent")]
    pub accessory_type: Option<String>,
    #[serde(default, deserialize_with = "text_or_absent")]
    pub color_preference: Option<String>,
}

fn text_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FieldValue {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<FieldValue>::deserialize(deserializer)? {
        Some(FieldValue::Text(text)) => Some(text),
        Some(FieldValue::Other(IgnoredAny)) | None => None,
    })
}

impl SubmitSurvey {
    /// Check that all three fields are present and non-empty, producing the
    /// canonical insert record.
    ///
    /// Whitespace-only values count as present. No format or membership
    /// checks are made, so any non-empty `accessoryType` is accepted.
    pub fn validate(self) -> Result<NewSurveyResponse, CoreError> {
        let mut missing = Vec::new();

        let full_name = take_present(self.full_name, FIELD_FULL_NAME, &mut missing);
        let accessory_type = take_present(self.accessory_type, FIELD_ACCESSORY_TYPE, &mut missing);
        let color_preference =
            take_present(self.color_preference, FIELD_COLOR_PREFERENCE, &mut missing);

        match (full_name, accessory_type, color_preference) {
            (Some(full_name), Some(accessory_type), Some(color_preference)) => {
                Ok(NewSurveyResponse {
                    full_name,
                    accessory_type,
                    color_preference,
                })
            }
            _ => Err(CoreError::MissingFields(missing)),
        }
    }
}

fn take_present(
    value: Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}

/// Success body of `POST /api/submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAck {
    pub message: String,
    pub data: SurveyResponse,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
