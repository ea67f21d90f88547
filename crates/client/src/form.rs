//! The respondent form as an explicit state machine.
//!
//! ```text
//!            set_field / choose_accessory
//!               ┌──────┐
//!               ▼      │
//!   ──────▶  Editing ──┘ ──begin_submit──▶ Submitting
//!               ▲  ▲                          │   │
//!               │  └────── failure (notice) ──┘   │ success
//!               │                                 ▼
//!               └─────────── go_back ──────── Submitted
//! ```
//!
//! The draft survives a failed submission and is cleared only on success.

use std::fmt::Write as _;

use survey_core::accessory::Accessory;
use survey_core::survey::{
    SubmitAck, SubmitSurvey, FIELD_ACCESSORY_TYPE, FIELD_COLOR_PREFERENCE, FIELD_FULL_NAME,
};

use crate::api::{ClientError, SurveyBackend};

/// Blocking notification shown when a submission fails for any reason.
pub const SUBMIT_FAILED_NOTICE: &str = "Lỗi kết nối Server!";

/// Placeholder shown while no accessory is chosen.
const ACCESSORY_PLACEHOLDER: &str = "Chọn phụ kiện...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    FullName,
    AccessoryType,
    ColorPreference,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [
        DraftField::FullName,
        DraftField::AccessoryType,
        DraftField::ColorPreference,
    ];

    /// Field name in the request body.
    pub fn wire_name(self) -> &'static str {
        match self {
            DraftField::FullName => FIELD_FULL_NAME,
            DraftField::AccessoryType => FIELD_ACCESSORY_TYPE,
            DraftField::ColorPreference => FIELD_COLOR_PREFERENCE,
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            DraftField::FullName => "Họ và tên của bạn",
            DraftField::AccessoryType => "Phụ kiện yêu thích",
            DraftField::ColorPreference => "Màu sắc / Tone màu ưa thích",
        }
    }
}

/// The three values being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyDraft {
    pub full_name: String,
    pub accessory_type: String,
    pub color_preference: String,
}

impl SurveyDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FullName => &self.full_name,
            DraftField::AccessoryType => &self.accessory_type,
            DraftField::ColorPreference => &self.color_preference,
        }
    }

    fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::FullName => self.full_name = value,
            DraftField::AccessoryType => self.accessory_type = value,
            DraftField::ColorPreference => self.color_preference = value,
        }
    }

    /// Fields the required-input constraint would block on.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    fn to_submission(&self) -> SubmitSurvey {
        SubmitSurvey {
            full_name: Some(self.full_name.clone()),
            accessory_type: Some(self.accessory_type.clone()),
            color_preference: Some(self.color_preference.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing(SurveyDraft),
    /// A request is in flight. Holds the draft so it can be restored on failure.
    Submitting(SurveyDraft),
    Submitted,
}

/// Rejected form actions. None of them change the state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("a submission is already in flight")]
    Busy,

    #[error("the form is not accepting input in its current state")]
    NotEditing,

    #[error("required fields are empty: {}", .0.iter().map(|f| f.wire_name()).collect::<Vec<_>>().join(", "))]
    Incomplete(Vec<DraftField>),

    #[error("no submission is in flight")]
    NotSubmitting,
}

/// Result of a finished submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(SubmitAck),
    /// The form is back in `Editing` with its draft, and a notice is pending.
    Failed,
}

#[derive(Debug, Default)]
pub struct FormClient {
    state: FormState,
    notice: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Editing(SurveyDraft::default())
    }
}

impl FormClient {
    /// A form in `Editing` with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The draft being edited or sent, if any.
    pub fn draft(&self) -> Option<&SurveyDraft> {
        match &self.state {
            FormState::Editing(draft) | FormState::Submitting(draft) => Some(draft),
            FormState::Submitted => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, FormState::Submitting(_))
    }

    /// Update one field, leaving the others untouched.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) -> Result<(), FormError> {
        match &mut self.state {
            FormState::Editing(draft) => {
                draft.set(field, value.into());
                Ok(())
            }
            FormState::Submitting(_) => Err(FormError::Busy),
            FormState::Submitted => Err(FormError::NotEditing),
        }
    }

    pub fn choose_accessory(&mut self, accessory: Accessory) -> Result<(), FormError> {
        self.set_field(DraftField::AccessoryType, accessory.label())
    }

    /// Move to `Submitting` and hand back the request to send.
    ///
    /// Requires every field to be non-empty. While a submission is in
    /// flight further calls fail with [`FormError::Busy`].
    pub fn begin_submit(&mut self) -> Result<SubmitSurvey, FormError> {
        let draft = match &self.state {
            FormState::Editing(draft) => draft,
            FormState::Submitting(_) => return Err(FormError::Busy),
            FormState::Submitted => return Err(FormError::NotEditing),
        };

        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::Incomplete(missing));
        }

        let submission = draft.to_submission();
        self.state = FormState::Submitting(draft.clone());
        self.notice = None;
        Ok(submission)
    }

    /// Apply the backend's answer to an in-flight submission.
    ///
    /// Success clears the draft and shows the confirmation. Any failure
    /// restores the draft unchanged and raises [`SUBMIT_FAILED_NOTICE`].
    pub fn complete_submit(
        &mut self,
        result: Result<SubmitAck, ClientError>,
    ) -> Result<SubmitOutcome, FormError> {
        let FormState::Submitting(draft) = &self.state else {
            return Err(FormError::NotSubmitting);
        };

        match result {
            Ok(ack) => {
                tracing::info!(id = ack.data.id, "Survey submitted");
                self.state = FormState::Submitted;
                Ok(SubmitOutcome::Submitted(ack))
            }
            Err(err) => {
                tracing::error!(error = %err, "Survey submission failed");
                self.state = FormState::Editing(draft.clone());
                self.notice = Some(SUBMIT_FAILED_NOTICE.to_string());
                Ok(SubmitOutcome::Failed)
            }
        }
    }

    /// Send the current draft through `backend` and apply the result.
    pub async fn submit<B>(&mut self, backend: &B) -> Result<SubmitOutcome, FormError>
    where
        B: SurveyBackend + ?Sized,
    {
        let submission = self.begin_submit()?;
        let result = backend.submit(&submission).await;
        self.complete_submit(result)
    }

    /// Leave the confirmation view for a fresh, empty form.
    pub fn go_back(&mut self) -> Result<(), FormError> {
        match self.state {
            FormState::Submitted => {
                self.state = FormState::default();
                Ok(())
            }
            _ => Err(FormError::NotEditing),
        }
    }

    /// Take the pending notification, if any. The caller must show it before
    /// continuing.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Text rendition of the current view.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let (draft, busy) = match &self.state {
            FormState::Submitted => {
                out.push_str("Gửi thành công! 🎉\n");
                out.push_str("Cảm ơn bạn đã tham gia khảo sát.\n");
                out.push_str("Thông tin của bạn đã được lưu lại.\n");
                return out;
            }
            FormState::Editing(draft) => (draft, false),
            FormState::Submitting(draft) => (draft, true),
        };

        out.push_str("✨ Khảo sát Phụ Kiện ✨\n");
        for field in DraftField::ALL {
            let value = match (field, draft.get(field)) {
                (DraftField::AccessoryType, "") => ACCESSORY_PLACEHOLDER,
                (_, value) => value,
            };
            let _ = writeln!(out, "{}: {}", field.label(), value);
        }
        out.push_str(if busy {
            "[Đang gửi...]\n"
        } else {
            "[Gửi thông tin 🚀]\n"
        });
        out
    }
}
