//! Survey clients: the respondent form and the admin dashboard.
//!
//! Both are plain state machines driven through a [`SurveyBackend`], so they
//! run the same against the HTTP API ([`SurveyApi`]) or a test double.

pub mod api;
pub mod dashboard;
pub mod form;
pub mod stats;

pub use api::{ClientError, SurveyApi, SurveyBackend};
