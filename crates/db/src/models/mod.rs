pub mod survey_response;
