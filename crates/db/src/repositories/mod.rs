pub mod survey_response_repo;

pub use survey_response_repo::SurveyResponseRepo;
