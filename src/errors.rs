use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Source extraction failed: {0}")]
    SourceExtraction(String),

    #[error("Guide not found: {0}")]
    GuideNotFound(String),

    #[error("Guide parse error: {0}")]
    GuideParse(String),

    #[error("Unknown question type: {0}")]
    UnknownQuestionType(String),

    #[error("Generation service error: {0}")]
    GenerationService(String),

    #[error("Response format error: {0}")]
    ResponseFormat(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::SourceExtraction(_) => "SOURCE_EXTRACTION_ERROR",
            AppError::GuideNotFound(_) => "GUIDE_NOT_FOUND",
            AppError::GuideParse(_) => "GUIDE_PARSE_ERROR",
            AppError::UnknownQuestionType(_) => "UNKNOWN_QUESTION_TYPE",
            AppError::GenerationService(_) => "GENERATION_SERVICE_ERROR",
            AppError::ResponseFormat(_) => "RESPONSE_FORMAT_ERROR",
            AppError::MissingField(_) => "MISSING_FIELD",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::SourceExtraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::GuideNotFound(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::GuideParse(_)
            | AppError::UnknownQuestionType(_)
            | AppError::GenerationService(_)
            | AppError::ResponseFormat(_)
            | AppError::MissingField(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::UnknownQuestionType(name) = self {
            log::error!("Question type '{}' has no description entry", name);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ResponseFormat(format!("Invalid JSON: {}", err))
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::GenerationService(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::InternalError(format!("CSV export error: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
