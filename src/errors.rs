use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Failure modes of the generation core. Tagged variants instead of one
/// flattened string kind: a provider fault is retryable in principle, a
/// schema violation never is, and callers should not have to inspect message
/// text to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("provider request failed: {0}")]
    Provider(String),

    #[error("completion was not valid JSON: {0}")]
    Decode(String),

    #[error("completion failed schema validation: {0}")]
    Schema(#[from] SchemaViolation),
}

/// A structurally parseable completion that does not match the required quiz
/// shape. `index` is the zero-based position of the first offending question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("'questions' must be an array")]
    NotAnArray,

    #[error("expected {expected} questions, got {actual}")]
    QuestionCount { expected: usize, actual: usize },

    #[error("question {index} is not an object")]
    NotAnObject { index: usize },

    #[error("question {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("question {index} 'options' must be an array")]
    OptionsNotAnArray { index: usize },

    #[error("question {index} must have exactly {expected} options, got {actual}")]
    OptionCount {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("question {index} has an out-of-range or non-integer 'correct' index")]
    CorrectIndex { index: usize },
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::AlreadyExists(_) => "ALREADY_EXISTS",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Generation(_) => "GENERATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: &'static str,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            // Upstream provider faults are a gateway problem; a completion we
            // received but could not use is on us.
            AppError::Generation(GenerationError::Provider(_)) => StatusCode::BAD_GATEWAY,
            AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            error_code: self.error_code(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type GenerationResult<T> = Result<T, GenerationError>;
