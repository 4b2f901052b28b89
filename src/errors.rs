use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Share encoding failed: {0}")]
    EncodeFailure(String),

    #[error("Share decoding failed: {0}")]
    DecodeFailure(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::EncodeFailure(_) => "ENCODE_FAILURE",
            AppError::DecodeFailure(_) => "DECODE_FAILURE",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::AlreadyExists(_) => "ALREADY_EXISTS",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
