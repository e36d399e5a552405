use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// User-visible variants display their bare message because the response
/// body exposes `Display` verbatim as `statusMessage`.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Resource not found (missing product, empty collection)
    #[error("{0}")]
    NotFound(String),

    /// Malformed request input
    #[error("{0}")]
    Validation(String),

    /// Duplicate resource
    #[error("{0}")]
    Conflict(String),

    /// A backing data file is missing on disk
    #[error("Data file {0} is missing")]
    MissingDataFile(String),

    /// A backing data file holds invalid JSON
    #[error("Data file {file} is corrupt: {detail}")]
    CorruptDataFile { file: String, detail: String },

    /// Underlying file I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        HttpResponse::build(status_code).json(serde_json::json!({
            "statusMessage": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::MissingDataFile(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::CorruptDataFile { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }
}
