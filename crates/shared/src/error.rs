//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body could not be read or decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Input failed report validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Uploaded file is not in a supported format.
    #[error("Unsupported media: {0}")]
    UnsupportedMedia(String),

    /// Uploaded file exceeds the configured limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) | Self::Validation(_) => 400,
            Self::PayloadTooLarge(_) => 413,
            Self::UnsupportedMedia(_) => 415,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::UnsupportedMedia(_) => "UNSUPPORTED_MEDIA",
            Self::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::BadRequest(String::new()).status_code(), 400);
        assert_eq!(AppError::Validation(String::new()).status_code(), 400);
        assert_eq!(AppError::UnsupportedMedia(String::new()).status_code(), 415);
        assert_eq!(AppError::PayloadTooLarge(String::new()).status_code(), 413);
        assert_eq!(AppError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::BadRequest(String::new()).error_code(),
            "BAD_REQUEST"
        );
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::UnsupportedMedia(String::new()).error_code(),
            "UNSUPPORTED_MEDIA"
        );
        assert_eq!(
            AppError::PayloadTooLarge(String::new()).error_code(),
            "PAYLOAD_TOO_LARGE"
        );
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::BadRequest("msg".into()).to_string(),
            "Bad request: msg"
        );
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(
            AppError::UnsupportedMedia("msg".into()).to_string(),
            "Unsupported media: msg"
        );
        assert_eq!(
            AppError::PayloadTooLarge("msg".into()).to_string(),
            "Payload too large: msg"
        );
        assert_eq!(
            AppError::Internal("msg".into()).to_string(),
            "Internal error: msg"
        );
    }
}
