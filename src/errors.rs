use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::StorageError(_) => "STORAGE_ERROR",
            AppError::SerializationError(_) => "SERIALIZATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Validation failures are the caller's to fix and re-prompt; everything
    /// else is an environment problem.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::ValidationError(_) | AppError::NotFound(_))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::NotFound("test".into()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::StorageError("test".into()).error_code(),
            "STORAGE_ERROR"
        );
        assert_eq!(
            AppError::ValidationError("test".into()).error_code(),
            "VALIDATION_ERROR"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::NotFound("question q9".into());
        assert_eq!(err.to_string(), "Not found: question q9");
    }

    #[test]
    fn test_io_error_maps_to_storage_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::StorageError(_)));
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_json_error_maps_to_serialization_error() {
        let err: AppError = serde_json::from_str::<Vec<u8>>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::SerializationError(_)));
    }
}
