use std::fmt;

/// Coarse classification of session backend failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidInput,
    Unavailable,
    Internal,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorCode::InvalidInput => "invalid_input",
            ErrorCode::Unavailable => "unavailable",
            ErrorCode::Internal => "internal",
        };
        f.write_str(label)
    }
}

/// Error raised when the storage layer faults. Soft outcomes (missing session,
/// zero rows affected) are never reported through this type.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct SessionError {
    pub code: ErrorCode,
    pub message: String,
}

impl SessionError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

pub type SessionResult<T> = Result<T, SessionError>;

pub(crate) fn invalid_argument(message: impl Into<String>) -> SessionError {
    SessionError::new(ErrorCode::InvalidInput, message)
}

#[cfg(feature = "redis")]
pub(crate) fn serde_error(err: serde_json::Error) -> SessionError {
    SessionError::new(ErrorCode::Internal, err.to_string())
}

#[cfg(feature = "redis")]
pub(crate) fn redis_error(err: redis::RedisError) -> SessionError {
    SessionError::new(ErrorCode::Unavailable, err.to_string())
}
