//! Error types for yr-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.

use thiserror::Error;

/// Result type alias for yr-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for yr-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Connection-level failure before a status code was obtained
    #[error("Transport error: {0}")]
    Transport(String),

    /// Status matched expectations but the body was not the JSON the
    /// service is contracted to return
    #[error("Malformed response (status {status}): {detail}")]
    MalformedResponse { status: u16, detail: String },

    /// The service answered with a status other than the operation's
    /// expected success code
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A failed operation as reported by the service.
///
/// Constructed only when the observed status code differs from the
/// operation's expected success code. `payload` carries the decoded error
/// body unchanged so callers can branch on whatever the service sent.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status code actually returned
    pub status: u16,

    /// Human-readable summary generated client-side
    pub message: String,

    /// Raw decoded error body, shape unspecified
    pub payload: Option<serde_json::Value>,
}

impl Error {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => 2,                // UsageError
            Error::Transport(_) => 3,             // NetworkError
            Error::MalformedResponse { .. } => 3, // NetworkError
            Error::Api(e) => match e.status {
                401 | 403 => 4,    // AuthError
                404 => 5,          // NotFound
                409 => 6,          // Conflict
                400 | 422 => 2,    // UsageError
                500..=599 => 3,    // NetworkError
                _ => 1,            // GeneralError
            },
            _ => 1,                // GeneralError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16) -> Error {
        Error::Api(ApiError {
            status,
            message: format!("Unexpected status {status} Test"),
            payload: None,
        })
    }

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(Error::Config("test".into()).exit_code(), 2);
        assert_eq!(Error::Transport("test".into()).exit_code(), 3);
        assert_eq!(
            Error::MalformedResponse {
                status: 200,
                detail: "test".into()
            }
            .exit_code(),
            3
        );
        assert_eq!(api(401).exit_code(), 4);
        assert_eq!(api(403).exit_code(), 4);
        assert_eq!(api(404).exit_code(), 5);
        assert_eq!(api(409).exit_code(), 6);
        assert_eq!(api(400).exit_code(), 2);
        assert_eq!(api(422).exit_code(), 2);
        assert_eq!(api(500).exit_code(), 3);
        assert_eq!(api(502).exit_code(), 3);
        assert_eq!(api(504).exit_code(), 3);
        assert_eq!(api(418).exit_code(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = Error::Transport("connection reset".into());
        assert_eq!(err.to_string(), "Transport error: connection reset");

        let err = Error::MalformedResponse {
            status: 200,
            detail: "expected value at line 1".into(),
        };
        assert!(err.to_string().contains("status 200"));

        let err = api(404);
        assert_eq!(err.to_string(), "Unexpected status 404 Test");
    }
}
