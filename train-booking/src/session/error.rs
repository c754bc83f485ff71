//! Session store error types.

/// Errors from the local session store.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading or writing the backing file failed
    #[error("session store I/O error: {message}")]
    Io { message: String },

    /// The stored blob could not be (de)serialized
    #[error("session store JSON error: {message}")]
    Json { message: String },

    /// An operation that requires a session found none
    #[error("no active session")]
    NoSession,
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::Json {
            message: err.to_string(),
        }
    }
}
