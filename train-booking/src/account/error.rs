//! Account API error types.

/// Errors from the login and feedback endpoints.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// A required login field is empty; no request was sent
    #[error("please fill in all fields")]
    MissingFields,

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the request
    #[error("account API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
