//! Station directory error types.

/// Errors that can occur while fetching or assembling the station directory.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("station API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The canonical default origin is missing from the fetched set, so
    /// there is no valid default origin to offer.
    #[error("no station named \"{0}\" in the directory")]
    CentralStationMissing(&'static str),
}
