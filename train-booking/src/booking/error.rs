//! Booking error types.

use crate::session::SessionError;

/// A precondition violated before any network call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Origin and destination are the same station
    #[error("same station")]
    SameStation,

    /// The quoted total cost is not a finite, positive amount
    #[error("invalid total cost")]
    InvalidTotalCost,

    /// No active session with a customer id and bearer token
    #[error("not logged in")]
    NotLoggedIn,
}

/// Errors from the booking workflow.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// A precondition failed; no request was sent
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the request; `message` is the server-provided
    /// reason, or a generic one when the body carried none
    #[error("booking failed ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response body
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A success response arrived without a booking identifier; the local
    /// mirror only ever holds server-confirmed bookings, so this is
    /// treated as a parse failure and nothing is appended
    #[error("booking response did not include a booking id")]
    MissingBookingId,

    /// Reading or writing the local session failed
    #[error(transparent)]
    Session(#[from] SessionError),
}
