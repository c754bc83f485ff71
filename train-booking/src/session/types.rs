//! The local session blob.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Booking, Customer};

/// The authenticated user's locally persisted state.
///
/// Created at login, destroyed on logout or expiry. The booking list is an
/// append-only mirror of server-confirmed bookings, kept for display; the
/// backend remains authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    /// Status message returned by the login endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Bearer credential for authenticated calls.
    pub access_token: String,

    /// The authenticated customer.
    pub customer: Customer,

    /// Locally mirrored bookings, oldest first.
    #[serde(default)]
    pub bookings: Vec<Booking>,

    /// When the session was created (login time).
    pub timestamp: DateTime<Utc>,
}

impl UserSession {
    /// Create a fresh session at login time.
    pub fn new(
        access_token: impl Into<String>,
        customer: Customer,
        message: Option<String>,
        logged_in_at: DateTime<Utc>,
    ) -> Self {
        Self {
            message,
            access_token: access_token.into(),
            customer,
            bookings: Vec::new(),
            timestamp: logged_in_at,
        }
    }

    /// Whether this session carries everything a booking submission needs:
    /// a non-empty bearer token and a customer identifier.
    pub fn has_credentials(&self) -> bool {
        !self.access_token.is_empty() && !self.customer.id.is_empty()
    }

    /// Whether the fixed validity window has elapsed since login.
    pub fn is_expired(&self, now: DateTime<Utc>, window: Duration) -> bool {
        let window = chrono::Duration::from_std(window).unwrap_or(chrono::Duration::MAX);
        now.signed_duration_since(self.timestamp) >= window
    }

    /// Append one server-confirmed booking to the local mirror.
    pub fn append_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }
}
