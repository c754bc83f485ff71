//! Customer identity as returned by the login endpoint.

use serde::{Deserialize, Serialize};

/// The authenticated customer.
///
/// Mirrors the `customer` object in the login response and in the
/// persisted session blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Backend-assigned customer identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
}
