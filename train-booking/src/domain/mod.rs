//! Domain types for the booking client.
//!
//! These are the validated, backend-agnostic shapes the rest of the crate
//! works with. Wire-format DTOs live next to the client that receives them
//! and are converted into these types at the boundary.

mod booking;
mod customer;
mod station;

pub use booking::{Booking, InvalidPaymentMethod, PaymentMethod};
pub use customer::Customer;
pub use station::{GeoPoint, Station, StationId};
