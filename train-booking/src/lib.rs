//! Train booking client.
//!
//! A client for a train-booking REST backend: log in, list stations,
//! estimate a fare from the great-circle distance between two stations,
//! create a booking, and display the bookings mirrored in the local
//! session. The binary in this crate drives the same flow from the
//! command line.

pub mod account;
pub mod booking;
pub mod cache;
pub mod domain;
pub mod fare;
pub mod session;
pub mod stations;
