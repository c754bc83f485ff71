//! Station directory provider.
//!
//! Fetches the station set from the backend and exposes it as an
//! immutable directory with a designated default origin (the central
//! anchor station) and id-based fare quoting.

mod client;
mod directory;
mod error;

pub use client::{
    CoordinatesDto, LocationDto, StationClient, StationClientConfig, StationDto, StationsResponse,
};
pub use directory::{CENTRAL_STATION_NAME, StationDirectory};
pub use error::StationError;
