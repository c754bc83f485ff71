//! Station types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque backend identifier for a station.
///
/// The backend assigns these; the client never inspects their contents,
/// it only compares and forwards them.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Wrap a backend-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A geographic coordinate in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A fixed point of service on the network.
///
/// Stations are immutable once fetched; a directory refresh replaces the
/// whole set rather than merging into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Backend-assigned unique identifier.
    pub id: StationId,
    /// Display name, e.g. "Central Station".
    pub name: String,
    /// Short code, e.g. "CTL".
    pub code: String,
    /// City the station is in.
    pub city: String,
    /// Region or state the station is in.
    pub region: String,
    /// Geographic position.
    pub coords: GeoPoint,
}
