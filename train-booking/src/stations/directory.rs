//! In-memory station directory.

use std::collections::HashMap;

use crate::domain::{GeoPoint, Station, StationId};
use crate::fare;

use super::client::StationDto;
use super::error::StationError;

/// Name of the anchor station that serves as the default origin.
/// Matched case-insensitively against fetched station names.
pub const CENTRAL_STATION_NAME: &str = "Central Station";

/// An immutable snapshot of the station set.
///
/// Built from one fetch of the directory endpoint; a refresh produces a
/// new directory rather than mutating this one. Construction fails if the
/// central anchor station is absent, since the booking flow then has no
/// valid default origin.
#[derive(Debug, Clone)]
pub struct StationDirectory {
    stations: Vec<Station>,
    by_id: HashMap<StationId, usize>,
    central: usize,
}

impl StationDirectory {
    /// Build a directory from fetched station records.
    pub fn from_dtos(dtos: Vec<StationDto>) -> Result<Self, StationError> {
        let stations = dtos
            .into_iter()
            .map(|dto| Station {
                id: StationId::new(dto.id),
                name: dto.name,
                code: dto.code,
                city: dto.location.city,
                region: dto.location.state,
                coords: GeoPoint::new(dto.location.coordinates.lat, dto.location.coordinates.lng),
            })
            .collect();

        Self::new(stations)
    }

    /// Build a directory from already-converted stations.
    pub fn new(stations: Vec<Station>) -> Result<Self, StationError> {
        let central = stations
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(CENTRAL_STATION_NAME))
            .ok_or(StationError::CentralStationMissing(CENTRAL_STATION_NAME))?;

        let by_id = stations
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();

        Ok(Self {
            stations,
            by_id,
            central,
        })
    }

    /// Look up a station by id.
    pub fn get(&self, id: &StationId) -> Option<&Station> {
        self.by_id.get(id).map(|&i| &self.stations[i])
    }

    /// The central anchor station, used as the default origin.
    pub fn central(&self) -> &Station {
        &self.stations[self.central]
    }

    /// First station that is not the central anchor, used as the initial
    /// destination suggestion. `None` when the directory only contains
    /// the anchor itself.
    pub fn default_destination(&self) -> Option<&Station> {
        self.stations.iter().find(|s| s.id != self.central().id)
    }

    /// Find a station by id, short code, or display name.
    pub fn find(&self, query: &str) -> Option<&Station> {
        self.stations.iter().find(|s| {
            s.id.as_str() == query
                || s.code.eq_ignore_ascii_case(query)
                || s.name.eq_ignore_ascii_case(query)
        })
    }

    /// Fare between two stations by id, at the given rate.
    ///
    /// Returns 0 when the endpoints are the same or when either id is not
    /// in this directory; callers that need to distinguish a free route
    /// from an unknown one must check the references with [`Self::get`]
    /// first.
    pub fn quote(&self, from: &StationId, to: &StationId, rate_per_km: f64) -> f64 {
        if from == to {
            return 0.0;
        }

        match (self.get(from), self.get(to)) {
            (Some(origin), Some(destination)) => fare::estimate(origin, destination, rate_per_km),
            _ => 0.0,
        }
    }

    /// All stations, in the order the backend returned them.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// Number of stations in the directory.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: &str, name: &str, lat: f64, lon: f64) -> Station {
        Station {
            id: StationId::new(id),
            name: name.to_string(),
            code: id.to_uppercase(),
            city: "Testville".to_string(),
            region: "TS".to_string(),
            coords: GeoPoint::new(lat, lon),
        }
    }

    #[test]
    fn missing_central_station_is_a_configuration_error() {
        let err = StationDirectory::new(vec![
            station("s1", "North Junction", 1.0, 1.0),
            station("s2", "South Halt", 2.0, 2.0),
        ])
        .unwrap_err();

        assert!(matches!(err, StationError::CentralStationMissing(_)));
    }

    #[test]
    fn central_station_match_is_case_insensitive() {
        let directory = StationDirectory::new(vec![
            station("s1", "North Junction", 1.0, 1.0),
            station("s2", "CENTRAL STATION", 2.0, 2.0),
        ])
        .unwrap();

        assert_eq!(directory.central().id, StationId::new("s2"));
    }

    #[test]
    fn default_destination_skips_the_anchor() {
        let directory = StationDirectory::new(vec![
            station("s1", "Central Station", 0.0, 0.0),
            station("s2", "North Junction", 1.0, 1.0),
        ])
        .unwrap();

        assert_eq!(
            directory.default_destination().unwrap().id,
            StationId::new("s2")
        );
    }

    #[test]
    fn default_destination_none_when_only_anchor() {
        let directory =
            StationDirectory::new(vec![station("s1", "Central Station", 0.0, 0.0)]).unwrap();

        assert!(directory.default_destination().is_none());
    }

    #[test]
    fn quote_is_zero_for_same_station() {
        let directory = StationDirectory::new(vec![
            station("s1", "Central Station", 0.0, 0.0),
            station("s2", "North Junction", 0.0, 1.0),
        ])
        .unwrap();

        let id = StationId::new("s1");
        assert_eq!(directory.quote(&id, &id, 10.0), 0.0);
    }

    #[test]
    fn quote_is_zero_for_unknown_station() {
        let directory = StationDirectory::new(vec![
            station("s1", "Central Station", 0.0, 0.0),
            station("s2", "North Junction", 0.0, 1.0),
        ])
        .unwrap();

        let known = StationId::new("s1");
        let unknown = StationId::new("nope");
        assert_eq!(directory.quote(&known, &unknown, 10.0), 0.0);
        assert_eq!(directory.quote(&unknown, &known, 10.0), 0.0);
    }

    #[test]
    fn quote_uses_the_haversine_fare() {
        let directory = StationDirectory::new(vec![
            station("s1", "Central Station", 0.0, 0.0),
            station("s2", "North Junction", 0.0, 1.0),
        ])
        .unwrap();

        let fare = directory.quote(&StationId::new("s1"), &StationId::new("s2"), 10.0);
        assert!((fare - 1111.95).abs() < 1e-9);
    }

    #[test]
    fn find_matches_id_code_and_name() {
        let directory = StationDirectory::new(vec![
            station("s1", "Central Station", 0.0, 0.0),
            station("s2", "North Junction", 1.0, 1.0),
        ])
        .unwrap();

        assert_eq!(directory.find("s2").unwrap().name, "North Junction");
        assert_eq!(directory.find("S2").unwrap().name, "North Junction");
        assert_eq!(directory.find("north junction").unwrap().name, "North Junction");
        assert!(directory.find("nowhere").is_none());
    }

    #[test]
    fn from_dtos_converts_wire_records() {
        use crate::stations::client::{CoordinatesDto, LocationDto, StationDto};

        let directory = StationDirectory::from_dtos(vec![StationDto {
            id: "s1".to_string(),
            name: "Central Station".to_string(),
            code: "CTL".to_string(),
            location: LocationDto {
                city: "Lahore".to_string(),
                state: "Punjab".to_string(),
                coordinates: CoordinatesDto {
                    lat: 31.58,
                    lng: 74.33,
                },
            },
        }])
        .unwrap();

        let s = directory.get(&StationId::new("s1")).unwrap();
        assert_eq!(s.code, "CTL");
        assert_eq!(s.city, "Lahore");
        assert_eq!(s.region, "Punjab");
        assert_eq!(s.coords, GeoPoint::new(31.58, 74.33));
    }
}
