//! Directory entities and the location signal that drives ranking.

use std::sync::Arc;

use serde::Deserialize;

/// Identifier of a school as published by the directory.
///
/// The directory has served both numeric and string ids, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum SchoolId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for SchoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchoolId::Number(n) => write!(f, "{n}"),
            SchoolId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A latitude/longitude pair in raw degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

impl Coordinates {
    /// Returns `None` unless both components are finite and inside the
    /// valid degree ranges.
    #[must_use]
    pub fn new(lat: f64, long: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && long.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&long);
        valid.then_some(Self { lat, long })
    }
}

/// One entry of the fetched directory. Never mutated after fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolRecord {
    pub id: SchoolId,
    pub name: String,
    pub county: String,
    /// `None` when the directory entry had missing or unusable coordinates.
    pub coordinates: Option<Coordinates>,
}

/// A directory entry in display order, with its distance from the user when
/// ranking by proximity.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRecord {
    pub record: Arc<SchoolRecord>,
    pub distance: Option<f64>,
}

impl RankedRecord {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.name
    }
}

/// Status of geolocation acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LocationState {
    #[default]
    Unknown,
    Resolving,
    Available(Coordinates),
    Unavailable,
}

impl LocationState {
    /// The user's position, if one is available.
    #[must_use]
    pub fn position(&self) -> Option<Coordinates> {
        match self {
            LocationState::Available(coords) => Some(*coords),
            _ => None,
        }
    }

    /// Whether a request has completed, successfully or not.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(
            self,
            LocationState::Available(_) | LocationState::Unavailable
        )
    }
}

impl std::fmt::Display for LocationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationState::Unknown => write!(f, "unknown"),
            LocationState::Resolving => write!(f, "resolving"),
            LocationState::Available(_) => write!(f, "available"),
            LocationState::Unavailable => write!(f, "unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_reject_out_of_range_latitude() {
        assert!(Coordinates::new(123.444, 12.3).is_none());
    }

    #[test]
    fn coordinates_reject_non_finite() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_none());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn coordinates_accept_boundaries() {
        assert!(Coordinates::new(-90.0, 180.0).is_some());
    }

    #[test]
    fn school_id_deserializes_number_or_string() {
        let n: SchoolId = serde_json::from_str("42").unwrap();
        let s: SchoolId = serde_json::from_str("\"abc-1\"").unwrap();
        assert_eq!(n, SchoolId::Number(42));
        assert_eq!(s.to_string(), "abc-1");
    }

    #[test]
    fn only_available_exposes_position() {
        let coords = Coordinates::new(1.0, 2.0).unwrap();
        assert_eq!(LocationState::Available(coords).position(), Some(coords));
        assert_eq!(LocationState::Unavailable.position(), None);
        assert!(!LocationState::Resolving.is_resolved());
        assert!(LocationState::Unavailable.is_resolved());
    }
}
