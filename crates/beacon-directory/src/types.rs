//! Wire shape of the directory document.
//!
//! The endpoint returns `{ "schools": [ { id, name, county, coordinates } ] }`.
//! Identity fields are required and fail the whole document when absent;
//! coordinates are read leniently so one bad entry cannot drop the directory.

use beacon_core::{Coordinates, SchoolId, SchoolRecord};
use serde::Deserialize;

/// Top-level directory document.
#[derive(Debug, Deserialize)]
pub struct DirectoryResponse {
    pub schools: Vec<SchoolEntry>,
}

/// One school as published by the endpoint.
#[derive(Debug, Deserialize)]
pub struct SchoolEntry {
    pub id: SchoolId,
    pub name: String,
    #[serde(default)]
    pub county: Option<String>,
    /// Kept untyped so malformed coordinates degrade to `None`.
    #[serde(default)]
    pub coordinates: Option<serde_json::Value>,
}

impl SchoolEntry {
    /// Converts the wire entry into a [`SchoolRecord`].
    #[must_use]
    pub fn into_record(self) -> SchoolRecord {
        let coordinates = self.coordinates.as_ref().and_then(parse_coordinates);
        SchoolRecord {
            id: self.id,
            name: self.name,
            county: self.county.unwrap_or_default(),
            coordinates,
        }
    }
}

/// Reads `{ "lat": f64, "long": f64 }`, rejecting anything out of range.
fn parse_coordinates(value: &serde_json::Value) -> Option<Coordinates> {
    let lat = value.get("lat").and_then(serde_json::Value::as_f64)?;
    let long = value.get("long").and_then(serde_json::Value::as_f64)?;
    Coordinates::new(lat, long)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn entry(value: serde_json::Value) -> SchoolEntry {
        serde_json::from_value(value).expect("entry should deserialize")
    }

    #[test]
    fn full_entry_converts() {
        let record = entry(json!({
            "id": 7,
            "name": "Lincoln High",
            "county": "Cook",
            "coordinates": { "lat": 41.88, "long": -87.63 }
        }))
        .into_record();

        assert_eq!(record.id, SchoolId::Number(7));
        assert_eq!(record.county, "Cook");
        let coords = record.coordinates.expect("coordinates should parse");
        assert!((coords.lat - 41.88).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_county_defaults_to_empty() {
        let record = entry(json!({ "id": "x", "name": "A", "county": null })).into_record();
        assert_eq!(record.county, "");
    }

    #[test]
    fn string_coordinates_are_treated_as_missing() {
        let record = entry(json!({
            "id": 1,
            "name": "A",
            "coordinates": { "lat": "41.0", "long": "-87.0" }
        }))
        .into_record();
        assert!(record.coordinates.is_none());
    }

    #[test]
    fn partial_coordinates_are_treated_as_missing() {
        let record = entry(json!({ "id": 1, "name": "A", "coordinates": { "lat": 1.0 } }))
            .into_record();
        assert!(record.coordinates.is_none());
    }

    #[test]
    fn out_of_range_coordinates_are_treated_as_missing() {
        let record = entry(json!({
            "id": 1,
            "name": "A",
            "coordinates": { "lat": 123.444, "long": 12.3 }
        }))
        .into_record();
        assert!(record.coordinates.is_none());
    }

    #[test]
    fn missing_name_is_rejected() {
        let result = serde_json::from_value::<SchoolEntry>(json!({ "id": 1 }));
        assert!(result.is_err());
    }
}
