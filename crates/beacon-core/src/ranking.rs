//! Display ordering of directory entries.
//!
//! With a known position, entries are ordered by flat-plane distance over raw
//! degrees. Otherwise they are ordered by name using a collation key that
//! ranks base letters before accents and case. Both orderings are
//! stable, so equal keys keep their input order and re-ranking a ranked
//! sequence is a no-op.

use std::cmp::Ordering;
use std::sync::Arc;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::schools::{Coordinates, LocationState, RankedRecord, SchoolRecord};

/// Euclidean distance between two points treated as planar coordinates.
///
/// Not geodesic: degrees of longitude and latitude are weighted equally.
#[must_use]
pub fn flat_plane_distance(lat_a: f64, lng_a: f64, lat_b: f64, lng_b: f64) -> f64 {
    let lat_diff = lat_a - lat_b;
    let lng_diff = lng_a - lng_b;
    (lat_diff * lat_diff + lng_diff * lng_diff).sqrt()
}

/// Produces a new ordered sequence of `records` for the given location state.
///
/// The input slice is left untouched. Records without coordinates are placed
/// after every record with a distance when ranking by proximity.
#[must_use]
pub fn rank(records: &[Arc<SchoolRecord>], location: &LocationState) -> Vec<RankedRecord> {
    match location.position() {
        Some(origin) => rank_by_distance(records, origin),
        None => rank_by_name(records),
    }
}

fn rank_by_distance(records: &[Arc<SchoolRecord>], origin: Coordinates) -> Vec<RankedRecord> {
    let mut ranked: Vec<RankedRecord> = records
        .iter()
        .map(|record| {
            let distance = record.coordinates.map(|c| {
                flat_plane_distance(origin.lat, origin.long, c.lat, c.long)
            });
            if distance.is_none() {
                tracing::debug!(id = %record.id, name = %record.name, "school has no coordinates; ranking last");
            }
            RankedRecord {
                record: Arc::clone(record),
                distance,
            }
        })
        .collect();

    ranked.sort_by(|a, b| compare_distance(a.distance, b.distance));
    ranked
}

fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn rank_by_name(records: &[Arc<SchoolRecord>]) -> Vec<RankedRecord> {
    // Build each key once instead of on every comparison.
    let mut keyed: Vec<(CollationKey, RankedRecord)> = records
        .iter()
        .map(|record| {
            (
                CollationKey::new(&record.name),
                RankedRecord {
                    record: Arc::clone(record),
                    distance: None,
                },
            )
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    keyed.into_iter().map(|(_, ranked)| ranked).collect()
}

/// Multi-level comparison key approximating root-locale collation.
///
/// Levels are compared in field order: base letters (accents and case
/// removed), then accents, then case with lowercase first. Names equal on all
/// three levels keep their input order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    base: String,
    accents: String,
    case: String,
}

impl CollationKey {
    fn new(name: &str) -> Self {
        let decomposed: String = name.nfd().collect();
        let lowered = decomposed.to_lowercase();
        let base = lowered.chars().filter(|c| !is_combining_mark(*c)).collect();
        let case = decomposed.chars().map(swap_case).collect();
        Self {
            base,
            accents: lowered,
            case,
        }
    }
}

/// Inverts ASCII-style case order so lowercase sorts before uppercase.
fn swap_case(c: char) -> char {
    if c.is_uppercase() {
        c.to_lowercase().next().unwrap_or(c)
    } else if c.is_lowercase() {
        c.to_uppercase().next().unwrap_or(c)
    } else {
        c
    }
}
