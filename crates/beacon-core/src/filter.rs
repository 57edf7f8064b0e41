//! Incremental search over an already-ranked sequence.

use crate::schools::RankedRecord;

/// Retains every entry whose name contains `query`, ignoring case.
///
/// Relative order is preserved. An empty query retains everything.
#[must_use]
pub fn filter(ranked: &[RankedRecord], query: &str) -> Vec<RankedRecord> {
    if query.is_empty() {
        return ranked.to_vec();
    }

    let needle = query.to_lowercase();
    ranked
        .iter()
        .filter(|entry| entry.name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::schools::{SchoolId, SchoolRecord};

    fn ranked(names: &[&str]) -> Vec<RankedRecord> {
        names
            .iter()
            .zip(1..)
            .map(|(name, id)| RankedRecord {
                record: Arc::new(SchoolRecord {
                    id: SchoolId::Number(id),
                    name: (*name).to_string(),
                    county: String::new(),
                    coordinates: None,
                }),
                distance: None,
            })
            .collect()
    }

    fn names(list: &[RankedRecord]) -> Vec<&str> {
        list.iter().map(RankedRecord::name).collect()
    }

    #[test]
    fn narrows_case_insensitively_preserving_order() {
        let list = ranked(&["Alpha High", "Beta Academy", "Alpine School"]);
        let visible = filter(&list, "alp");
        assert_eq!(names(&visible), vec!["Alpha High", "Alpine School"]);
    }

    #[test]
    fn uppercase_query_matches_lowercase_name() {
        let list = ranked(&["riverside elementary"]);
        assert_eq!(filter(&list, "RIVER").len(), 1);
    }

    #[test]
    fn empty_query_returns_everything() {
        let list = ranked(&["B", "A", "C"]);
        assert_eq!(filter(&list, ""), list);
    }

    #[test]
    fn query_is_not_trimmed() {
        let list = ranked(&["Alpha High", "AlphaHigh"]);
        assert_eq!(names(&filter(&list, "a h")), vec!["Alpha High"]);
    }

    #[test]
    fn no_match_yields_empty() {
        let list = ranked(&["Alpha", "Beta"]);
        assert!(filter(&list, "zzz").is_empty());
    }

    #[test]
    fn result_is_a_subsequence_of_input() {
        let list = ranked(&["North High", "South High", "North Middle", "East"]);
        let visible = filter(&list, "north");
        let positions: Vec<usize> = visible
            .iter()
            .map(|v| list.iter().position(|r| r == v).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
