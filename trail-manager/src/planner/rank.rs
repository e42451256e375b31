//! Display ordering for query results.
//!
//! Map iteration order is never relied on. Both orderings fall back to the
//! landmark description and then the id, so output is deterministic for any
//! backing map.

use std::cmp::Ordering;

use super::{CandidateEntry, DistanceEntry};

/// Rank distance entries nearest-first.
///
/// Entries are ordered by:
/// 1. Distance in feet (smaller is first)
/// 2. Landmark description (lexicographic)
/// 3. Landmark id (lexicographic)
pub fn rank_by_distance(mut entries: Vec<DistanceEntry<'_>>) -> Vec<DistanceEntry<'_>> {
    entries.sort_by(|a, b| {
        let feet_cmp = a.feet.cmp(&b.feet);
        if feet_cmp != Ordering::Equal {
            return feet_cmp;
        }

        a.landmark
            .description()
            .cmp(b.landmark.description())
            .then_with(|| a.landmark.id().cmp(b.landmark.id()))
    });

    entries
}

/// Rank first-aid candidates busiest-first.
///
/// Entries are ordered by:
/// 1. Intersecting trail count (more is first)
/// 2. Landmark description (lexicographic)
/// 3. Landmark id (lexicographic)
pub fn rank_by_trail_count(mut entries: Vec<CandidateEntry<'_>>) -> Vec<CandidateEntry<'_>> {
    entries.sort_by(|a, b| {
        let count_cmp = b.trail_count().cmp(&a.trail_count());
        if count_cmp != Ordering::Equal {
            return count_cmp;
        }

        a.landmark
            .description()
            .cmp(b.landmark.description())
            .then_with(|| a.landmark.id().cmp(b.landmark.id()))
    });

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Landmark, LandmarkId, Trail};

    fn landmark(id: &str, description: &str) -> Landmark {
        Landmark::new(LandmarkId::parse(id).unwrap(), description)
    }

    fn descriptions<'a>(entries: impl IntoIterator<Item = &'a Landmark>) -> Vec<&'a str> {
        entries.into_iter().map(Landmark::description).collect()
    }

    #[test]
    fn rank_by_distance_ascending() {
        let near = landmark("L02", "Restroom 1");
        let far = landmark("L03", "Visitor Center");
        let origin = landmark("L01", "Park Entrance");

        let ranked = rank_by_distance(vec![
            DistanceEntry { landmark: &far, feet: 500 },
            DistanceEntry { landmark: &origin, feet: 0 },
            DistanceEntry { landmark: &near, feet: 200 },
        ]);

        assert_eq!(
            descriptions(ranked.iter().map(|e| e.landmark)),
            vec!["Park Entrance", "Restroom 1", "Visitor Center"]
        );
    }

    #[test]
    fn distance_ties_break_on_description_not_id() {
        let showers = landmark("L13", "Showers 1");
        let overlook = landmark("L14", "Overlook 2");

        let ranked = rank_by_distance(vec![
            DistanceEntry { landmark: &showers, feet: 300 },
            DistanceEntry { landmark: &overlook, feet: 300 },
        ]);

        assert_eq!(
            descriptions(ranked.iter().map(|e| e.landmark)),
            vec!["Overlook 2", "Showers 1"]
        );
    }

    #[test]
    fn rank_by_trail_count_descending_then_description() {
        let lake = landmark("L08", "Lake");
        let waterfall = landmark("L07", "Waterfall");
        let entrance = landmark("L01", "Park Entrance");
        let campsite = landmark("L12", "Campsite 1");

        let trail = Trail::new(
            LandmarkId::parse("L01").unwrap(),
            LandmarkId::parse("L02").unwrap(),
            1,
        );
        let entry = |landmark, count| CandidateEntry {
            landmark,
            trails: vec![&trail; count],
        };

        let ranked = rank_by_trail_count(vec![
            entry(&lake, 1),
            entry(&waterfall, 3),
            entry(&campsite, 2),
            entry(&entrance, 3),
        ]);

        assert_eq!(
            descriptions(ranked.iter().map(|e| e.landmark)),
            vec!["Park Entrance", "Waterfall", "Campsite 1", "Lake"]
        );
    }

    #[test]
    fn full_ties_break_on_id() {
        let b3 = landmark("L03", "Bench");
        let b1 = landmark("L01", "Bench");
        let b2 = landmark("L02", "Bench");

        let ranked = rank_by_distance(vec![
            DistanceEntry { landmark: &b3, feet: 100 },
            DistanceEntry { landmark: &b1, feet: 100 },
            DistanceEntry { landmark: &b2, feet: 100 },
        ]);
        let ids: Vec<&str> = ranked.iter().map(|e| e.landmark.id().as_str()).collect();
        assert_eq!(ids, vec!["L01", "L02", "L03"]);

        let ranked = rank_by_trail_count(vec![
            CandidateEntry { landmark: &b2, trails: vec![] },
            CandidateEntry { landmark: &b3, trails: vec![] },
            CandidateEntry { landmark: &b1, trails: vec![] },
        ]);
        let ids: Vec<&str> = ranked.iter().map(|e| e.landmark.id().as_str()).collect();
        assert_eq!(ids, vec!["L01", "L02", "L03"]);
    }

    #[test]
    fn empty_input() {
        assert!(rank_by_distance(Vec::new()).is_empty());
        assert!(rank_by_trail_count(Vec::new()).is_empty());
    }
}
