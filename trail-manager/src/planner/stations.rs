//! First-aid station candidate selection.

use tracing::debug;

use crate::domain::{Landmark, Trail};
use crate::graph::{LandmarkMap, ParkGraph};

/// A candidate landmark with every trail that intersects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntry<'g> {
    pub landmark: &'g Landmark,
    pub trails: Vec<&'g Trail>,
}

impl CandidateEntry<'_> {
    /// Number of intersecting trails.
    pub fn trail_count(&self) -> usize {
        self.trails.len()
    }
}

/// Result of a candidate query: landmarks meeting the threshold.
#[derive(Debug, Clone)]
pub struct CandidateMap<'g> {
    threshold: i64,
    entries: LandmarkMap<CandidateEntry<'g>>,
}

impl<'g> CandidateMap<'g> {
    /// The threshold this map was selected with.
    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Intersecting trails for a candidate, if it qualified.
    pub fn get(&self, id: &str) -> Option<&[&'g Trail]> {
        self.entries.get(id).map(|entry| entry.trails.as_slice())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in unspecified order. Use
    /// [`super::rank_by_trail_count`] for display order.
    pub fn entries(&self) -> Vec<CandidateEntry<'g>> {
        self.entries.values().cloned().collect()
    }
}

pub(super) fn candidates_with_at_least(graph: &ParkGraph, threshold: i64) -> CandidateMap<'_> {
    let mut entries = LandmarkMap::new(graph.config().map_kind);

    if threshold <= 0 {
        debug!(threshold, "Non-positive trail threshold");
        return CandidateMap { threshold, entries };
    }

    for landmark in graph.landmarks() {
        let count = graph.trail_count(landmark.id().as_str());
        if i64::try_from(count).unwrap_or(i64::MAX) < threshold {
            continue;
        }

        entries.insert(
            landmark.id().clone(),
            CandidateEntry {
                landmark,
                trails: graph.trails_at(landmark.id().as_str()).collect(),
            },
        );
    }

    debug!(
        threshold,
        candidates = entries.len(),
        "Candidate selection complete"
    );

    CandidateMap { threshold, entries }
}
