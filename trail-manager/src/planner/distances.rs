//! Discovery-order distance traversal.
//!
//! This is a breadth-first walk, not a shortest-path search. A landmark's
//! distance is fixed when it is first discovered and is never revised, even
//! if a shorter route turns up later in the walk. With uniform trail lengths
//! the two coincide; with varying lengths they may not.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::domain::Landmark;
use crate::graph::{LandmarkMap, ParkGraph};

/// A landmark paired with its discovered distance in feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceEntry<'g> {
    pub landmark: &'g Landmark,
    pub feet: u64,
}

/// Result of a distance query.
///
/// Holds every landmark reachable from the origin, including the origin at
/// distance 0. Empty when the origin id was unknown.
#[derive(Debug, Clone)]
pub struct DistanceMap<'g> {
    origin: Option<&'g Landmark>,
    entries: LandmarkMap<DistanceEntry<'g>>,
}

impl<'g> DistanceMap<'g> {
    /// The origin landmark, if the id resolved.
    pub fn origin(&self) -> Option<&'g Landmark> {
        self.origin
    }

    /// Distance to a landmark, if reachable.
    pub fn get(&self, id: &str) -> Option<u64> {
        self.entries.get(id).map(|entry| entry.feet)
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
    /// [`super::rank_by_distance`] for display order.
    pub fn entries(&self) -> Vec<DistanceEntry<'g>> {
        self.entries.values().copied().collect()
    }
}

pub(super) fn distances_from<'g>(graph: &'g ParkGraph, origin: &str) -> DistanceMap<'g> {
    let mut entries = LandmarkMap::new(graph.config().map_kind);

    let Some(origin) = graph.landmark(origin) else {
        debug!(origin, "Unknown origin landmark");
        return DistanceMap {
            origin: None,
            entries,
        };
    };

    entries.insert(
        origin.id().clone(),
        DistanceEntry {
            landmark: origin,
            feet: 0,
        },
    );

    // Landmarks whose trails have not been scanned yet. Each is pushed once;
    // its distance is read back from `entries` when it is dequeued.
    let mut queue: VecDeque<&'g Landmark> = VecDeque::new();

    // Direct neighbours take the length of the last trail read to them.
    for trail in graph.trails_at(origin.id().as_str()) {
        let Some(next) = graph.across(trail, origin.id()) else {
            continue;
        };

        if next == origin {
            continue;
        }

        let previous = entries.insert(
            next.id().clone(),
            DistanceEntry {
                landmark: next,
                feet: u64::from(trail.length()),
            },
        );

        if previous.is_none() {
            queue.push_back(next);
        }
    }

    while let Some(current) = queue.pop_front() {
        let from = current.id();
        let Some(current_feet) = entries.get(from.as_str()).map(|entry| entry.feet) else {
            continue;
        };

        for trail in graph.trails_at(from.as_str()) {
            let Some(next) = graph.across(trail, from) else {
                continue;
            };

            if entries.contains_key(next.id().as_str()) {
                continue;
            }

            let discovered = DistanceEntry {
                landmark: next,
                feet: current_feet + u64::from(trail.length()),
            };

            trace!(
                from = %from,
                to = %next.id(),
                feet = discovered.feet,
                "Discovered landmark"
            );

            entries.insert(next.id().clone(), discovered);
            queue.push_back(next);
        }
    }

    debug!(
        origin = %origin.id(),
        reachable = entries.len() - 1,
        "Distance traversal complete"
    );

    DistanceMap {
        origin: Some(origin),
        entries,
    }
}
