//! Queries over a built [`ParkGraph`].
//!
//! Two questions are answered here:
//!
//! - how far is every landmark reachable from an origin, using
//!   discovery-order distances (see [`Planner::distances_from`]);
//! - which landmarks have enough intersecting trails to host a first-aid
//!   station (see [`Planner::candidates_with_at_least`]).
//!
//! Both return per-query maps that borrow from the graph. Ordering for
//! display lives in [`rank`].

mod distances;
pub mod rank;
mod stations;


pub use distances::{DistanceEntry, DistanceMap};
pub use rank::{rank_by_distance, rank_by_trail_count};
pub use stations::{CandidateEntry, CandidateMap};

use crate::graph::ParkGraph;

/// Read-only query front for a park graph.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'g> {
    graph: &'g ParkGraph,
}

impl<'g> Planner<'g> {
    /// Create a planner over a built graph.
    pub fn new(graph: &'g ParkGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g ParkGraph {
        self.graph
    }

    /// Distances to every landmark reachable from `origin`.
    ///
    /// Returns an empty map if `origin` is not a known landmark id.
    pub fn distances_from(&self, origin: &str) -> DistanceMap<'g> {
        distances::distances_from(self.graph, origin)
    }

    /// Landmarks with at least `threshold` intersecting trails.
    ///
    /// Returns an empty map if `threshold` is zero or negative.
    pub fn candidates_with_at_least(&self, threshold: i64) -> CandidateMap<'g> {
        stations::candidates_with_at_least(self.graph, threshold)
    }
}
