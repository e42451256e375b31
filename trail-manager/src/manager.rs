//! Facade over loading, graph construction and reports.
//!
//! This is the surface the CLI talks to: it owns the built [`ParkGraph`] and
//! turns query results into report strings.

use std::path::Path;

use crate::domain::{GraphError, Landmark, Trail};
use crate::graph::{GraphConfig, ParkGraph};
use crate::loader::{self, LoadError};
use crate::planner::{CandidateMap, DistanceMap, Planner};
use crate::report::{self, CandidatesResponse, DistancesResponse};

/// Errors from setting up a [`TrailManager`].
#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    /// A record file could not be read or parsed
    #[error("failed to load park data: {0}")]
    Load(#[from] LoadError),

    /// The records do not form a valid graph
    #[error("invalid park data: {0}")]
    Graph(#[from] GraphError),
}

/// A loaded park, ready to answer distance and first-aid queries.
#[derive(Debug, Clone)]
pub struct TrailManager {
    graph: ParkGraph,
}

impl TrailManager {
    /// Load landmark and trail files and build the graph.
    pub fn from_files(
        landmarks: impl AsRef<Path>,
        trails: impl AsRef<Path>,
        config: GraphConfig,
    ) -> Result<Self, ManagerError> {
        let landmarks = loader::read_landmarks(landmarks)?;
        let trails = loader::read_trails(trails)?;
        Self::from_records(landmarks, trails, config)
    }

    /// Build from already-loaded records.
    pub fn from_records(
        landmarks: Vec<Landmark>,
        trails: Vec<Trail>,
        config: GraphConfig,
    ) -> Result<Self, ManagerError> {
        let graph = ParkGraph::build(landmarks, trails, config)?;
        Ok(Self { graph })
    }

    pub fn graph(&self) -> &ParkGraph {
        &self.graph
    }

    /// Look up a landmark by id.
    pub fn landmark(&self, id: &str) -> Option<&Landmark> {
        self.graph.landmark(id)
    }

    fn planner(&self) -> Planner<'_> {
        Planner::new(&self.graph)
    }

    /// Distances to every landmark reachable from `origin`.
    pub fn distances_from(&self, origin: &str) -> DistanceMap<'_> {
        self.planner().distances_from(origin)
    }

    /// Landmarks with at least `threshold` intersecting trails.
    pub fn candidates_with_at_least(&self, threshold: i64) -> CandidateMap<'_> {
        self.planner().candidates_with_at_least(threshold)
    }

    /// Text report of distances from `origin`.
    pub fn distances_report(&self, origin: &str) -> String {
        report::distances_report(origin, &self.distances_from(origin))
    }

    /// Text report of proposed first-aid station locations.
    pub fn first_aid_report(&self, threshold: i64) -> String {
        report::candidates_report(&self.candidates_with_at_least(threshold))
    }

    /// JSON view of distances from `origin`.
    pub fn distances_json(&self, origin: &str) -> DistancesResponse {
        DistancesResponse::new(origin, &self.distances_from(origin))
    }

    /// JSON view of proposed first-aid station locations.
    pub fn first_aid_json(&self, threshold: i64) -> CandidatesResponse {
        CandidatesResponse::new(&self.candidates_with_at_least(threshold))
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
