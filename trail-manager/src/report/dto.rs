//! Serializable views of query results for `--json` output.

use serde::Serialize;

use crate::domain::{Landmark, Trail};
use crate::planner::{CandidateMap, DistanceMap, rank_by_distance, rank_by_trail_count};

use super::format::{FEET_PER_MILE, format_miles};

/// A landmark reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandmarkDto {
    pub id: String,
    pub description: String,
}

impl From<&Landmark> for LandmarkDto {
    fn from(landmark: &Landmark) -> Self {
        Self {
            id: landmark.id().to_string(),
            description: landmark.description().to_string(),
        }
    }
}

/// A trail as read from the trail file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrailDto {
    pub landmark_one: String,
    pub landmark_two: String,
    pub length: u32,
}

impl From<&Trail> for TrailDto {
    fn from(trail: &Trail) -> Self {
        Self {
            landmark_one: trail.landmark_one().to_string(),
            landmark_two: trail.landmark_two().to_string(),
            length: trail.length(),
        }
    }
}

/// One reachable landmark in a distances response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachableDto {
    #[serde(flatten)]
    pub landmark: LandmarkDto,

    /// Discovered distance in feet
    pub feet: u64,

    /// Distance in miles, only present beyond one mile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miles: Option<String>,
}

/// Distances from an origin, nearest first, excluding the origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistancesResponse {
    pub origin: Option<LandmarkDto>,

    /// Set when there is nothing to list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub reachable: Vec<ReachableDto>,
}

impl DistancesResponse {
    pub fn new(origin_id: &str, distances: &DistanceMap<'_>) -> Self {
        let Some(origin) = distances.origin() else {
            return Self {
                origin: None,
                message: Some(super::distances_report(origin_id, distances)),
                reachable: Vec::new(),
            };
        };

        let reachable: Vec<ReachableDto> = rank_by_distance(distances.entries())
            .into_iter()
            .filter(|entry| entry.landmark != origin)
            .map(|entry| ReachableDto {
                landmark: entry.landmark.into(),
                feet: entry.feet,
                miles: (entry.feet > FEET_PER_MILE).then(|| format_miles(entry.feet)),
            })
            .collect();

        let message = reachable
            .is_empty()
            .then(|| super::distances_report(origin_id, distances));

        Self {
            origin: Some(origin.into()),
            message,
            reachable,
        }
    }
}

/// One proposed first-aid location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationDto {
    #[serde(flatten)]
    pub landmark: LandmarkDto,

    pub intersecting_trails: usize,

    pub trails: Vec<TrailDto>,
}

/// Proposed first-aid locations, busiest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidatesResponse {
    pub threshold: i64,

    /// Set when the request was invalid or nothing qualified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub candidates: Vec<StationDto>,
}

impl CandidatesResponse {
    pub fn new(candidates: &CandidateMap<'_>) -> Self {
        let stations: Vec<StationDto> = rank_by_trail_count(candidates.entries())
            .into_iter()
            .map(|entry| StationDto {
                landmark: entry.landmark.into(),
                intersecting_trails: entry.trail_count(),
                trails: entry.trails.iter().map(|&trail| trail.into()).collect(),
            })
            .collect();

        let message = stations
            .is_empty()
            .then(|| super::candidates_report(candidates));

        Self {
            threshold: candidates.threshold(),
            message,
            candidates: stations,
        }
    }
}
