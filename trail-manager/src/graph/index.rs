//! Landmark index and adjacency construction.

use tracing::debug;

use crate::domain::{GraphError, Landmark, LandmarkId, Trail};

use super::{GraphConfig, LandmarkMap};

/// The park's trail network: a landmark index plus, for every landmark, the
/// trails touching it in the order they were loaded.
#[derive(Debug, Clone)]
pub struct ParkGraph {
    config: GraphConfig,
    landmarks: LandmarkMap<Landmark>,
    /// Positions into `trails`, per landmark, in trail input order.
    adjacency: LandmarkMap<Vec<usize>>,
    trails: Vec<Trail>,
}

impl ParkGraph {
    /// Build the graph from landmark and trail records.
    ///
    /// Duplicate landmark ids overwrite earlier ones. Every landmark gets an
    /// adjacency entry, even with no trails. A self-loop is recorded twice
    /// against its landmark. Fails without returning a partial graph if any
    /// trail endpoint is not a loaded landmark.
    pub fn build(
        landmarks: Vec<Landmark>,
        trails: Vec<Trail>,
        config: GraphConfig,
    ) -> Result<Self, GraphError> {
        let mut index = LandmarkMap::new(config.map_kind);
        let mut adjacency = LandmarkMap::new(config.map_kind);

        for landmark in landmarks {
            adjacency.insert(landmark.id().clone(), Vec::new());
            index.insert(landmark.id().clone(), landmark);
        }

        for (position, trail) in trails.iter().enumerate() {
            for endpoint in [trail.landmark_one(), trail.landmark_two()] {
                let incident = adjacency.get_mut(endpoint.as_str()).ok_or_else(|| {
                    GraphError::UnknownLandmark {
                        trail: position,
                        id: endpoint.clone(),
                    }
                })?;
                incident.push(position);
            }
        }

        debug!(
            landmarks = index.len(),
            trails = trails.len(),
            map = %config.map_kind,
            "Built park graph"
        );

        Ok(Self {
            config,
            landmarks: index,
            adjacency,
            trails,
        })
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Look up a landmark by id.
    pub fn landmark(&self, id: &str) -> Option<&Landmark> {
        self.landmarks.get(id)
    }

    /// Number of distinct landmarks.
    pub fn landmark_count(&self) -> usize {
        self.landmarks.len()
    }

    /// All trails in input order.
    pub fn trails(&self) -> &[Trail] {
        &self.trails
    }

    /// Iterate over all landmarks, in no particular order.
    pub fn landmarks(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.values()
    }

    /// Trails touching a landmark, in trail input order.
    ///
    /// Yields nothing for an unknown id.
    pub fn trails_at(&self, id: &str) -> impl Iterator<Item = &Trail> {
        self.adjacency
            .get(id)
            .map(|positions| positions.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&position| &self.trails[position])
    }

    /// Number of trails touching a landmark (self-loops count twice).
    pub fn trail_count(&self, id: &str) -> usize {
        self.adjacency.get(id).map_or(0, Vec::len)
    }

    /// Resolve the landmark on the far side of `trail` from `from`.
    pub fn across(&self, trail: &Trail, from: &LandmarkId) -> Option<&Landmark> {
        self.landmark(trail.other_end(from).as_str())
    }
}
