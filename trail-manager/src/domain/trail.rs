//! Trail records.

use std::fmt;

use super::LandmarkId;

/// An undirected trail between two landmarks, with its length in feet.
///
/// The endpoints are unordered for traversal purposes; the record keeps the
/// order they were read in so listings can show them as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    landmark_one: LandmarkId,
    landmark_two: LandmarkId,
    length: u32,
}

impl Trail {
    /// Create a trail record.
    pub fn new(landmark_one: LandmarkId, landmark_two: LandmarkId, length: u32) -> Self {
        Self {
            landmark_one,
            landmark_two,
            length,
        }
    }

    pub fn landmark_one(&self) -> &LandmarkId {
        &self.landmark_one
    }

    pub fn landmark_two(&self) -> &LandmarkId {
        &self.landmark_two
    }

    /// Length in feet.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns the endpoint on the far side from `from`.
    ///
    /// If `from` is not the first endpoint the first endpoint is returned,
    /// otherwise the second. A self-loop therefore leads back to `from`.
    pub fn other_end(&self, from: &LandmarkId) -> &LandmarkId {
        if &self.landmark_one != from {
            &self.landmark_one
        } else {
            &self.landmark_two
        }
    }

    /// Returns true if both endpoints are the same landmark.
    pub fn is_loop(&self) -> bool {
        self.landmark_one == self.landmark_two
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({} feet)",
            self.landmark_one, self.landmark_two, self.length
        )
    }
}
