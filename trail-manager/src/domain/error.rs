//! Domain error types.
//!
//! These errors represent integrity violations in the loaded park data.
//! They are distinct from I/O and parse errors.

use super::LandmarkId;

/// Errors raised while building the trail graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A trail endpoint does not match any loaded landmark
    #[error("trail {trail} references unknown landmark {id}")]
    UnknownLandmark { trail: usize, id: LandmarkId },
}
