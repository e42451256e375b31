//! Domain types for the park trail network.
//!
//! Landmarks and trails are immutable value records. Identity is carried by
//! [`LandmarkId`], which is validated at construction so downstream code can
//! trust any id it receives.

mod error;
mod landmark;
mod trail;

pub use error::GraphError;
pub use landmark::{InvalidLandmarkId, Landmark, LandmarkId};
pub use trail::Trail;
