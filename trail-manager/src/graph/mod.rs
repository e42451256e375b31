//! Graph index over the park's landmarks and trails.
//!
//! The index is built once from loader output and is read-only afterwards.
//! Queries in [`crate::planner`] borrow it immutably, so a built graph can be
//! shared between threads for concurrent reads.

mod config;
mod index;
mod map;

pub use config::{GraphConfig, MapKind};
pub use index::ParkGraph;
pub use map::LandmarkMap;
