//! Park trail network manager.
//!
//! Models a park as landmarks joined by weighted trails and answers two
//! questions: how far is every landmark reachable from an origin, and which
//! landmarks have enough intersecting trails to host a first-aid station.

pub mod domain;
pub mod graph;
pub mod loader;
pub mod manager;
pub mod planner;
pub mod report;
