//! Human-readable and JSON renderings of query results.
//!
//! The text reports are a compatibility surface: wording, indentation and
//! rounding are fixed.

mod dto;
mod format;

pub use dto::{CandidatesResponse, DistancesResponse, LandmarkDto, ReachableDto, StationDto, TrailDto};
pub use format::{FEET_PER_MILE, candidates_report, distances_report, format_miles};
