//! Landmark and trail record files.
//!
//! Both files are comma-separated text with a header row. Columns are found
//! by header name, so extra metadata columns are allowed and ignored.

mod error;
mod records;

pub use error::LoadError;
pub use records::{parse_landmarks, parse_trails, read_landmarks, read_trails};
