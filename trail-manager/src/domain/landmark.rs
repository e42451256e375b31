//! Landmark identity and records.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Error returned when parsing an invalid landmark id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid landmark id: {reason}")]
pub struct InvalidLandmarkId {
    reason: &'static str,
}

/// A landmark identifier such as `L01`.
///
/// Ids are non-empty and contain no whitespace or commas, so they survive a
/// round trip through the comma-separated record files unchanged.
///
/// # Examples
///
/// ```
/// use trail_manager::domain::LandmarkId;
///
/// let id = LandmarkId::parse("L01").unwrap();
/// assert_eq!(id.as_str(), "L01");
///
/// assert!(LandmarkId::parse("").is_err());
/// assert!(LandmarkId::parse("L 01").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LandmarkId(String);

impl LandmarkId {
    /// Parse a landmark id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLandmarkId> {
        if s.is_empty() {
            return Err(InvalidLandmarkId {
                reason: "must not be empty",
            });
        }

        if s.chars().any(|c| c.is_whitespace() || c == ',') {
            return Err(InvalidLandmarkId {
                reason: "must not contain whitespace or commas",
            });
        }

        Ok(LandmarkId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LandmarkId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LandmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LandmarkId({})", self.0)
    }
}

impl fmt::Display for LandmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named point of interest in the park.
///
/// Equality and hashing consider only the id; two records with the same id
/// but different descriptions are the same landmark.
#[derive(Debug, Clone)]
pub struct Landmark {
    id: LandmarkId,
    description: String,
}

impl Landmark {
    /// Create a landmark record.
    pub fn new(id: LandmarkId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }

    pub fn id(&self) -> &LandmarkId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Landmark {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Landmark {}

impl Hash for Landmark {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.id)
    }
}
