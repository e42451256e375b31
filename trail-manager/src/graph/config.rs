//! Graph construction configuration.

use std::fmt;
use std::str::FromStr;

/// Which mapping implementation backs the landmark index, the adjacency
/// structure and the per-query result maps.
///
/// Query results are identical for every kind; only iteration order of the
/// raw maps and performance differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapKind {
    /// Hash map keyed by landmark id.
    #[default]
    Hash,
    /// Ordered (B-tree) map keyed by landmark id.
    Ordered,
}

impl MapKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapKind::Hash => "hash",
            MapKind::Ordered => "ordered",
        }
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown map kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown map kind `{0}` (expected `hash` or `ordered`)")]
pub struct UnknownMapKind(String);

impl FromStr for MapKind {
    type Err = UnknownMapKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hash" => Ok(MapKind::Hash),
            "ordered" | "btree" => Ok(MapKind::Ordered),
            _ => Err(UnknownMapKind(s.to_string())),
        }
    }
}

/// Configuration passed to [`super::ParkGraph::build`].
#[derive(Debug, Clone, Default)]
pub struct GraphConfig {
    /// Mapping implementation for the index and query results.
    pub map_kind: MapKind,
}

impl GraphConfig {
    /// Create a new configuration with the given map kind.
    pub fn new(map_kind: MapKind) -> Self {
        Self { map_kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GraphConfig::default();
        assert_eq!(config.map_kind, MapKind::Hash);
    }

    #[test]
    fn custom_config() {
        let config = GraphConfig::new(MapKind::Ordered);
        assert_eq!(config.map_kind, MapKind::Ordered);
    }

    #[test]
    fn parse_map_kind() {
        assert_eq!("hash".parse::<MapKind>().unwrap(), MapKind::Hash);
        assert_eq!("Ordered".parse::<MapKind>().unwrap(), MapKind::Ordered);
        assert_eq!("btree".parse::<MapKind>().unwrap(), MapKind::Ordered);

        let err = "skiplist".parse::<MapKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown map kind `skiplist` (expected `hash` or `ordered`)"
        );
    }

    #[test]
    fn display_roundtrip() {
        for kind in [MapKind::Hash, MapKind::Ordered] {
            assert_eq!(kind.to_string().parse::<MapKind>().unwrap(), kind);
        }
    }
}
