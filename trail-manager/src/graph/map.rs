//! Landmark-keyed map with a selectable backing implementation.

use std::collections::{BTreeMap, HashMap};

use crate::domain::LandmarkId;

use super::MapKind;

/// A map from landmark id to `V`, backed by either a hash map or a B-tree.
///
/// Callers must not rely on iteration order; anything user-visible is ranked
/// explicitly.
#[derive(Debug, Clone)]
pub enum LandmarkMap<V> {
    Hash(HashMap<LandmarkId, V>),
    Ordered(BTreeMap<LandmarkId, V>),
}

impl<V> LandmarkMap<V> {
    /// Create an empty map of the given kind.
    pub fn new(kind: MapKind) -> Self {
        match kind {
            MapKind::Hash => LandmarkMap::Hash(HashMap::new()),
            MapKind::Ordered => LandmarkMap::Ordered(BTreeMap::new()),
        }
    }

    pub fn kind(&self) -> MapKind {
        match self {
            LandmarkMap::Hash(_) => MapKind::Hash,
            LandmarkMap::Ordered(_) => MapKind::Ordered,
        }
    }

    /// Insert a value, returning the previous value for the id if any.
    pub fn insert(&mut self, id: LandmarkId, value: V) -> Option<V> {
        match self {
            LandmarkMap::Hash(m) => m.insert(id, value),
            LandmarkMap::Ordered(m) => m.insert(id, value),
        }
    }

    pub fn get(&self, id: &str) -> Option<&V> {
        match self {
            LandmarkMap::Hash(m) => m.get(id),
            LandmarkMap::Ordered(m) => m.get(id),
        }
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut V> {
        match self {
            LandmarkMap::Hash(m) => m.get_mut(id),
            LandmarkMap::Ordered(m) => m.get_mut(id),
        }
    }

    pub fn contains_key(&self, id: &str) -> bool {
        match self {
            LandmarkMap::Hash(m) => m.contains_key(id),
            LandmarkMap::Ordered(m) => m.contains_key(id),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            LandmarkMap::Hash(m) => m.len(),
            LandmarkMap::Ordered(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over entries in the backing map's own order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (&LandmarkId, &V)> + '_> {
        match self {
            LandmarkMap::Hash(m) => Box::new(m.iter()),
            LandmarkMap::Ordered(m) => Box::new(m.iter()),
        }
    }

    /// Iterate over values in the backing map's own order.
    pub fn values(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        match self {
            LandmarkMap::Hash(m) => Box::new(m.values()),
            LandmarkMap::Ordered(m) => Box::new(m.values()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> LandmarkId {
        LandmarkId::parse(s).unwrap()
    }

    #[test]
    fn empty_map() {
        for kind in [MapKind::Hash, MapKind::Ordered] {
            let map: LandmarkMap<u32> = LandmarkMap::new(kind);
            assert!(map.is_empty());
            assert_eq!(map.len(), 0);
            assert_eq!(map.kind(), kind);
            assert!(map.get("L01").is_none());
        }
    }

    #[test]
    fn insert_overwrites() {
        for kind in [MapKind::Hash, MapKind::Ordered] {
            let mut map = LandmarkMap::new(kind);
            assert_eq!(map.insert(id("L01"), 1), None);
            assert_eq!(map.insert(id("L01"), 2), Some(1));
            assert_eq!(map.len(), 1);
            assert_eq!(map.get("L01"), Some(&2));
        }
    }

    #[test]
    fn get_mut_and_contains() {
        for kind in [MapKind::Hash, MapKind::Ordered] {
            let mut map = LandmarkMap::new(kind);
            map.insert(id("L01"), vec![1]);
            map.get_mut("L01").unwrap().push(2);
            assert_eq!(map.get("L01"), Some(&vec![1, 2]));
            assert!(map.contains_key("L01"));
            assert!(!map.contains_key("L02"));
        }
    }

    #[test]
    fn ordered_iterates_by_id() {
        let mut map = LandmarkMap::new(MapKind::Ordered);
        map.insert(id("L03"), 'c');
        map.insert(id("L01"), 'a');
        map.insert(id("L02"), 'b');

        let keys: Vec<&str> = map.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["L01", "L02", "L03"]);

        let values: String = map.values().collect();
        assert_eq!(values, "abc");
    }
}
