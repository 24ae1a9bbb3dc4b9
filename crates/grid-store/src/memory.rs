//! In-memory population source.

use crate::PopulationSource;
use map_common::{MapError, MapResult, PopulationGrid};
use std::collections::HashMap;

/// A population source backed by an in-memory map.
///
/// Useful for tests and for embedders that build grids programmatically.
#[derive(Debug, Default, Clone)]
pub struct MemoryGridStore {
    grids: HashMap<u32, PopulationGrid>,
}

impl MemoryGridStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a grid for a country, replacing any previous entry.
    pub fn insert(&mut self, country_id: u32, grid: PopulationGrid) {
        self.grids.insert(country_id, grid);
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}

impl PopulationSource for MemoryGridStore {
    fn load(&self, country_id: u32) -> MapResult<PopulationGrid> {
        self.grids
            .get(&country_id)
            .cloned()
            .ok_or(MapError::CountryNotFound(country_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_load() {
        let mut store = MemoryGridStore::new();
        let grid = PopulationGrid::new(1, 2, 0.0, 0.0, 1.0, vec![7.0, 8.0]).unwrap();
        store.insert(40, grid);

        assert_eq!(store.load(40).unwrap().values, vec![7.0, 8.0]);
        assert!(matches!(
            store.load(41),
            Err(MapError::CountryNotFound(41))
        ));
    }
}
