//! On-disk store of preprocessed per-country grid files.

use crate::PopulationSource;
use map_common::{MapError, MapResult, PopulationGrid};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Serialized form of a per-country grid file.
///
/// One file per country, named `<country_id>.json`.
#[derive(Debug, Serialize, Deserialize)]
struct GridFile {
    country_id: u32,
    rows: usize,
    cols: usize,
    ll_lon: f64,
    ll_lat: f64,
    cellsize: f64,
    values: Vec<f32>,
}

/// A directory of preprocessed per-country grid JSON files.
#[derive(Debug, Clone)]
pub struct JsonGridStore {
    data_dir: PathBuf,
}

impl JsonGridStore {
    /// Create a store rooted at `data_dir`. The directory is not required
    /// to exist until a grid is loaded.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the grid file for a country.
    pub fn grid_path(&self, country_id: u32) -> PathBuf {
        self.data_dir.join(format!("{}.json", country_id))
    }

    /// Write a grid file. Used by preprocessing pipelines and tests.
    pub fn store(&self, country_id: u32, grid: &PopulationGrid) -> MapResult<()> {
        let file = GridFile {
            country_id,
            rows: grid.rows,
            cols: grid.cols,
            ll_lon: grid.ll_lon,
            ll_lat: grid.ll_lat,
            cellsize: grid.cellsize,
            values: grid.values.clone(),
        };

        let path = self.grid_path(country_id);
        std::fs::write(&path, serde_json::to_vec(&file)?)?;
        debug!(country_id, path = %path.display(), "stored grid file");
        Ok(())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl PopulationSource for JsonGridStore {
    fn load(&self, country_id: u32) -> MapResult<PopulationGrid> {
        let path = self.grid_path(country_id);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(MapError::CountryNotFound(country_id));
            }
            Err(e) => return Err(e.into()),
        };

        let file: GridFile = serde_json::from_slice(&bytes)?;
        if file.country_id != country_id {
            return Err(MapError::data_read(format!(
                "grid file {} declares country {}",
                path.display(),
                file.country_id
            )));
        }

        let grid = PopulationGrid::new(
            file.rows,
            file.cols,
            file.ll_lon,
            file.ll_lat,
            file.cellsize,
            file.values,
        )?;

        debug!(
            country_id,
            rows = grid.rows,
            cols = grid.cols,
            "loaded grid file"
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> PopulationGrid {
        PopulationGrid::new(2, 2, 5.0, 47.0, 0.5, vec![1.0, 2.0, 3.0, 4.0]).unwrap()
    }

    #[test]
    fn test_store_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonGridStore::new(dir.path());

        store.store(276, &sample_grid()).unwrap();
        let loaded = store.load(276).unwrap();

        assert_eq!(loaded.rows, 2);
        assert_eq!(loaded.cols, 2);
        assert_eq!(loaded.ll_lon, 5.0);
        assert_eq!(loaded.values, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_missing_country_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonGridStore::new(dir.path());

        let err = store.load(999).unwrap_err();
        assert!(matches!(err, MapError::CountryNotFound(999)));
    }

    #[test]
    fn test_mismatched_country_id_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonGridStore::new(dir.path());

        store.store(276, &sample_grid()).unwrap();
        std::fs::rename(store.grid_path(276), store.grid_path(100)).unwrap();

        let err = store.load(100).unwrap_err();
        assert!(matches!(err, MapError::DataReadError(_)));
    }
}
