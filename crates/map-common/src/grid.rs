//! Per-country population grids.

use crate::{GeoExtent, MapError, MapResult};
use serde::{Deserialize, Serialize};

/// A regular lat/lon grid of per-cell population counts.
///
/// Values are stored in row-major order with the northernmost row first
/// (raster origin upper). The geographic anchor is the lower-left corner
/// of the grid together with a uniform cell size in degrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationGrid {
    /// Number of rows (latitude direction)
    pub rows: usize,
    /// Number of columns (longitude direction)
    pub cols: usize,
    /// Longitude of the lower-left corner, degrees
    pub ll_lon: f64,
    /// Latitude of the lower-left corner, degrees
    pub ll_lat: f64,
    /// Cell size in degrees (square cells)
    pub cellsize: f64,
    /// Population counts, row-major, northernmost row first
    pub values: Vec<f32>,
}

impl PopulationGrid {
    /// Create a grid, validating that the value buffer matches the shape.
    pub fn new(
        rows: usize,
        cols: usize,
        ll_lon: f64,
        ll_lat: f64,
        cellsize: f64,
        values: Vec<f32>,
    ) -> MapResult<Self> {
        if values.len() != rows * cols {
            return Err(MapError::invalid_grid(format!(
                "expected {} values for {}x{} grid, got {}",
                rows * cols,
                rows,
                cols,
                values.len()
            )));
        }

        Ok(Self {
            rows,
            cols,
            ll_lon,
            ll_lat,
            cellsize,
            values,
        })
    }

    /// Geographic extent covered by the grid.
    pub fn extent(&self) -> GeoExtent {
        GeoExtent::from_grid(self.ll_lon, self.ll_lat, self.cellsize, self.rows, self.cols)
    }

    /// Value at (row, col), row 0 being the northernmost row.
    pub fn value(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.values[row * self.cols + col])
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Check if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_shape_mismatch() {
        let err = PopulationGrid::new(2, 3, 0.0, 0.0, 1.0, vec![0.0; 5]);
        assert!(matches!(err, Err(MapError::InvalidGrid(_))));
    }

    #[test]
    fn test_extent_matches_shape() {
        let grid = PopulationGrid::new(4, 4, 0.0, 0.0, 1.0, vec![0.0; 16]).unwrap();
        let extent = grid.extent();
        assert_eq!(extent.min_lon, 0.0);
        assert_eq!(extent.max_lon, 4.0);
        assert_eq!(extent.min_lat, 0.0);
        assert_eq!(extent.max_lat, 4.0);
    }

    #[test]
    fn test_value_indexing() {
        let grid = PopulationGrid::new(2, 3, 0.0, 0.0, 1.0, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
            .unwrap();
        assert_eq!(grid.value(0, 2), Some(3.0));
        assert_eq!(grid.value(1, 0), Some(4.0));
        assert_eq!(grid.value(2, 0), None);
    }
}
