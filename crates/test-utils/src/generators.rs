//! Synthetic population grids with predictable values.

use map_common::PopulationGrid;

/// A sparse 4x4 grid anchored at (0, 0) with 1-degree cells.
///
/// Rows north to south:
///
/// ```text
/// 0 0 1 2
/// 0 3 4 5
/// 6 0 0 0
/// 0 0 0 0
/// ```
///
/// The positive subset is {1, 2, 3, 4, 5, 6}, so its 90th percentile is
/// 5.5 and the extent is (0, 4, 0, 4).
pub fn sparse_grid() -> PopulationGrid {
    PopulationGrid::new(
        4,
        4,
        0.0,
        0.0,
        1.0,
        vec![
            0.0, 0.0, 1.0, 2.0, //
            0.0, 3.0, 4.0, 5.0, //
            6.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0,
        ],
    )
    .expect("sparse grid shape is valid")
}

/// A grid where every cell is zero. Exercises the degenerate color scale.
pub fn empty_grid(rows: usize, cols: usize) -> PopulationGrid {
    PopulationGrid::new(rows, cols, 0.0, 0.0, 1.0, vec![0.0; rows * cols])
        .expect("empty grid shape is valid")
}

/// A grid with value `col * 1000 + row`, anchored at `(ll_lon, ll_lat)`.
///
/// Makes it easy to verify indexing: `grid.value(row, col)` equals
/// `col * 1000 + row`.
pub fn indexed_grid(rows: usize, cols: usize, ll_lon: f64, ll_lat: f64) -> PopulationGrid {
    let mut values = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            values.push((col * 1000 + row) as f32);
        }
    }
    PopulationGrid::new(rows, cols, ll_lon, ll_lat, 1.0, values)
        .expect("indexed grid shape is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_grid_shape() {
        let grid = sparse_grid();
        assert_eq!(grid.len(), 16);
        assert_eq!(grid.value(2, 0), Some(6.0));
        assert_eq!(grid.value(3, 3), Some(0.0));
    }

    #[test]
    fn test_indexed_grid_values() {
        let grid = indexed_grid(3, 5, -10.0, 40.0);
        assert_eq!(grid.value(1, 4), Some(4001.0));
        assert_eq!(grid.ll_lon, -10.0);
    }
}
