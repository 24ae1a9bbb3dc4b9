use map_common::{GeoExtent, PopulationGrid};

#[test]
fn extent_formula_for_synthetic_grid() {
    // 4x4 grid anchored at (0, 0) with 1-degree cells
    let grid = PopulationGrid::new(4, 4, 0.0, 0.0, 1.0, vec![0.0; 16]).unwrap();
    let extent = grid.extent();

    assert_eq!(
        (extent.min_lon, extent.max_lon, extent.min_lat, extent.max_lat),
        (0.0, 4.0, 0.0, 4.0)
    );
}

#[test]
fn extent_invariant_holds_for_fractional_cells() {
    let extent = GeoExtent::from_grid(-73.25, -55.0, 1.0 / 120.0, 4140, 1680);
    assert!(extent.max_lon >= extent.min_lon);
    assert!(extent.max_lat >= extent.min_lat);
    assert!((extent.width() - 1680.0 / 120.0).abs() < 1e-9);
    assert!((extent.height() - 4140.0 / 120.0).abs() < 1e-9);
}

#[test]
fn padding_expands_by_fraction_per_side() {
    let extent = GeoExtent::new(10.0, 30.0, -5.0, 5.0);
    let padded = extent.padded(0.025);

    // width 20 -> 0.5 per horizontal side, height 10 -> 0.25 per vertical side
    assert!((padded.min_lon - 9.5).abs() < 1e-12);
    assert!((padded.max_lon - 30.5).abs() < 1e-12);
    assert!((padded.min_lat - -5.25).abs() < 1e-12);
    assert!((padded.max_lat - 5.25).abs() < 1e-12);

    // Padding never mutates the source extent
    assert_eq!(extent, GeoExtent::new(10.0, 30.0, -5.0, 5.0));
}

#[test]
fn contains_is_inclusive_at_edges() {
    let extent = GeoExtent::new(0.0, 4.0, 0.0, 4.0);
    assert!(extent.contains(0.0, 0.0));
    assert!(extent.contains(4.0, 4.0));
    assert!(!extent.contains(4.01, 2.0));
}
