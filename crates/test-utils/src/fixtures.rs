//! Common test fixtures.

/// A small GeoJSON FeatureCollection covering the unit square used by the
/// synthetic grids: one coastline-style LineString and one border-style
/// Polygon.
pub const BOUNDARY_GEOJSON: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {"kind": "coastline"},
            "geometry": {
                "type": "LineString",
                "coordinates": [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0]]
            }
        },
        {
            "type": "Feature",
            "properties": {"kind": "border"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.5, 0.5], [3.5, 0.5], [3.5, 3.5], [0.5, 3.5], [0.5, 0.5]]]
            }
        }
    ]
}"#;
