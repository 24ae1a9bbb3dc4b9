//! GeoJSON feature parsing.
//!
//! Extracts line work from a FeatureCollection: LineString and
//! MultiLineString geometries become open polylines, Polygon and
//! MultiPolygon rings become closed polylines. Other geometry types are
//! skipped, since only boundary lines are drawn.

use crate::{FeatureSource, Polyline};
use map_common::{MapError, MapResult};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    collection_type: String,
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Option<Value>,
}

/// Boundary polylines parsed from a GeoJSON file.
#[derive(Debug, Clone)]
pub struct GeoJsonFeatures {
    path: PathBuf,
    polylines: Vec<Polyline>,
}

impl GeoJsonFeatures {
    /// Parse a GeoJSON FeatureCollection from a file.
    pub fn from_file(path: impl AsRef<Path>) -> MapResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut features: Self = content.parse()?;
        features.path = path.to_path_buf();

        debug!(
            path = %path.display(),
            polylines = features.polylines.len(),
            "loaded boundary features"
        );
        Ok(features)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.polylines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }
}

impl std::str::FromStr for GeoJsonFeatures {
    type Err = MapError;

    /// Parse a GeoJSON FeatureCollection from a string.
    fn from_str(content: &str) -> MapResult<Self> {
        let collection: FeatureCollection = serde_json::from_str(content)?;
        if collection.collection_type != "FeatureCollection" {
            return Err(MapError::feature(format!(
                "expected FeatureCollection, got {}",
                collection.collection_type
            )));
        }

        let mut polylines = Vec::new();
        for feature in &collection.features {
            if let Some(geometry) = &feature.geometry {
                extract_polylines(geometry, &mut polylines)?;
            }
        }

        Ok(Self {
            path: PathBuf::new(),
            polylines,
        })
    }
}

impl FeatureSource for GeoJsonFeatures {
    fn polylines(&self) -> MapResult<Vec<Polyline>> {
        Ok(self.polylines.clone())
    }
}

/// Convert one GeoJSON geometry into polylines.
fn extract_polylines(geometry: &Value, out: &mut Vec<Polyline>) -> MapResult<()> {
    let geom_type = geometry
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| MapError::feature("geometry without a type"))?;
    let coordinates = geometry
        .get("coordinates")
        .ok_or_else(|| MapError::feature(format!("{} geometry without coordinates", geom_type)))?;

    match geom_type {
        "LineString" => {
            out.push(Polyline::open(parse_positions(coordinates)?));
        }
        "MultiLineString" => {
            for line in as_array(coordinates)? {
                out.push(Polyline::open(parse_positions(line)?));
            }
        }
        "Polygon" => {
            for ring in as_array(coordinates)? {
                out.push(Polyline::closed(parse_positions(ring)?));
            }
        }
        "MultiPolygon" => {
            for polygon in as_array(coordinates)? {
                for ring in as_array(polygon)? {
                    out.push(Polyline::closed(parse_positions(ring)?));
                }
            }
        }
        // Points carry no line work
        _ => {}
    }

    Ok(())
}

fn as_array(value: &Value) -> MapResult<&Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| MapError::feature("expected coordinate array"))
}

/// Parse an array of GeoJSON positions into (lon, lat) pairs.
///
/// Positions may carry extra elements (altitude); only the first two are
/// used.
fn parse_positions(value: &Value) -> MapResult<Vec<(f64, f64)>> {
    let positions = as_array(value)?;
    let mut points = Vec::with_capacity(positions.len());

    for position in positions {
        let coords = as_array(position)?;
        if coords.len() < 2 {
            return Err(MapError::feature("position with fewer than 2 coordinates"));
        }
        let lon = coords[0]
            .as_f64()
            .ok_or_else(|| MapError::feature("non-numeric longitude"))?;
        let lat = coords[1]
            .as_f64()
            .ok_or_else(|| MapError::feature("non-numeric latitude"))?;
        points.push((lon, lat));
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"name": "coast"},
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[0.0, 0.0], [1.0, 1.0], [2.0, 0.5]]
                }
            },
            {
                "type": "Feature",
                "properties": {"name": "country"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 0.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": {"name": "capital"},
                "geometry": {"type": "Point", "coordinates": [1.0, 1.0]}
            }
        ]
    }"#;

    #[test]
    fn test_parse_collection() {
        let features: GeoJsonFeatures = SAMPLE.parse().unwrap();
        let polylines = features.polylines().unwrap();

        // Point geometry is skipped
        assert_eq!(polylines.len(), 2);
        assert!(!polylines[0].closed);
        assert_eq!(polylines[0].points.len(), 3);
        assert!(polylines[1].closed);
        assert_eq!(polylines[1].points[1], (2.0, 0.0));
    }

    #[test]
    fn test_multi_geometries() {
        let content = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[0,0],[1,0],[1,1],[0,0]]],
                        [[[5,5],[6,5],[6,6],[5,5]]]
                    ]
                }
            }]
        }"#;

        let features: GeoJsonFeatures = content.parse().unwrap();
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn test_rejects_non_collection() {
        let err = r#"{"type": "Feature", "features": []}"#
            .parse::<GeoJsonFeatures>()
            .unwrap_err();
        assert!(matches!(err, MapError::FeatureError(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coast.geojson");
        std::fs::write(&path, SAMPLE).unwrap();

        let features = GeoJsonFeatures::from_file(&path).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features.path(), path);
    }
}
