//! Vector boundary features for basemap layers.
//!
//! Administrative borders and coastlines are polylines in lon/lat space,
//! obtained from a [`FeatureSource`]. The bundled implementation reads
//! GeoJSON FeatureCollections (the format Natural Earth data is commonly
//! distributed in).

pub mod geojson;

pub use geojson::GeoJsonFeatures;

use map_common::MapResult;

/// A polyline in geographic coordinates (lon, lat pairs, degrees).
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
    pub closed: bool,
}

impl Polyline {
    pub fn open(points: Vec<(f64, f64)>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    pub fn closed(points: Vec<(f64, f64)>) -> Self {
        Self {
            points,
            closed: true,
        }
    }
}

/// A source of boundary polylines for one basemap layer.
pub trait FeatureSource {
    fn polylines(&self) -> MapResult<Vec<Polyline>>;
}
