//! Geographic extent of a rendered grid.

use serde::{Deserialize, Serialize};

/// The rectangular geographic bounding box of a rendered grid, in degrees.
///
/// Stored as `(min_lon, max_lon, min_lat, max_lat)`, matching the corner
/// convention of the raster overlay:
///
/// ```text
///                  +-------+ <-- (max_lon, max_lat)
///                  |       |
///                  |       |
/// (min_lon, min_lat) --> +-------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoExtent {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl GeoExtent {
    /// Create a new extent from corner coordinates.
    pub fn new(min_lon: f64, max_lon: f64, min_lat: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        }
    }

    /// Extent of a grid given its lower-left corner, cell size, and shape.
    ///
    /// The upper-right corner is `cols`/`rows` whole cells away from the
    /// lower-left corner, so `max >= min` holds on both axes for any
    /// non-negative cell size.
    pub fn from_grid(ll_lon: f64, ll_lat: f64, cellsize: f64, rows: usize, cols: usize) -> Self {
        Self {
            min_lon: ll_lon,
            max_lon: ll_lon + cols as f64 * cellsize,
            min_lat: ll_lat,
            max_lat: ll_lat + rows as f64 * cellsize,
        }
    }

    /// Width of the extent in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height of the extent in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Width / height ratio, used to size the output figure.
    pub fn aspect_ratio(&self) -> f64 {
        self.width() / self.height()
    }

    /// Expand the extent by `fraction` of its width on each horizontal
    /// side and `fraction` of its height on each vertical side.
    ///
    /// Used to pad the map axes so borders are not clipped at the edges
    /// of the data extent.
    pub fn padded(&self, fraction: f64) -> Self {
        let delta_x = self.width() * fraction;
        let delta_y = self.height() * fraction;

        Self {
            min_lon: self.min_lon - delta_x,
            max_lon: self.max_lon + delta_x,
            min_lat: self.min_lat - delta_y,
            max_lat: self.max_lat + delta_y,
        }
    }

    /// Check if a point is contained within this extent.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }
}
