//! Image rendering for population map visualization.
//!
//! Provides the pixel-level pieces the map composer assembles:
//! - Named color ramps with an under-range color
//! - Grid raster overlay with clamped value scaling
//! - Polyline strokes for borders and coastlines
//! - Segment-glyph text for titles and legend labels
//! - Colorbar legend
//! - PNG encoding

pub mod colorbar;
pub mod colormap;
pub mod glyphs;
pub mod lines;
pub mod png;
pub mod raster;

pub use colormap::{Color, ColorScale, Colormap};
pub use raster::GeoTransform;
