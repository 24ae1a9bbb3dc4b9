//! Figure geometry.
//!
//! The figure height is fixed; width follows the extent's aspect ratio so
//! the saved image is not distorted. The map axes sit inside fixed
//! margins and the colorbar hangs off their right edge.

use map_common::GeoExtent;

/// Fixed figure height in pixels.
pub const FIGURE_HEIGHT: u32 = 800;

/// Fraction of extent width/height added as padding on each side of the
/// map axes so borders are not clipped at the data edge.
pub const AXES_PADDING: f64 = 0.025;

// Margins as fractions of the figure, matching the plot's
// left/right/bottom/top of 0.05/0.85/0.05/0.95.
const MARGIN_LEFT: f64 = 0.05;
const MAP_RIGHT: f64 = 0.85;
const MARGIN_TOP: f64 = 0.05;
const MARGIN_BOTTOM: f64 = 0.05;

// Colorbar: offset and width as fractions of figure width, height as a
// fraction of the map height, raised off the map bottom.
const CBAR_OFFSET: f64 = 0.025;
const CBAR_WIDTH: f64 = 0.025;
const CBAR_HEIGHT: f64 = 0.8;
const CBAR_RAISE: f64 = 0.1;

/// A pixel-space rectangle (top-left anchored).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Pixel layout of one figure: overall size, map axes, colorbar.
#[derive(Debug, Clone, Copy)]
pub struct FigureLayout {
    pub width: u32,
    pub height: u32,
    pub map: Rect,
    pub colorbar: Rect,
}

impl FigureLayout {
    /// Layout for a figure displaying `extent`.
    pub fn for_extent(extent: &GeoExtent) -> Self {
        let height = FIGURE_HEIGHT;
        let width = ((FIGURE_HEIGHT as f64 * extent.aspect_ratio()).round() as u32).max(1);

        let fw = width as f64;
        let fh = height as f64;

        let map = Rect {
            x: (MARGIN_LEFT * fw) as f32,
            y: (MARGIN_TOP * fh) as f32,
            w: ((MAP_RIGHT - MARGIN_LEFT) * fw) as f32,
            h: ((1.0 - MARGIN_TOP - MARGIN_BOTTOM) * fh) as f32,
        };

        let colorbar = Rect {
            x: map.x + map.w + (CBAR_OFFSET * fw) as f32,
            y: map.y + (CBAR_RAISE * map.h as f64) as f32,
            w: (CBAR_WIDTH * fw) as f32,
            h: (CBAR_HEIGHT * map.h as f64) as f32,
        };

        Self {
            width,
            height,
            map,
            colorbar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_follows_aspect_ratio() {
        let wide = FigureLayout::for_extent(&GeoExtent::new(0.0, 20.0, 0.0, 10.0));
        assert_eq!(wide.height, FIGURE_HEIGHT);
        assert_eq!(wide.width, FIGURE_HEIGHT * 2);

        let tall = FigureLayout::for_extent(&GeoExtent::new(0.0, 5.0, 0.0, 10.0));
        assert_eq!(tall.width, FIGURE_HEIGHT / 2);
    }

    #[test]
    fn test_colorbar_right_of_map() {
        let layout = FigureLayout::for_extent(&GeoExtent::new(0.0, 10.0, 0.0, 10.0));
        assert!(layout.colorbar.x >= layout.map.x + layout.map.w);
        assert!((layout.colorbar.h - layout.map.h * 0.8).abs() < 1.0);
        // The bar fits inside the figure horizontally
        assert!(layout.colorbar.x + layout.colorbar.w <= layout.width as f32);
    }
}
