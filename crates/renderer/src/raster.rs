//! Raster overlay of a population grid onto map axes.

use crate::colormap::ColorScale;
use map_common::{GeoExtent, PopulationGrid};
use tiny_skia::Pixmap;

/// Mapping between geographic coordinates and pixel coordinates for a
/// pixmap that displays `extent`.
///
/// Pixel y grows downward while latitude grows upward, so row 0 of the
/// pixmap shows `max_lat`.
#[derive(Debug, Clone, Copy)]
pub struct GeoTransform {
    extent: GeoExtent,
    width: f64,
    height: f64,
}

impl GeoTransform {
    pub fn new(extent: GeoExtent, width: u32, height: u32) -> Self {
        Self {
            extent,
            width: width as f64,
            height: height as f64,
        }
    }

    /// Project a geographic point to pixel coordinates.
    pub fn to_pixel(&self, lon: f64, lat: f64) -> (f32, f32) {
        let x = (lon - self.extent.min_lon) / self.extent.width() * self.width;
        let y = (self.extent.max_lat - lat) / self.extent.height() * self.height;
        (x as f32, y as f32)
    }

    /// Inverse-project a pixel position to geographic coordinates.
    pub fn to_geo(&self, x: f64, y: f64) -> (f64, f64) {
        let lon = self.extent.min_lon + x / self.width * self.extent.width();
        let lat = self.extent.max_lat - y / self.height * self.extent.height();
        (lon, lat)
    }

    pub fn extent(&self) -> &GeoExtent {
        &self.extent
    }
}

/// Draw the grid into the pixmap as a georeferenced raster.
///
/// Each destination pixel is inverse-projected through `view` and sampled
/// from the nearest grid cell; pixels outside the grid extent are left
/// untouched so the padded margin keeps the background color. Cells at or
/// below `scale.vmin` render in the under-range color.
pub fn draw_grid(pixmap: &mut Pixmap, grid: &PopulationGrid, view: &GeoTransform, scale: &ColorScale) {
    let grid_extent = grid.extent();
    let width = pixmap.width() as usize;
    let height = pixmap.height() as usize;
    let data = pixmap.data_mut();

    for py in 0..height {
        for px in 0..width {
            let (lon, lat) = view.to_geo(px as f64 + 0.5, py as f64 + 0.5);
            if !grid_extent.contains(lon, lat) {
                continue;
            }

            // Nearest cell; row 0 is the northernmost row
            let col = ((lon - grid_extent.min_lon) / grid.cellsize) as usize;
            let row = ((grid_extent.max_lat - lat) / grid.cellsize) as usize;
            let col = col.min(grid.cols.saturating_sub(1));
            let row = row.min(grid.rows.saturating_sub(1));

            let value = match grid.value(row, col) {
                Some(v) => v,
                None => continue,
            };

            let color = scale.color_for(value);
            let idx = (py * width + px) * 4;
            data[idx] = color.r;
            data[idx + 1] = color.g;
            data[idx + 2] = color.b;
            data[idx + 3] = color.a;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::Colormap;
    use map_common::GeoExtent;

    fn white_pixmap(w: u32, h: u32) -> Pixmap {
        let mut pixmap = Pixmap::new(w, h).unwrap();
        pixmap.fill(tiny_skia::Color::WHITE);
        pixmap
    }

    #[test]
    fn test_transform_round_trip() {
        let extent = GeoExtent::new(0.0, 4.0, 0.0, 4.0);
        let view = GeoTransform::new(extent, 400, 400);

        let (x, y) = view.to_pixel(0.0, 4.0);
        assert_eq!((x, y), (0.0, 0.0));
        let (x, y) = view.to_pixel(4.0, 0.0);
        assert_eq!((x, y), (400.0, 400.0));

        let (lon, lat) = view.to_geo(200.0, 100.0);
        assert!((lon - 2.0).abs() < 1e-9);
        assert!((lat - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_draw_grid_under_and_ramp() {
        // 2x2 grid: top row zero (under color), bottom row at vmax
        let grid = map_common::PopulationGrid::new(
            2,
            2,
            0.0,
            0.0,
            1.0,
            vec![0.0, 0.0, 10.0, 10.0],
        )
        .unwrap();

        let scale = ColorScale::new(Colormap::by_name("Purples").unwrap(), 0.0, 10.0);
        let view = GeoTransform::new(grid.extent(), 4, 4);
        let mut pixmap = white_pixmap(4, 4);

        draw_grid(&mut pixmap, &grid, &view, &scale);
        let data = pixmap.data();

        // Top-left pixel: zero cell, under-range gray
        assert_eq!(&data[0..3], &[204, 204, 204]);
        // Bottom-left pixel: top of the ramp
        let bottom = (3 * 4) * 4;
        assert_eq!(&data[bottom..bottom + 3], &[63, 0, 125]);
    }

    #[test]
    fn test_draw_grid_leaves_outside_pixels() {
        let grid =
            map_common::PopulationGrid::new(1, 1, 1.0, 1.0, 1.0, vec![5.0]).unwrap();
        // View twice as large as the grid extent
        let view = GeoTransform::new(GeoExtent::new(0.0, 4.0, 0.0, 4.0), 8, 8);
        let scale = ColorScale::new(Colormap::by_name("Purples").unwrap(), 0.0, 10.0);

        let mut pixmap = white_pixmap(8, 8);
        draw_grid(&mut pixmap, &grid, &view, &scale);

        // Corner pixel is outside the grid extent, stays white
        assert_eq!(&pixmap.data()[0..3], &[255, 255, 255]);
    }
}
