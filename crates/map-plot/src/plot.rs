//! The map renderer component.

use crate::layout::{FigureLayout, AXES_PADDING};
use crate::stats::positive_percentile;
use geo_features::FeatureSource;
use grid_store::PopulationSource;
use map_common::{GeoExtent, MapError, MapResult, PopulationGrid};
use renderer::colorbar::{draw_colorbar, ColorbarConfig};
use renderer::glyphs;
use renderer::lines::{stroke_frame, stroke_paths, LineStyle, PixelPath};
use renderer::raster::draw_grid;
use renderer::{Color, ColorScale, Colormap, GeoTransform};
use std::path::{Path, PathBuf};
use std::process::Command;
use tiny_skia::{Pixmap, PixmapPaint, Transform};
use tracing::{debug, info, warn};

/// Percentile of positive cells used for the color scale upper bound.
const SCALE_PERCENTILE: f64 = 90.0;

/// Default ramp applied at construction.
const DEFAULT_COLORMAP: &str = "Purples";

const COLORBAR_LABEL: &str = "Population per pixel";
const COLORBAR_TICKS: usize = 5;

/// One basemap line layer: a feature source plus its stroke style.
///
/// Layers draw in insertion order above the raster, so coarser lines
/// (coastlines) go after finer ones (admin borders).
pub struct BasemapLayer {
    source: Box<dyn FeatureSource>,
    style: LineStyle,
}

impl std::fmt::Debug for BasemapLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasemapLayer")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl BasemapLayer {
    pub fn new(source: Box<dyn FeatureSource>, style: LineStyle) -> Self {
        Self { source, style }
    }

    /// Administrative borders: thin black lines.
    pub fn borders(source: Box<dyn FeatureSource>) -> Self {
        Self::new(source, LineStyle::new(Color::BLACK, 0.5))
    }

    /// Coastlines: heavier black lines.
    pub fn coastlines(source: Box<dyn FeatureSource>) -> Self {
        Self::new(source, LineStyle::new(Color::BLACK, 1.5))
    }
}

/// Renders a country's population grid as a choropleth map.
///
/// The grid is loaded once at construction from an injected
/// [`PopulationSource`]; the extent is derived from it and never mutated.
/// Each [`render`](Self::render) call recomputes the color bounds from
/// the data and writes one PNG.
#[derive(Debug)]
pub struct MapRenderer {
    country_id: u32,
    grid: PopulationGrid,
    extent: GeoExtent,
    colormap: Colormap,
    layers: Vec<BasemapLayer>,
    plot_folder: String,
    output_path: PathBuf,
}

impl MapRenderer {
    /// Load the grid for `country_id` and prepare the render target.
    ///
    /// The plot folder gets a trailing separator if missing and is
    /// created (single level) when absent. Loader failures propagate
    /// untouched.
    pub fn new(
        source: &dyn PopulationSource,
        country_id: u32,
        plot_folder: impl Into<String>,
    ) -> MapResult<Self> {
        let mut plot_folder = plot_folder.into();
        if !plot_folder.ends_with('/') {
            plot_folder.push('/');
        }

        if !Path::new(&plot_folder).exists() {
            std::fs::create_dir(&plot_folder)?;
        }

        let grid = source.load(country_id)?;
        let extent = grid.extent();
        let output_path = PathBuf::from(format!("{}{}.png", plot_folder, country_id));

        debug!(
            country_id,
            rows = grid.rows,
            cols = grid.cols,
            ?extent,
            "prepared map renderer"
        );

        Ok(Self {
            country_id,
            grid,
            extent,
            colormap: Colormap::by_name(DEFAULT_COLORMAP)?,
            layers: Vec::new(),
            plot_folder,
            output_path,
        })
    }

    /// Replace the active color ramp.
    ///
    /// Unknown names fail with `MapError::UnknownColormap`; the grid and
    /// extent are untouched either way. The under-range color comes with
    /// the new ramp.
    pub fn set_colormap(&mut self, name: &str) -> MapResult<()> {
        self.colormap = Colormap::by_name(name)?;
        Ok(())
    }

    /// Append a basemap line layer.
    pub fn add_layer(&mut self, layer: BasemapLayer) {
        self.layers.push(layer);
    }

    /// Builder-style variant of [`add_layer`](Self::add_layer).
    pub fn with_basemap(mut self, layers: Vec<BasemapLayer>) -> Self {
        self.layers.extend(layers);
        self
    }

    pub fn country_id(&self) -> u32 {
        self.country_id
    }

    pub fn extent(&self) -> &GeoExtent {
        &self.extent
    }

    pub fn grid(&self) -> &PopulationGrid {
        &self.grid
    }

    pub fn colormap_name(&self) -> &str {
        self.colormap.name()
    }

    pub fn plot_folder(&self) -> &str {
        &self.plot_folder
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Render the map and write it to the render target.
    ///
    /// The color scale upper bound is the 90th percentile of strictly
    /// positive cells, 0 when there are none (the map then renders
    /// entirely in the under-range color). With `show`, the saved file
    /// is additionally opened in the platform image viewer.
    ///
    /// Returns the output path.
    pub fn render(&self, title: &str, show: bool) -> MapResult<PathBuf> {
        let vmax = positive_percentile(&self.grid.values, SCALE_PERCENTILE);
        let scale = ColorScale::new(self.colormap.clone(), 0.0, vmax);

        let layout = FigureLayout::for_extent(&self.extent);
        let padded = self.extent.padded(AXES_PADDING);

        // Map axes: raster, basemap lines, frame. Drawing into a
        // dedicated pixmap clips line work at the axes edge.
        let map_w = layout.map.w.round() as u32;
        let map_h = layout.map.h.round() as u32;
        let mut map_pixmap = Pixmap::new(map_w.max(1), map_h.max(1))
            .ok_or_else(|| MapError::render("map axes size out of range"))?;
        map_pixmap.fill(tiny_skia::Color::WHITE);

        let view = GeoTransform::new(padded, map_pixmap.width(), map_pixmap.height());
        draw_grid(&mut map_pixmap, &self.grid, &view, &scale);

        for layer in &self.layers {
            let paths = project_layer(layer.source.as_ref(), &view)?;
            stroke_paths(&mut map_pixmap, &paths, &layer.style);
        }
        stroke_frame(&mut map_pixmap, &LineStyle::new(Color::BLACK, 1.0));

        // Figure: white background, map axes, colorbar, title
        let mut figure = Pixmap::new(layout.width, layout.height)
            .ok_or_else(|| MapError::render("figure size out of range"))?;
        figure.fill(tiny_skia::Color::WHITE);
        figure.draw_pixmap(
            layout.map.x.round() as i32,
            layout.map.y.round() as i32,
            map_pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );

        draw_colorbar(
            &mut figure,
            &scale,
            &ColorbarConfig {
                x: layout.colorbar.x,
                y: layout.colorbar.y,
                width: layout.colorbar.w,
                height: layout.colorbar.h,
                ticks: COLORBAR_TICKS,
                label: COLORBAR_LABEL.to_string(),
                font_size: 9.0,
            },
        );

        if !title.is_empty() {
            glyphs::draw_text(
                &mut figure,
                layout.map.x + layout.map.w / 2.0,
                layout.map.y / 2.0,
                0.0,
                title,
                16.0,
                Color::BLACK,
            );
        }

        let png = renderer::png::encode_auto(
            figure.data(),
            figure.width() as usize,
            figure.height() as usize,
        )?;
        std::fs::write(&self.output_path, png)?;

        if show {
            show_file(&self.output_path);
        }

        info!(
            country_id = self.country_id,
            path = %self.output_path.display(),
            vmax,
            colormap = self.colormap.name(),
            "saved population map"
        );

        Ok(self.output_path.clone())
    }
}

/// Project a layer's polylines into map pixel space.
fn project_layer(source: &dyn FeatureSource, view: &GeoTransform) -> MapResult<Vec<PixelPath>> {
    let polylines = source.polylines()?;
    Ok(polylines
        .into_iter()
        .map(|line| PixelPath {
            points: line
                .points
                .iter()
                .map(|&(lon, lat)| view.to_pixel(lon, lat))
                .collect(),
            closed: line.closed,
        })
        .collect())
}

/// Open the saved image in the platform viewer. Best effort: a failure to
/// spawn the viewer is logged, never an error, and the file is already on
/// disk at this point.
fn show_file(path: &Path) {
    #[cfg(target_os = "macos")]
    let viewer = "open";
    #[cfg(not(target_os = "macos"))]
    let viewer = "xdg-open";

    if let Err(e) = Command::new(viewer).arg(path).spawn() {
        warn!(path = %path.display(), error = %e, "could not open image viewer");
    }
}
