//! Map composition: renders a country's population grid to a PNG file.
//!
//! [`MapRenderer`] ties the workspace together: it loads a grid from an
//! injected [`grid_store::PopulationSource`], computes the geographic
//! extent, scales colors by the 90th percentile of positive cells, draws
//! basemap line work from injected [`geo_features::FeatureSource`]s, and
//! writes the result to `<plot_folder>/<country_id>.png`.

pub mod layout;
pub mod plot;
pub mod stats;

pub use layout::FigureLayout;
pub use plot::{BasemapLayer, MapRenderer};
pub use stats::positive_percentile;
