//! Population map command line tool.
//!
//! Loads a preprocessed per-country population grid and renders it as a
//! choropleth PNG with an optional basemap and colorbar.

use anyhow::Result;
use clap::Parser;
use geo_features::GeoJsonFeatures;
use grid_store::JsonGridStore;
use map_plot::{BasemapLayer, MapRenderer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "plot-cli")]
#[command(about = "Render per-country population grids as PNG maps")]
struct Args {
    /// Numeric country identifier
    country_id: u32,

    /// Directory holding preprocessed per-country grid files
    #[arg(short, long, env = "POPULATION_DATA_DIR", default_value = "./data")]
    data_dir: String,

    /// Output directory for rendered maps
    #[arg(short, long, default_value = "./plots")]
    plot_folder: String,

    /// Color ramp name
    #[arg(short, long, default_value = "Purples")]
    colormap: String,

    /// Title drawn above the map
    #[arg(short, long, default_value = "")]
    title: String,

    /// GeoJSON file with administrative borders
    #[arg(long)]
    borders: Option<String>,

    /// GeoJSON file with coastlines
    #[arg(long)]
    coastlines: Option<String>,

    /// Open the saved map in the platform image viewer
    #[arg(long)]
    show: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!(country_id = args.country_id, data_dir = %args.data_dir, "Rendering population map");

    let store = JsonGridStore::new(&args.data_dir);
    let mut renderer = MapRenderer::new(&store, args.country_id, args.plot_folder.as_str())?;
    renderer.set_colormap(&args.colormap)?;

    if let Some(path) = &args.borders {
        renderer.add_layer(BasemapLayer::borders(Box::new(GeoJsonFeatures::from_file(
            path,
        )?)));
    }
    if let Some(path) = &args.coastlines {
        renderer.add_layer(BasemapLayer::coastlines(Box::new(
            GeoJsonFeatures::from_file(path)?,
        )));
    }

    let output = renderer.render(&args.title, args.show)?;
    info!(path = %output.display(), "Map written");

    Ok(())
}
