//! Common types shared across the population-map workspace.

pub mod error;
pub mod extent;
pub mod grid;

pub use error::{MapError, MapResult};
pub use extent::GeoExtent;
pub use grid::PopulationGrid;
