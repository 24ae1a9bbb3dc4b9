//! Data access for per-country population grids.
//!
//! The renderer never reads the dataset directly; it goes through the
//! [`PopulationSource`] trait so stores can be swapped out. Two stores are
//! provided:
//! - [`JsonGridStore`]: preprocessed per-country JSON files on disk
//! - [`MemoryGridStore`]: in-memory map, for tests and embedders

pub mod json_store;
pub mod memory;

pub use json_store::JsonGridStore;
pub use memory::MemoryGridStore;

use map_common::{MapResult, PopulationGrid};

/// A source of per-country population grids.
///
/// Given a numeric country identifier, return the preprocessed grid with
/// its geographic corner and cell size. Unknown identifiers fail with
/// `MapError::CountryNotFound`.
pub trait PopulationSource {
    fn load(&self, country_id: u32) -> MapResult<PopulationGrid>;
}
