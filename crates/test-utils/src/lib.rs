//! Shared test utilities for the population-map workspace.
//!
//! Provides synthetic population grids with predictable values and a
//! small GeoJSON fixture, used across the crates' test suites.
//!
//! Add to a crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;
