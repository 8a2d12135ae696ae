//! Configuration loading and management for the roster engine.
//!
//! This module provides functionality to load the engine configuration from
//! YAML files: legal-hour limits and the shift-system catalog.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/rosters").unwrap();
//! println!("Configured systems: {}", config.catalog().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineLimits, ShiftSystemCatalog};
