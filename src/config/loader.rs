//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! limits and the shift-system catalog from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftSystem;

use super::types::{EngineLimits, ShiftSystemCatalog};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides lookup of shift systems and legal-hour limits.
///
/// # Directory Structure
///
/// ```text
/// config/rosters/
/// ├── engine.yaml          # Legal thresholds and cost rates
/// └── systems/
///     ├── 12h_2shift.yaml  # One shift system per file
///     ├── 8h_3shift.yaml
///     └── 12h_36h.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rosters").unwrap();
///
/// let system = loader.get_shift_system("12h_2shift").unwrap();
/// println!("System: {} ({} shifts)", system.id, system.shifts.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    limits: EngineLimits,
    catalog: ShiftSystemCatalog,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/rosters")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any loaded shift system violates its structural invariants
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roster_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/rosters")?;
    /// # Ok::<(), roster_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let limits_path = path.join("engine.yaml");
        let limits = Self::load_yaml::<EngineLimits>(&limits_path)?;

        let systems_dir = path.join("systems");
        let catalog = Self::load_systems(&systems_dir)?;

        Ok(Self { limits, catalog })
    }

    /// Builds a loader from in-memory parts, bypassing the filesystem.
    pub fn from_parts(limits: EngineLimits, catalog: ShiftSystemCatalog) -> Self {
        Self { limits, catalog }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all shift-system files from the systems directory.
    fn load_systems(systems_dir: &Path) -> EngineResult<ShiftSystemCatalog> {
        let systems_dir_str = systems_dir.display().to_string();

        if !systems_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: systems_dir_str,
            });
        }

        let entries = fs::read_dir(systems_dir).map_err(|_| EngineError::ConfigNotFound {
            path: systems_dir_str.clone(),
        })?;

        let mut catalog = ShiftSystemCatalog::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: systems_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let system = Self::load_yaml::<ShiftSystem>(&path)?;
                catalog.insert(system)?;
            }
        }

        if catalog.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no system files found)", systems_dir_str),
            });
        }

        Ok(catalog)
    }

    /// Returns the legal-hour limits.
    pub fn limits(&self) -> &EngineLimits {
        &self.limits
    }

    /// Returns the shift-system catalog.
    pub fn catalog(&self) -> &ShiftSystemCatalog {
        &self.catalog
    }

    /// Gets a shift system by its id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingShiftSystem`] when the id is not
    /// configured — generation never guesses a fallback system.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roster_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/rosters")?;
    /// let system = loader.get_shift_system("8h_3shift")?;
    /// println!("Minimum headcount: {}", system.minimum_headcount());
    /// # Ok::<(), roster_engine::error::EngineError>(())
    /// ```
    pub fn get_shift_system(&self, id: &str) -> EngineResult<&ShiftSystem> {
        self.catalog.get(id)
    }
}
