//! Configuration types for roster generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the in-memory
//! shift-system catalog.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftSystem;
use serde::Deserialize;

/// Legal-hour limits and cost rates, loaded from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineLimits {
    /// Legal monthly working-hours threshold (e.g. 195).
    pub monthly_hours_threshold: Decimal,
    /// Legal yearly working-hours threshold (e.g. 2340).
    pub yearly_hours_threshold: Decimal,
    /// Hourly cost rate applied to required substitute hours.
    pub substitute_hourly_cost: Decimal,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            monthly_hours_threshold: Decimal::from(195),
            yearly_hours_threshold: Decimal::from(2340),
            substitute_hourly_cost: Decimal::from(150),
        }
    }
}

/// The set of configured shift systems, keyed by id.
///
/// Shift systems are configured once per project by an external concern;
/// the engine only looks them up. A lookup miss is a hard error —
/// generation never falls back to a guessed system.
///
/// # Example
///
/// ```
/// use roster_engine::config::ShiftSystemCatalog;
///
/// let catalog = ShiftSystemCatalog::with_defaults();
/// assert!(catalog.get("12h_2shift").is_ok());
/// assert!(catalog.get("nonexistent").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftSystemCatalog {
    systems: HashMap<String, ShiftSystem>,
}

impl ShiftSystemCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the three canonical systems under the ids
    /// `12h_2shift`, `8h_3shift`, and `12h_36h`.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for system in [
            ShiftSystem::two_shift_twelve_hour("12h_2shift"),
            ShiftSystem::three_shift_eight_hour("8h_3shift", 1),
            ShiftSystem::twelve_on_thirty_six_off("12h_36h"),
        ] {
            // Canonical systems always satisfy their own invariants.
            let _ = catalog.insert(system);
        }
        catalog
    }

    /// Validates and inserts a shift system, replacing any previous entry
    /// with the same id.
    pub fn insert(&mut self, system: ShiftSystem) -> EngineResult<()> {
        system.validate()?;
        self.systems.insert(system.id.clone(), system);
        Ok(())
    }

    /// Looks up a shift system by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingShiftSystem`] when no system with the
    /// given id is configured.
    pub fn get(&self, id: &str) -> EngineResult<&ShiftSystem> {
        self.systems
            .get(id)
            .ok_or_else(|| EngineError::MissingShiftSystem { id: id.to_string() })
    }

    /// Returns the number of configured systems.
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Returns true when no systems are configured.
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}
