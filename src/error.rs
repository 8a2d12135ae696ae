//! Error types for the roster generation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during roster generation.

use thiserror::Error;

/// The main error type for the roster generation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::MissingShiftSystem {
///     id: "12h_2shift".to_string(),
/// };
/// assert_eq!(error.to_string(), "Shift system not found: 12h_2shift");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No shift system with the requested id is configured.
    ///
    /// Generation never falls back to a guessed system.
    #[error("Shift system not found: {id}")]
    MissingShiftSystem {
        /// The shift system id that was not found.
        id: String,
    },

    /// A shift system definition violated a structural invariant.
    #[error("Invalid shift system '{id}': {message}")]
    InvalidShiftSystem {
        /// The id of the invalid shift system.
        id: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// The roster is smaller than the shift system's minimum headcount.
    #[error("Insufficient personnel: {required} required, {available} available")]
    InsufficientPersonnel {
        /// The minimum headcount demanded by the shift system.
        required: usize,
        /// The number of active employees actually available.
        available: usize,
    },

    /// The requested year/month pair does not denote a calendar month.
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month (1-12).
        month: u32,
    },

    /// A collaborator store call failed.
    ///
    /// Store failures abort the whole run; the previously generated month
    /// is left untouched.
    #[error("Store failure in {store}: {message}")]
    StoreFailure {
        /// The store that failed (e.g. "leave", "assignment").
        store: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_missing_shift_system_displays_id() {
        let error = EngineError::MissingShiftSystem {
            id: "8h_3shift".to_string(),
        };
        assert_eq!(error.to_string(), "Shift system not found: 8h_3shift");
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_shift_system_displays_id_and_message() {
        let error = EngineError::InvalidShiftSystem {
            id: "8h_3shift".to_string(),
            message: "definitions do not tile 24 hours".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift system '8h_3shift': definitions do not tile 24 hours"
        );
    }

    #[test]
    fn test_insufficient_personnel_displays_counts() {
        let error = EngineError::InsufficientPersonnel {
            required: 6,
            available: 4,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient personnel: 6 required, 4 available"
        );
    }

    #[test]
    fn test_invalid_month_displays_year_and_month() {
        let error = EngineError::InvalidMonth {
            year: 2025,
            month: 13,
        };
        assert_eq!(error.to_string(), "Invalid month: 2025-13");
    }

    #[test]
    fn test_store_failure_displays_store_and_message() {
        let error = EngineError::StoreFailure {
            store: "leave".to_string(),
            message: "connection reset".to_string(),
        };
        assert_eq!(error.to_string(), "Store failure in leave: connection reset");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_system() -> EngineResult<()> {
            Err(EngineError::MissingShiftSystem {
                id: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_system()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
