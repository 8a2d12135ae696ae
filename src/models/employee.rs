//! Employee model.
//!
//! This module defines the Employee struct for representing the regular
//! shift-based personnel of a project roster. Employees are created and
//! mutated externally; the engine only reads them.

use serde::{Deserialize, Serialize};

/// Represents a regular employee on a project roster.
///
/// Employees are owned by the personnel collaborator; the engine treats
/// them as read-only input. Each employee belongs to exactly one project.
///
/// # Example
///
/// ```
/// use roster_engine::models::Employee;
///
/// let guard = Employee {
///     id: "emp_001".to_string(),
///     display_name: "A. Yilmaz".to_string(),
///     active: true,
///     project_id: "site_north".to_string(),
/// };
/// assert!(guard.active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Whether the employee is currently active on the roster.
    pub active: bool,
    /// The project (roster) this employee belongs to.
    pub project_id: String,
}
