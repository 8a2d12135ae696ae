//! Collaborator store interfaces.
//!
//! Personnel, leave, substitute, and assignment records are owned by
//! external systems. The engine consumes them through these traits — the
//! only I/O in the generation pipeline — so the planning, validation, and
//! summary logic stays pure and unit-testable.
//!
//! Implementations must be `Send + Sync`; the engine shares them across
//! request handlers behind `Arc`s.

mod memory;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{Assignment, Employee, LeaveRecord, SubstituteEmployee, SubstituteIdentity};

pub use memory::{
    InMemoryAssignmentStore, InMemoryLeaveStore, InMemoryPersonnelStore, InMemorySubstituteStore,
};

/// Read access to the personnel roster of a project.
pub trait PersonnelStore: Send + Sync {
    /// Lists the active employees of a project in stable registration order.
    fn list_active_employees(&self, project_id: &str) -> EngineResult<Vec<Employee>>;
}

/// Read access to recorded leave.
pub trait LeaveStore: Send + Sync {
    /// Returns the leave record for an employee on an exact date, if any.
    fn get_leave(&self, employee_id: &str, date: NaiveDate) -> EngineResult<Option<LeaveRecord>>;
}

/// Access to the standby ("joker") personnel pool.
pub trait SubstituteStore: Send + Sync {
    /// Finds a standby employee currently marked active for the project.
    fn find_active_substitute(&self, project_id: &str)
    -> EngineResult<Option<SubstituteEmployee>>;

    /// Registers a standby person keyed by their national identity number.
    ///
    /// Upserting the same identity twice must return the same record —
    /// never a duplicate insert.
    fn upsert_substitute(&self, identity: &SubstituteIdentity)
    -> EngineResult<SubstituteEmployee>;
}

/// Write access to the generated assignments.
pub trait AssignmentStore: Send + Sync {
    /// Atomically replaces all assignments of a (project, year, month).
    ///
    /// A failed replace must leave the previously stored month untouched.
    fn replace_month(
        &self,
        project_id: &str,
        year: i32,
        month: u32,
        assignments: &[Assignment],
    ) -> EngineResult<()>;
}
