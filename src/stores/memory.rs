//! In-memory store implementations.
//!
//! Reference implementations of the collaborator traits, used by the
//! shipped HTTP host and the test suite. Real deployments substitute their
//! own persistence-backed implementations.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{Assignment, Employee, LeaveRecord, SubstituteEmployee, SubstituteIdentity};

use super::{AssignmentStore, LeaveStore, PersonnelStore, SubstituteStore};

fn lock<'a, T>(store: &'static str, mutex: &'a Mutex<T>) -> EngineResult<MutexGuard<'a, T>> {
    mutex.lock().map_err(|_| EngineError::StoreFailure {
        store: store.to_string(),
        message: "store lock poisoned".to_string(),
    })
}

/// In-memory personnel store.
#[derive(Debug, Default)]
pub struct InMemoryPersonnelStore {
    employees: Mutex<Vec<Employee>>,
}

impl InMemoryPersonnelStore {
    /// Creates a store seeded with the given employees.
    ///
    /// Insertion order is the registration order reported to the engine.
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees: Mutex::new(employees),
        }
    }

    /// Adds an employee to the roster.
    pub fn add(&self, employee: Employee) -> EngineResult<()> {
        lock("personnel", &self.employees)?.push(employee);
        Ok(())
    }
}

impl PersonnelStore for InMemoryPersonnelStore {
    fn list_active_employees(&self, project_id: &str) -> EngineResult<Vec<Employee>> {
        let employees = lock("personnel", &self.employees)?;
        Ok(employees
            .iter()
            .filter(|e| e.active && e.project_id == project_id)
            .cloned()
            .collect())
    }
}

/// In-memory leave store keyed by (employee, date).
#[derive(Debug, Default)]
pub struct InMemoryLeaveStore {
    records: Mutex<HashMap<(String, NaiveDate), LeaveRecord>>,
}

impl InMemoryLeaveStore {
    /// Creates an empty leave store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a leave. Later records for the same (employee, date) win.
    pub fn record(&self, leave: LeaveRecord) -> EngineResult<()> {
        let key = (leave.employee_id.clone(), leave.date);
        lock("leave", &self.records)?.insert(key, leave);
        Ok(())
    }
}

impl LeaveStore for InMemoryLeaveStore {
    fn get_leave(&self, employee_id: &str, date: NaiveDate) -> EngineResult<Option<LeaveRecord>> {
        let records = lock("leave", &self.records)?;
        Ok(records.get(&(employee_id.to_string(), date)).cloned())
    }
}

#[derive(Debug, Default)]
struct SubstituteRegistry {
    by_national_id: HashMap<String, SubstituteEmployee>,
    // project id -> national ids available to that project, in seeding order
    pools: HashMap<String, Vec<String>>,
}

/// In-memory substitute store with an idempotent national-id upsert.
#[derive(Debug, Default)]
pub struct InMemorySubstituteStore {
    registry: Mutex<SubstituteRegistry>,
}

impl InMemorySubstituteStore {
    /// Creates an empty substitute store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a substitute and adds them to a project's standby pool.
    pub fn add_to_pool(&self, project_id: &str, substitute: SubstituteEmployee) -> EngineResult<()> {
        let mut registry = lock("substitute", &self.registry)?;
        registry
            .pools
            .entry(project_id.to_string())
            .or_default()
            .push(substitute.national_id.clone());
        registry
            .by_national_id
            .insert(substitute.national_id.clone(), substitute);
        Ok(())
    }
}

impl SubstituteStore for InMemorySubstituteStore {
    fn find_active_substitute(
        &self,
        project_id: &str,
    ) -> EngineResult<Option<SubstituteEmployee>> {
        let registry = lock("substitute", &self.registry)?;
        let Some(pool) = registry.pools.get(project_id) else {
            return Ok(None);
        };
        Ok(pool
            .iter()
            .filter_map(|national_id| registry.by_national_id.get(national_id))
            .find(|s| s.active)
            .cloned())
    }

    fn upsert_substitute(
        &self,
        identity: &SubstituteIdentity,
    ) -> EngineResult<SubstituteEmployee> {
        let mut registry = lock("substitute", &self.registry)?;
        if let Some(existing) = registry.by_national_id.get(&identity.national_id) {
            return Ok(existing.clone());
        }

        // Deterministic id so regeneration reuses the same record.
        let substitute = SubstituteEmployee {
            id: format!("sub_{}", identity.national_id),
            name: identity.name.clone(),
            national_id: identity.national_id.clone(),
            company: identity.company.clone(),
            phone: identity.phone.clone(),
            active: true,
        };
        registry
            .by_national_id
            .insert(identity.national_id.clone(), substitute.clone());
        Ok(substitute)
    }
}

/// In-memory assignment store with an atomic whole-month replace.
#[derive(Debug, Default)]
pub struct InMemoryAssignmentStore {
    months: Mutex<HashMap<(String, i32, u32), Vec<Assignment>>>,
}

impl InMemoryAssignmentStore {
    /// Creates an empty assignment store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored assignments for a month, if any were generated.
    pub fn get_month(
        &self,
        project_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<Option<Vec<Assignment>>> {
        let months = lock("assignment", &self.months)?;
        Ok(months.get(&(project_id.to_string(), year, month)).cloned())
    }
}

impl AssignmentStore for InMemoryAssignmentStore {
    fn replace_month(
        &self,
        project_id: &str,
        year: i32,
        month: u32,
        assignments: &[Assignment],
    ) -> EngineResult<()> {
        let mut months = lock("assignment", &self.months)?;
        months.insert((project_id.to_string(), year, month), assignments.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, project: &str, active: bool) -> Employee {
        Employee {
            id: id.to_string(),
            display_name: id.to_uppercase(),
            active,
            project_id: project.to_string(),
        }
    }

    #[test]
    fn test_personnel_store_filters_inactive_and_other_projects() {
        let store = InMemoryPersonnelStore::new(vec![
            employee("emp_001", "site_a", true),
            employee("emp_002", "site_a", false),
            employee("emp_003", "site_b", true),
        ]);

        let listed = store.list_active_employees("site_a").unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "emp_001");
    }

    #[test]
    fn test_leave_store_exact_date_lookup() {
        use crate::models::LeaveType;

        let store = InMemoryLeaveStore::new();
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        store
            .record(LeaveRecord::new("emp_001", date, LeaveType::Annual))
            .unwrap();

        assert!(store.get_leave("emp_001", date).unwrap().is_some());
        let other = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
        assert!(store.get_leave("emp_001", other).unwrap().is_none());
        assert!(store.get_leave("emp_002", date).unwrap().is_none());
    }

    #[test]
    fn test_substitute_upsert_is_idempotent() {
        let store = InMemorySubstituteStore::new();
        let identity = SubstituteIdentity {
            national_id: "12345678901".to_string(),
            name: "C. Kaya".to_string(),
            company: None,
            phone: None,
        };

        let first = store.upsert_substitute(&identity).unwrap();
        let second = store.upsert_substitute(&identity).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.id, "sub_12345678901");
    }

    #[test]
    fn test_find_active_substitute_skips_inactive() {
        let store = InMemorySubstituteStore::new();
        store
            .add_to_pool(
                "site_a",
                SubstituteEmployee {
                    id: "sub_1".to_string(),
                    name: "Inactive".to_string(),
                    national_id: "111".to_string(),
                    company: None,
                    phone: None,
                    active: false,
                },
            )
            .unwrap();
        store
            .add_to_pool(
                "site_a",
                SubstituteEmployee {
                    id: "sub_2".to_string(),
                    name: "Active".to_string(),
                    national_id: "222".to_string(),
                    company: None,
                    phone: None,
                    active: true,
                },
            )
            .unwrap();

        let found = store.find_active_substitute("site_a").unwrap().unwrap();
        assert_eq!(found.id, "sub_2");
        assert!(store.find_active_substitute("site_b").unwrap().is_none());
    }

    #[test]
    fn test_assignment_store_replace_is_full_swap() {
        let store = InMemoryAssignmentStore::new();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let first = vec![Assignment::rest("emp_001", date)];
        let second = vec![
            Assignment::rest("emp_001", date),
            Assignment::rest("emp_002", date),
        ];

        store.replace_month("site_a", 2025, 6, &first).unwrap();
        store.replace_month("site_a", 2025, 6, &second).unwrap();

        let stored = store.get_month("site_a", 2025, 6).unwrap().unwrap();
        assert_eq!(stored.len(), 2);
        assert!(store.get_month("site_a", 2025, 7).unwrap().is_none());
    }
}
