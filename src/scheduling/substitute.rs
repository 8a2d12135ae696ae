//! Substitute ("joker") assignment.
//!
//! This module fills the working slots displaced by leave with standby
//! personnel. The substitute takes over the original employee's exact shift
//! type and time window — never a shift of their own choosing — so coverage
//! parity is preserved, and both assignments stay linked for reporting.
//!
//! A slot that cannot be covered (no standby available, or the standby is
//! already booked that day) is left to the coverage validator to surface;
//! it is never silently dropped and never aborts the run.

use tracing::{debug, warn};

use crate::error::EngineResult;
use crate::models::{Assignment, SubstituteIdentity};
use crate::stores::SubstituteStore;

use super::leave::LeaveHit;

/// Covers leave-displaced working slots with standby personnel.
///
/// For each hit that needs cover, in roster order:
/// 1. an existing substitute binding for the same (original employee, date)
///    is reused as-is;
/// 2. otherwise the project's active standby is used, falling back to
///    upserting the supplied identity (keyed by national id, idempotent);
/// 3. the substitute's assignment clones the original's shift and window.
///
/// The roster is mutated in place; the one-assignment-per-(employee, date)
/// invariant is preserved by refusing to double-book a standby.
///
/// # Errors
///
/// Propagates substitute-store failures; unresolvable slots are not errors.
pub fn assign_substitutes(
    project_id: &str,
    assignments: &mut Vec<Assignment>,
    hits: &[LeaveHit],
    standby: Option<&SubstituteIdentity>,
    store: &dyn SubstituteStore,
) -> EngineResult<()> {
    for hit in hits.iter().filter(|h| h.needs_cover()) {
        let original_id = &hit.draft.employee_id;
        let date = hit.draft.date;

        let already_bound = assignments.iter().any(|a| {
            a.is_substitute
                && a.date == date
                && a.original_employee_id.as_deref() == Some(original_id)
        });
        if already_bound {
            debug!(
                employee_id = %original_id,
                date = %date,
                "Substitute binding already present, reusing"
            );
            continue;
        }

        let substitute = match store.find_active_substitute(project_id)? {
            Some(found) => Some(found),
            None => match standby {
                Some(identity) => Some(store.upsert_substitute(identity)?),
                None => None,
            },
        };

        let Some(substitute) = substitute else {
            warn!(
                project_id = %project_id,
                employee_id = %original_id,
                date = %date,
                "No standby available, slot left uncovered"
            );
            continue;
        };

        let booked = assignments
            .iter()
            .any(|a| a.employee_id == substitute.id && a.date == date);
        if booked {
            warn!(
                substitute_id = %substitute.id,
                date = %date,
                "Standby already booked on this date, slot left uncovered"
            );
            continue;
        }

        assignments.push(hit.draft.covered_by(&substitute.id));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DutyStatus, Employee, LeaveRecord, LeaveType, ShiftSystem, ShiftType, SubstituteEmployee,
    };
    use crate::scheduling::leave::apply_leave;
    use crate::scheduling::rotation::plan_month;
    use crate::stores::{InMemoryLeaveStore, InMemorySubstituteStore};
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn roster(n: usize) -> Vec<Employee> {
        (0..n)
            .map(|i| Employee {
                id: format!("emp_{:03}", i),
                display_name: format!("Guard {}", i),
                active: true,
                project_id: "site_a".to_string(),
            })
            .collect()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn standby_pool_store() -> InMemorySubstituteStore {
        let store = InMemorySubstituteStore::new();
        store
            .add_to_pool(
                "site_a",
                SubstituteEmployee {
                    id: "sub_001".to_string(),
                    name: "C. Kaya".to_string(),
                    national_id: "12345678901".to_string(),
                    company: None,
                    phone: None,
                    active: true,
                },
            )
            .unwrap();
        store
    }

    fn leave_on(employee: &str, day: &str) -> InMemoryLeaveStore {
        let store = InMemoryLeaveStore::new();
        store
            .record(LeaveRecord::new(employee, date(day), LeaveType::Annual))
            .unwrap();
        store
    }

    /// SA-001: substitute takes the original's shift and window
    #[test]
    fn test_substitute_copies_original_shift() {
        let system = ShiftSystem::two_shift_twelve_hour("12h");
        let draft = plan_month(&system, &roster(3), 2025, 6).unwrap();
        let (mut assignments, hits) = apply_leave(draft, &leave_on("emp_000", "2025-06-01")).unwrap();

        let store = standby_pool_store();
        assign_substitutes("site_a", &mut assignments, &hits, None, &store).unwrap();

        let covered = assignments
            .iter()
            .find(|a| a.is_substitute && a.date == date("2025-06-01"))
            .unwrap();
        assert_eq!(covered.employee_id, "sub_001");
        assert_eq!(covered.duty, DutyStatus::OnDuty(ShiftType::Day));
        assert_eq!(covered.original_employee_id.as_deref(), Some("emp_000"));
        assert_eq!(covered.original_shift_type, Some(ShiftType::Day));
        assert_eq!(covered.start_time, hits[0].draft.start_time);
        assert_eq!(covered.end_time, hits[0].draft.end_time);
    }

    /// SA-002: no standby leaves the slot uncovered without failing
    #[test]
    fn test_missing_standby_degrades_to_gap() {
        let system = ShiftSystem::two_shift_twelve_hour("12h");
        let draft = plan_month(&system, &roster(3), 2025, 6).unwrap();
        let (mut assignments, hits) = apply_leave(draft, &leave_on("emp_000", "2025-06-01")).unwrap();
        let count_before = assignments.len();

        let store = InMemorySubstituteStore::new();
        assign_substitutes("site_a", &mut assignments, &hits, None, &store).unwrap();

        assert_eq!(assignments.len(), count_before);
        assert!(!assignments.iter().any(|a| a.is_substitute));
    }

    /// SA-003: a supplied identity is upserted and used
    #[test]
    fn test_supplied_identity_upserted_once() {
        let system = ShiftSystem::two_shift_twelve_hour("12h");
        let draft = plan_month(&system, &roster(3), 2025, 6).unwrap();

        let leave_store = InMemoryLeaveStore::new();
        for day in ["2025-06-01", "2025-06-02"] {
            leave_store
                .record(LeaveRecord::new("emp_000", date(day), LeaveType::Annual))
                .unwrap();
        }
        let (mut assignments, hits) = apply_leave(draft, &leave_store).unwrap();

        let store = InMemorySubstituteStore::new();
        let identity = SubstituteIdentity {
            national_id: "98765432109".to_string(),
            name: "D. Celik".to_string(),
            company: None,
            phone: None,
        };
        assign_substitutes("site_a", &mut assignments, &hits, Some(&identity), &store).unwrap();

        let substitute_ids: HashSet<_> = assignments
            .iter()
            .filter(|a| a.is_substitute)
            .map(|a| a.employee_id.clone())
            .collect();
        // Same identity both days: one record, two assignments.
        assert_eq!(substitute_ids.len(), 1);
        assert!(substitute_ids.contains("sub_98765432109"));
        assert_eq!(assignments.iter().filter(|a| a.is_substitute).count(), 2);
    }

    /// SA-004: a standby is never double-booked on one date
    #[test]
    fn test_standby_not_double_booked() {
        let system = ShiftSystem::two_shift_twelve_hour("12h");
        let draft = plan_month(&system, &roster(3), 2025, 6).unwrap();

        // Both the day-shift and night-shift employees are on leave on the
        // same date; a single standby can only cover one of them.
        let leave_store = InMemoryLeaveStore::new();
        for employee in ["emp_000", "emp_002"] {
            leave_store
                .record(LeaveRecord::new(
                    employee,
                    date("2025-06-01"),
                    LeaveType::Medical,
                ))
                .unwrap();
        }
        let (mut assignments, hits) = apply_leave(draft, &leave_store).unwrap();
        assert_eq!(hits.iter().filter(|h| h.needs_cover()).count(), 2);

        let store = standby_pool_store();
        assign_substitutes("site_a", &mut assignments, &hits, None, &store).unwrap();

        let substitute_assignments: Vec<_> = assignments
            .iter()
            .filter(|a| a.is_substitute && a.date == date("2025-06-01"))
            .collect();
        assert_eq!(substitute_assignments.len(), 1);
    }

    /// SA-005: an existing binding is reused, not duplicated
    #[test]
    fn test_existing_binding_reused() {
        let system = ShiftSystem::two_shift_twelve_hour("12h");
        let draft = plan_month(&system, &roster(3), 2025, 6).unwrap();
        let (mut assignments, hits) = apply_leave(draft, &leave_on("emp_000", "2025-06-01")).unwrap();

        let store = standby_pool_store();
        assign_substitutes("site_a", &mut assignments, &hits, None, &store).unwrap();
        let count_after_first = assignments.len();

        // Running the step again must not add a second cover assignment.
        assign_substitutes("site_a", &mut assignments, &hits, None, &store).unwrap();
        assert_eq!(assignments.len(), count_after_first);
    }

    /// SA-006: rest-day leave triggers no substitution
    #[test]
    fn test_rest_day_leave_not_substituted() {
        let system = ShiftSystem::two_shift_twelve_hour("12h");
        let draft = plan_month(&system, &roster(3), 2025, 6).unwrap();
        // emp_000 rests on day index 4.
        let (mut assignments, hits) = apply_leave(draft, &leave_on("emp_000", "2025-06-05")).unwrap();

        let store = standby_pool_store();
        assign_substitutes("site_a", &mut assignments, &hits, None, &store).unwrap();

        assert!(!assignments.iter().any(|a| a.is_substitute));
    }
}
