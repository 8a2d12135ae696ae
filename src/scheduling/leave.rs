//! Leave resolution.
//!
//! This module overlays recorded leave on the draft roster: wherever the
//! leave store holds a record for an (employee, date), the draft assignment
//! is discarded and replaced by a leave assignment with a collapsed
//! interval. The replaced draft is kept as a [`LeaveHit`] so the substitute
//! step knows which slots still need cover.

use crate::error::EngineResult;
use crate::models::Assignment;
use crate::stores::LeaveStore;

/// A draft assignment that was displaced by a leave record.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveHit {
    /// The pre-leave draft assignment (shift type and time window intact).
    pub draft: Assignment,
}

impl LeaveHit {
    /// Whether the displaced slot was a working slot that needs covering.
    ///
    /// Leave on a scheduled rest day displaces nothing worth substituting.
    pub fn needs_cover(&self) -> bool {
        self.draft.duty.is_working()
    }
}

/// Replaces draft assignments with leave assignments where leave exists.
///
/// Each (employee, date) is looked up against the leave store exactly once.
/// The returned roster still holds exactly one assignment per
/// (employee, date); the returned hits preserve the displaced drafts.
///
/// # Errors
///
/// Propagates store failures; the run aborts and the previous month's
/// assignments stay untouched.
pub fn apply_leave(
    draft: Vec<Assignment>,
    leave_store: &dyn LeaveStore,
) -> EngineResult<(Vec<Assignment>, Vec<LeaveHit>)> {
    let mut resolved = Vec::with_capacity(draft.len());
    let mut hits = Vec::new();

    for assignment in draft {
        match leave_store.get_leave(&assignment.employee_id, assignment.date)? {
            Some(record) => {
                let replacement = Assignment::on_leave(
                    &assignment.employee_id,
                    assignment.date,
                    record.leave_type,
                    record.paid,
                    assignment.duty.shift_type(),
                );
                hits.push(LeaveHit { draft: assignment });
                resolved.push(replacement);
            }
            None => resolved.push(assignment),
        }
    }

    Ok((resolved, hits))
}
