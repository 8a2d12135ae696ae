//! Coverage validation.
//!
//! This module walks a finished month and confirms every shift slot the
//! active system requires has enough on-duty (non-leave, non-rest)
//! assignments. It reports shortfalls and never mutates the roster — the
//! caller decides whether to accept a roster with gaps or regenerate after
//! fixing personnel or leave data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Assignment, DutyStatus, ShiftSystem, ShiftType};

use super::rotation::month_days;

/// A day/shift slot with fewer on-duty assignments than required.
///
/// # Example
///
/// ```
/// use roster_engine::scheduling::CoverageIssue;
/// use roster_engine::models::ShiftType;
/// use chrono::NaiveDate;
///
/// let issue = CoverageIssue {
///     date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
///     shift: ShiftType::Night,
///     missing_count: 1,
/// };
/// assert_eq!(issue.shift, ShiftType::Night);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageIssue {
    /// The calendar date of the shortfall.
    pub date: NaiveDate,
    /// The under-staffed shift.
    pub shift: ShiftType,
    /// How many assignments short the slot is.
    pub missing_count: u32,
}

/// Checks every (day, shift) slot of the month against the system's
/// required headcount and returns the shortfalls, ordered by date then by
/// the system's shift order.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidMonth`] for an invalid
/// year/month pair.
pub fn validate(
    system: &ShiftSystem,
    assignments: &[Assignment],
    year: i32,
    month: u32,
) -> EngineResult<Vec<CoverageIssue>> {
    let days = month_days(year, month)?;
    let mut issues = Vec::new();

    for date in days {
        for def in &system.shifts {
            let on_duty = assignments
                .iter()
                .filter(|a| a.date == date && a.duty == DutyStatus::OnDuty(def.shift_type))
                .count() as u32;

            if on_duty < system.required_per_shift {
                issues.push(CoverageIssue {
                    date,
                    shift: def.shift_type,
                    missing_count: system.required_per_shift - on_duty,
                });
            }
        }
    }

    Ok(issues)
}
