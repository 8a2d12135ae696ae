//! Overtime calculation.
//!
//! This module sums each employee's worked hours over the finished month,
//! compares them against the legal monthly threshold, and derives the
//! excess hours, the substitute labor still needed to absorb them, and a
//! cost estimate. The summary is advisory: it creates no assignments; a
//! separate approval step decides whether to commit a substitute.

use rust_decimal::Decimal;

use crate::config::EngineLimits;
use crate::models::{Assignment, Employee, MonthlyOvertimeSummary, ShiftSystem};

/// Default legal monthly working-hours threshold.
pub const DEFAULT_MONTHLY_HOURS_THRESHOLD: Decimal = Decimal::from_parts(195, 0, 0, false, 0);

/// Splits worked hours into the excess beyond the threshold.
///
/// # Example
///
/// ```
/// use roster_engine::scheduling::excess_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     excess_hours(Decimal::from(216), Decimal::from(195)),
///     Decimal::from(21)
/// );
/// assert_eq!(
///     excess_hours(Decimal::from(180), Decimal::from(195)),
///     Decimal::ZERO
/// );
/// ```
pub fn excess_hours(worked: Decimal, threshold: Decimal) -> Decimal {
    if worked > threshold {
        worked - threshold
    } else {
        Decimal::ZERO
    }
}

/// Builds the per-employee overtime summary for a finished month.
///
/// Worked hours sum the durations of on-duty assignments only — leave and
/// rest days contribute nothing. Excess converts 1:1 into required
/// substitute hours; substitute days divide by the system's standard shift
/// duration (one decimal); the cost estimate multiplies excess by the
/// configured hourly substitute rate.
pub fn summarize(
    employees: &[Employee],
    assignments: &[Assignment],
    limits: &EngineLimits,
    system: &ShiftSystem,
) -> Vec<MonthlyOvertimeSummary> {
    let threshold = limits.monthly_hours_threshold;
    let shift_hours = system.standard_shift_hours();

    let mut ordered: Vec<&Employee> = employees.iter().collect();
    ordered.sort_by(|a, b| a.id.cmp(&b.id));

    ordered
        .iter()
        .map(|employee| {
            let worked: Decimal = assignments
                .iter()
                .filter(|a| a.employee_id == employee.id)
                .map(Assignment::worked_hours)
                .sum();

            let excess = excess_hours(worked, threshold);
            let required_substitute_days = if shift_hours > Decimal::ZERO {
                (excess / shift_hours).round_dp(1)
            } else {
                Decimal::ZERO
            };

            MonthlyOvertimeSummary {
                employee_id: employee.id.clone(),
                worked_hours: worked,
                monthly_threshold: threshold,
                excess_hours: excess,
                required_substitute_hours: excess,
                required_substitute_days,
                estimated_cost: (excess * limits.substitute_hourly_cost).round_dp(2),
            }
        })
        .collect()
}
