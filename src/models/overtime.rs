//! Monthly overtime summary model.
//!
//! Derived from a finished month's assignments, recomputed on demand, never
//! persisted by the engine itself.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-employee legal-overtime exposure for one month.
///
/// The summary is advisory: it estimates how much substitute labor is still
/// needed, but a separate approval step decides whether to commit one.
///
/// # Example
///
/// ```
/// use roster_engine::models::MonthlyOvertimeSummary;
/// use rust_decimal::Decimal;
///
/// let summary = MonthlyOvertimeSummary {
///     employee_id: "emp_001".to_string(),
///     worked_hours: Decimal::from(216),
///     monthly_threshold: Decimal::from(195),
///     excess_hours: Decimal::from(21),
///     required_substitute_hours: Decimal::from(21),
///     required_substitute_days: Decimal::new(18, 1), // 1.8 days
///     estimated_cost: Decimal::from(2100),
/// };
/// assert!(summary.excess_hours > Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyOvertimeSummary {
    /// The employee this summary belongs to.
    pub employee_id: String,
    /// Total worked hours across all on-duty assignments in the month.
    pub worked_hours: Decimal,
    /// The legal monthly threshold the hours were compared against.
    pub monthly_threshold: Decimal,
    /// Hours worked beyond the threshold (never negative).
    pub excess_hours: Decimal,
    /// Substitute hours needed to absorb the excess (1:1).
    pub required_substitute_hours: Decimal,
    /// Substitute days needed (excess / standard shift hours, one decimal).
    pub required_substitute_days: Decimal,
    /// Estimated cost of the required substitute labor.
    pub estimated_cost: Decimal,
}
