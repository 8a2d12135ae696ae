//! Assignment model — the atomic output unit of roster generation.
//!
//! Exactly one [`Assignment`] exists per (employee, date) in a finished
//! roster. Violating that (double-booking or a missing day) is a
//! correctness bug, not a reportable condition.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::leave::LeaveType;
use super::shift_system::{ShiftDefinition, ShiftType};

/// What an employee is doing on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    /// Working the given shift.
    OnDuty(ShiftType),
    /// Scheduled rest day (cycle-driven, not calendar-driven).
    Rest,
    /// On recorded leave.
    OnLeave(LeaveType),
}

impl DutyStatus {
    /// True for working (non-rest, non-leave) assignments.
    pub fn is_working(&self) -> bool {
        matches!(self, DutyStatus::OnDuty(_))
    }

    /// The shift type, for on-duty assignments.
    pub fn shift_type(&self) -> Option<ShiftType> {
        match self {
            DutyStatus::OnDuty(shift) => Some(*shift),
            _ => None,
        }
    }
}

/// A single cell of the monthly roster.
///
/// # Example
///
/// ```
/// use roster_engine::models::{Assignment, ShiftSystem, ShiftType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let system = ShiftSystem::two_shift_twelve_hour("12h_2shift");
/// let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let assignment = Assignment::on_duty("emp_001", date, &system.shifts[0]);
///
/// assert_eq!(assignment.duty.shift_type(), Some(ShiftType::Day));
/// assert_eq!(assignment.worked_hours(), Decimal::from(12));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// The assigned employee (regular or substitute).
    pub employee_id: String,
    /// The calendar date of the assignment.
    pub date: NaiveDate,
    /// The duty status (shift, rest, or leave code).
    pub duty: DutyStatus,
    /// Start of the worked interval (equals `end_time` for rest/leave).
    pub start_time: NaiveDateTime,
    /// End of the worked interval.
    pub end_time: NaiveDateTime,
    /// Whether this assignment is covered by a standby employee.
    pub is_substitute: bool,
    /// For substitute assignments, the employee originally scheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_employee_id: Option<String>,
    /// The pre-leave shift type, kept on both the substitute assignment and
    /// the original employee's leave assignment for reporting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_shift_type: Option<ShiftType>,
    /// Whether the day counts as a holiday for the employee (unpaid leave).
    pub is_holiday: bool,
    /// Whether the date falls on a weekend (reporting only).
    pub is_weekend: bool,
    /// Free-form annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

impl Assignment {
    /// Creates an on-duty assignment from a shift definition.
    ///
    /// Shifts crossing midnight end on the following calendar day.
    pub fn on_duty(employee_id: impl Into<String>, date: NaiveDate, def: &ShiftDefinition) -> Self {
        let start_time = date.and_time(def.start_time);
        let end_date = if def.crosses_midnight() {
            date.checked_add_days(Days::new(1)).unwrap_or(date)
        } else {
            date
        };
        let end_time = end_date.and_time(def.end_time);

        Self {
            employee_id: employee_id.into(),
            date,
            duty: DutyStatus::OnDuty(def.shift_type),
            start_time,
            end_time,
            is_substitute: false,
            original_employee_id: None,
            original_shift_type: None,
            is_holiday: false,
            is_weekend: is_weekend(date),
            notes: None,
        }
    }

    /// Creates a rest-day assignment (zero-length interval).
    pub fn rest(employee_id: impl Into<String>, date: NaiveDate) -> Self {
        let midnight = date.and_time(NaiveTime::MIN);
        Self {
            employee_id: employee_id.into(),
            date,
            duty: DutyStatus::Rest,
            start_time: midnight,
            end_time: midnight,
            is_substitute: false,
            original_employee_id: None,
            original_shift_type: None,
            is_holiday: false,
            is_weekend: is_weekend(date),
            notes: None,
        }
    }

    /// Creates a leave assignment with a collapsed (zero-duration) interval.
    ///
    /// `is_holiday` is set for unpaid leave; paid absence codes keep
    /// worked-day semantics.
    pub fn on_leave(
        employee_id: impl Into<String>,
        date: NaiveDate,
        leave_type: LeaveType,
        paid: bool,
        original_shift_type: Option<ShiftType>,
    ) -> Self {
        let midnight = date.and_time(NaiveTime::MIN);
        Self {
            employee_id: employee_id.into(),
            date,
            duty: DutyStatus::OnLeave(leave_type),
            start_time: midnight,
            end_time: midnight,
            is_substitute: false,
            original_employee_id: None,
            original_shift_type,
            is_holiday: !paid,
            is_weekend: is_weekend(date),
            notes: None,
        }
    }

    /// Converts an assignment into its substitute-covered form: same date
    /// and time window, standby employee, linked back to the original.
    pub fn covered_by(&self, substitute_id: impl Into<String>) -> Self {
        Self {
            employee_id: substitute_id.into(),
            date: self.date,
            duty: self.duty,
            start_time: self.start_time,
            end_time: self.end_time,
            is_substitute: true,
            original_employee_id: Some(self.employee_id.clone()),
            original_shift_type: self.duty.shift_type(),
            is_holiday: false,
            is_weekend: self.is_weekend,
            notes: None,
        }
    }

    /// The worked hours of this assignment. Rest and leave days are zero.
    pub fn worked_hours(&self) -> Decimal {
        if !self.duty.is_working() {
            return Decimal::ZERO;
        }
        let minutes = (self.end_time - self.start_time).num_minutes();
        Decimal::from(minutes) / MINUTES_PER_HOUR
    }
}
