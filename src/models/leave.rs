//! Leave models.
//!
//! This module defines the closed leave-type enumeration and the
//! [`LeaveRecord`] read model. Leave records are immutable once created by
//! the leave-management collaborator; the engine only reads them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The closed set of leave-type codes.
///
/// Leave types are validated at the boundary; the engine never infers a
/// leave type from free-text notes.
///
/// # Example
///
/// ```
/// use roster_engine::models::LeaveType;
///
/// assert!(LeaveType::Annual.default_paid());
/// assert!(!LeaveType::Excuse.default_paid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Annual (yearly) leave.
    Annual,
    /// Excused absence.
    Excuse,
    /// Medical (sick) leave.
    Medical,
    /// Public-holiday leave.
    Holiday,
    /// Marriage leave.
    Marriage,
    /// Bereavement leave.
    Bereavement,
    /// Maternity/paternity leave.
    Parental,
    /// On duty outside the roster (counts as paid time).
    ExternalDuty,
    /// Weekly rest day granted as leave.
    WeeklyRest,
}

impl LeaveType {
    /// Whether this leave type is paid by default.
    ///
    /// The flag on a concrete [`LeaveRecord`] wins; this only provides the
    /// conventional default when a record is registered without one.
    pub fn default_paid(&self) -> bool {
        match self {
            LeaveType::Annual
            | LeaveType::Holiday
            | LeaveType::Marriage
            | LeaveType::Bereavement
            | LeaveType::Parental
            | LeaveType::ExternalDuty
            | LeaveType::WeeklyRest => true,
            LeaveType::Excuse | LeaveType::Medical => false,
        }
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            LeaveType::Annual => "annual",
            LeaveType::Excuse => "excuse",
            LeaveType::Medical => "medical",
            LeaveType::Holiday => "holiday",
            LeaveType::Marriage => "marriage",
            LeaveType::Bereavement => "bereavement",
            LeaveType::Parental => "parental",
            LeaveType::ExternalDuty => "external_duty",
            LeaveType::WeeklyRest => "weekly_rest",
        };
        write!(f, "{}", code)
    }
}

/// A recorded leave for an employee on a specific date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// The employee this leave belongs to.
    pub employee_id: String,
    /// The calendar date of the leave.
    pub date: NaiveDate,
    /// The leave-type code.
    pub leave_type: LeaveType,
    /// Whether the leave is paid.
    pub paid: bool,
}

impl LeaveRecord {
    /// Creates a leave record with the type's conventional paid flag.
    pub fn new(employee_id: impl Into<String>, date: NaiveDate, leave_type: LeaveType) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            leave_type,
            paid: leave_type.default_paid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_type_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveType::Annual).unwrap(),
            "\"annual\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveType::ExternalDuty).unwrap(),
            "\"external_duty\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveType::WeeklyRest).unwrap(),
            "\"weekly_rest\""
        );
    }

    #[test]
    fn test_leave_type_display_matches_wire_code() {
        for leave_type in [
            LeaveType::Annual,
            LeaveType::Excuse,
            LeaveType::Medical,
            LeaveType::Holiday,
            LeaveType::Marriage,
            LeaveType::Bereavement,
            LeaveType::Parental,
            LeaveType::ExternalDuty,
            LeaveType::WeeklyRest,
        ] {
            let wire = serde_json::to_string(&leave_type).unwrap();
            assert_eq!(wire, format!("\"{}\"", leave_type));
        }
    }

    #[test]
    fn test_default_paid_flags() {
        assert!(LeaveType::Annual.default_paid());
        assert!(LeaveType::ExternalDuty.default_paid());
        assert!(!LeaveType::Medical.default_paid());
        assert!(!LeaveType::Excuse.default_paid());
    }

    #[test]
    fn test_new_record_uses_default_paid() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

        let annual = LeaveRecord::new("emp_001", date, LeaveType::Annual);
        assert!(annual.paid);

        let medical = LeaveRecord::new("emp_001", date, LeaveType::Medical);
        assert!(!medical.paid);
    }

    #[test]
    fn test_leave_record_round_trip() {
        let record = LeaveRecord {
            employee_id: "emp_003".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            leave_type: LeaveType::Marriage,
            paid: true,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: LeaveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_unknown_leave_code_rejected() {
        let json = r#"{
            "employee_id": "emp_001",
            "date": "2025-06-10",
            "leave_type": "sabbatical",
            "paid": true
        }"#;

        assert!(serde_json::from_str::<LeaveRecord>(json).is_err());
    }
}
