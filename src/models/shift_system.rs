//! Shift system models.
//!
//! This module defines the shift-system catalog entries: the closed set of
//! shift types, the per-shift definitions (time window, duration, break),
//! and the [`ShiftSystem`] aggregate with its structural invariants.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The closed set of shift type codes.
///
/// Every on-duty assignment carries exactly one of these; free-text shift
/// names are never used to drive scheduling decisions.
///
/// # Example
///
/// ```
/// use roster_engine::models::ShiftType;
///
/// assert_eq!(ShiftType::Night.to_string(), "night");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Day shift.
    Day,
    /// Evening shift (3-shift systems only).
    Evening,
    /// Night shift.
    Night,
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftType::Day => write!(f, "day"),
            ShiftType::Evening => write!(f, "evening"),
            ShiftType::Night => write!(f, "night"),
        }
    }
}

/// The enumerated shift-system types supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftSystemKind {
    /// Two 12-hour shifts per day (day/night).
    TwoShiftTwelveHour,
    /// Three 8-hour shifts per day (day/evening/night).
    ThreeShiftEightHour,
    /// 12 hours on duty followed by 36 hours off.
    TwelveOnThirtySixOff,
}

/// A single shift definition within a shift system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    /// Human-readable name of the shift (e.g. "Gündüz", "Day A").
    pub name: String,
    /// The shift type code this definition covers.
    pub shift_type: ShiftType,
    /// The wall-clock start time of the shift.
    pub start_time: NaiveTime,
    /// The wall-clock end time of the shift (may be before the start for
    /// shifts crossing midnight).
    pub end_time: NaiveTime,
    /// The shift duration in hours.
    pub duration_hours: Decimal,
    /// Whether this is a night shift.
    pub is_night: bool,
    /// Unpaid break duration in minutes.
    pub break_minutes: u32,
}

impl ShiftDefinition {
    /// Returns true when the shift's time window crosses midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time <= self.start_time
    }
}

/// A configured shift system: an ordered list of shift definitions plus the
/// per-shift headcount requirement.
///
/// Invariants (checked by [`ShiftSystem::validate`]):
/// - at least one shift definition;
/// - per definition, duration + break never exceeds 24 hours;
/// - a 3-shift system has exactly three definitions that tile 24 hours with
///   no gap or overlap.
///
/// # Example
///
/// ```
/// use roster_engine::models::ShiftSystem;
///
/// let system = ShiftSystem::two_shift_twelve_hour("12h_2shift");
/// assert!(system.validate().is_ok());
/// assert_eq!(system.shifts.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftSystem {
    /// Unique identifier of the shift system.
    pub id: String,
    /// The system type tag.
    pub kind: ShiftSystemKind,
    /// Ordered shift definitions (the order defines the day/evening/night
    /// sequence for rotation).
    pub shifts: Vec<ShiftDefinition>,
    /// Required headcount per shift slot per day.
    pub required_per_shift: u32,
}

const HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);
const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

impl ShiftSystem {
    /// Checks the structural invariants of this shift system.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShiftSystem`] when a definition's
    /// duration plus break exceeds 24 hours, when no definitions exist, or
    /// when a 3-shift system's definitions fail to tile 24 hours.
    pub fn validate(&self) -> EngineResult<()> {
        if self.shifts.is_empty() {
            return Err(EngineError::InvalidShiftSystem {
                id: self.id.clone(),
                message: "no shift definitions".to_string(),
            });
        }

        for def in &self.shifts {
            let break_hours = Decimal::from(def.break_minutes) / MINUTES_PER_HOUR;
            if def.duration_hours + break_hours > HOURS_PER_DAY {
                return Err(EngineError::InvalidShiftSystem {
                    id: self.id.clone(),
                    message: format!(
                        "shift '{}' duration plus break exceeds 24 hours",
                        def.name
                    ),
                });
            }
        }

        if self.kind == ShiftSystemKind::ThreeShiftEightHour {
            self.validate_tiling()?;
        }

        Ok(())
    }

    /// A 3-shift system must cover the full day: each definition ends
    /// exactly where the next one starts, wrapping at the end of the list.
    fn validate_tiling(&self) -> EngineResult<()> {
        if self.shifts.len() != 3 {
            return Err(EngineError::InvalidShiftSystem {
                id: self.id.clone(),
                message: format!(
                    "3-shift system requires exactly 3 definitions, found {}",
                    self.shifts.len()
                ),
            });
        }

        for (i, def) in self.shifts.iter().enumerate() {
            let next = &self.shifts[(i + 1) % self.shifts.len()];
            if def.end_time != next.start_time {
                return Err(EngineError::InvalidShiftSystem {
                    id: self.id.clone(),
                    message: format!(
                        "definitions do not tile 24 hours: '{}' ends at {} but '{}' starts at {}",
                        def.name, def.end_time, next.name, next.start_time
                    ),
                });
            }
        }

        Ok(())
    }

    /// Looks up the definition for a shift type, if the system has one.
    pub fn definition(&self, shift_type: ShiftType) -> Option<&ShiftDefinition> {
        self.shifts.iter().find(|d| d.shift_type == shift_type)
    }

    /// The minimum roster size this system can be generated for.
    pub fn minimum_headcount(&self) -> usize {
        match self.kind {
            ShiftSystemKind::TwoShiftTwelveHour => 1,
            ShiftSystemKind::ThreeShiftEightHour => 3 * self.required_per_shift as usize,
            ShiftSystemKind::TwelveOnThirtySixOff => 1,
        }
    }

    /// The standard shift duration in hours, used to convert excess
    /// overtime into substitute days.
    pub fn standard_shift_hours(&self) -> Decimal {
        self.shifts
            .first()
            .map(|d| d.duration_hours)
            .unwrap_or(Decimal::ZERO)
    }

    /// Builds the canonical 12-hour two-shift system (08:00-20:00 day,
    /// 20:00-08:00 night).
    pub fn two_shift_twelve_hour(id: impl Into<String>) -> Self {
        let twelve = Decimal::from(12);
        Self {
            id: id.into(),
            kind: ShiftSystemKind::TwoShiftTwelveHour,
            shifts: vec![
                ShiftDefinition {
                    name: "Day".to_string(),
                    shift_type: ShiftType::Day,
                    start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                    end_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
                    duration_hours: twelve,
                    is_night: false,
                    break_minutes: 60,
                },
                ShiftDefinition {
                    name: "Night".to_string(),
                    shift_type: ShiftType::Night,
                    start_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
                    end_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                    duration_hours: twelve,
                    is_night: true,
                    break_minutes: 60,
                },
            ],
            required_per_shift: 1,
        }
    }

    /// Builds the canonical 8-hour three-shift system (08-16, 16-24, 00-08).
    pub fn three_shift_eight_hour(id: impl Into<String>, required_per_shift: u32) -> Self {
        let eight = Decimal::from(8);
        Self {
            id: id.into(),
            kind: ShiftSystemKind::ThreeShiftEightHour,
            shifts: vec![
                ShiftDefinition {
                    name: "Day".to_string(),
                    shift_type: ShiftType::Day,
                    start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                    end_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
                    duration_hours: eight,
                    is_night: false,
                    break_minutes: 30,
                },
                ShiftDefinition {
                    name: "Evening".to_string(),
                    shift_type: ShiftType::Evening,
                    start_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
                    end_time: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
                    duration_hours: eight,
                    is_night: false,
                    break_minutes: 30,
                },
                ShiftDefinition {
                    name: "Night".to_string(),
                    shift_type: ShiftType::Night,
                    start_time: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
                    end_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                    duration_hours: eight,
                    is_night: true,
                    break_minutes: 30,
                },
            ],
            required_per_shift,
        }
    }

    /// Builds the canonical 12-on/36-off system. The three definitions share
    /// the 12-hour duration; rotation picks among them per duty cycle.
    pub fn twelve_on_thirty_six_off(id: impl Into<String>) -> Self {
        let twelve = Decimal::from(12);
        Self {
            id: id.into(),
            kind: ShiftSystemKind::TwelveOnThirtySixOff,
            shifts: vec![
                ShiftDefinition {
                    name: "Day".to_string(),
                    shift_type: ShiftType::Day,
                    start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                    end_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
                    duration_hours: twelve,
                    is_night: false,
                    break_minutes: 60,
                },
                ShiftDefinition {
                    name: "Evening".to_string(),
                    shift_type: ShiftType::Evening,
                    start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
                    end_time: NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
                    duration_hours: twelve,
                    is_night: false,
                    break_minutes: 60,
                },
                ShiftDefinition {
                    name: "Night".to_string(),
                    shift_type: ShiftType::Night,
                    start_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
                    end_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                    duration_hours: twelve,
                    is_night: true,
                    break_minutes: 60,
                },
            ],
            required_per_shift: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_type_display() {
        assert_eq!(ShiftType::Day.to_string(), "day");
        assert_eq!(ShiftType::Evening.to_string(), "evening");
        assert_eq!(ShiftType::Night.to_string(), "night");
    }

    #[test]
    fn test_shift_type_serialization() {
        assert_eq!(serde_json::to_string(&ShiftType::Day).unwrap(), "\"day\"");
        assert_eq!(
            serde_json::to_string(&ShiftType::Evening).unwrap(),
            "\"evening\""
        );
        assert_eq!(
            serde_json::to_string(&ShiftType::Night).unwrap(),
            "\"night\""
        );
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&ShiftSystemKind::TwoShiftTwelveHour).unwrap(),
            "\"two_shift_twelve_hour\""
        );
        assert_eq!(
            serde_json::to_string(&ShiftSystemKind::TwelveOnThirtySixOff).unwrap(),
            "\"twelve_on_thirty_six_off\""
        );
    }

    /// SS-001: canonical systems pass validation
    #[test]
    fn test_canonical_systems_validate() {
        assert!(ShiftSystem::two_shift_twelve_hour("a").validate().is_ok());
        assert!(
            ShiftSystem::three_shift_eight_hour("b", 2)
                .validate()
                .is_ok()
        );
        assert!(
            ShiftSystem::twelve_on_thirty_six_off("c")
                .validate()
                .is_ok()
        );
    }

    /// SS-002: empty definition list rejected
    #[test]
    fn test_empty_definitions_rejected() {
        let system = ShiftSystem {
            id: "empty".to_string(),
            kind: ShiftSystemKind::TwoShiftTwelveHour,
            shifts: vec![],
            required_per_shift: 1,
        };

        let err = system.validate().unwrap_err();
        assert!(err.to_string().contains("no shift definitions"));
    }

    /// SS-003: duration + break over 24h rejected
    #[test]
    fn test_oversized_shift_rejected() {
        let mut system = ShiftSystem::two_shift_twelve_hour("oversized");
        system.shifts[0].duration_hours = Decimal::from(24);
        system.shifts[0].break_minutes = 30;

        let err = system.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds 24 hours"));
    }

    /// SS-004: 3-shift tiling gap rejected
    #[test]
    fn test_three_shift_tiling_gap_rejected() {
        let mut system = ShiftSystem::three_shift_eight_hour("gapped", 1);
        system.shifts[1].start_time = NaiveTime::from_hms_opt(17, 0, 0).unwrap();

        let err = system.validate().unwrap_err();
        assert!(err.to_string().contains("tile 24 hours"));
    }

    /// SS-005: 3-shift with wrong definition count rejected
    #[test]
    fn test_three_shift_wrong_count_rejected() {
        let mut system = ShiftSystem::three_shift_eight_hour("short", 1);
        system.shifts.pop();

        let err = system.validate().unwrap_err();
        assert!(err.to_string().contains("exactly 3 definitions"));
    }

    #[test]
    fn test_definition_lookup() {
        let system = ShiftSystem::two_shift_twelve_hour("lookup");
        assert!(system.definition(ShiftType::Day).is_some());
        assert!(system.definition(ShiftType::Night).is_some());
        assert!(system.definition(ShiftType::Evening).is_none());
    }

    #[test]
    fn test_minimum_headcount() {
        assert_eq!(
            ShiftSystem::two_shift_twelve_hour("a").minimum_headcount(),
            1
        );
        assert_eq!(
            ShiftSystem::three_shift_eight_hour("b", 2).minimum_headcount(),
            6
        );
        assert_eq!(
            ShiftSystem::twelve_on_thirty_six_off("c").minimum_headcount(),
            1
        );
    }

    #[test]
    fn test_standard_shift_hours() {
        assert_eq!(
            ShiftSystem::two_shift_twelve_hour("a").standard_shift_hours(),
            Decimal::from(12)
        );
        assert_eq!(
            ShiftSystem::three_shift_eight_hour("b", 1).standard_shift_hours(),
            Decimal::from(8)
        );
    }

    #[test]
    fn test_crosses_midnight() {
        let system = ShiftSystem::two_shift_twelve_hour("a");
        assert!(!system.shifts[0].crosses_midnight());
        assert!(system.shifts[1].crosses_midnight());
    }

    #[test]
    fn test_shift_system_serialization_round_trip() {
        let system = ShiftSystem::three_shift_eight_hour("8h_3shift", 2);
        let json = serde_json::to_string(&system).unwrap();
        let deserialized: ShiftSystem = serde_json::from_str(&json).unwrap();
        assert_eq!(system, deserialized);
    }
}
