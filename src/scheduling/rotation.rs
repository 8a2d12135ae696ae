//! Rotation planning.
//!
//! This module computes the canonical per-day shift-or-rest draft for each
//! employee of a roster using a fixed-length repeating cycle. Employees are
//! ordered deterministically and each gets a personal phase offset so that
//! work/rest cycles are staggered across the roster — coverage holds without
//! every employee resting on the same days.
//!
//! The cycle position is computed from a running day count since the start
//! of the month; weekends flag the assignment for reporting but never alter
//! the cycle.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{Assignment, Employee, ShiftDefinition, ShiftSystem, ShiftSystemKind, ShiftType};

/// Returns every date of the given calendar month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] when the year/month pair does not
/// denote a calendar month.
///
/// # Example
///
/// ```
/// use roster_engine::scheduling::month_days;
///
/// let days = month_days(2025, 6).unwrap();
/// assert_eq!(days.len(), 30);
/// assert!(month_days(2025, 13).is_err());
/// ```
pub fn month_days(year: i32, month: u32) -> EngineResult<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(EngineError::InvalidMonth { year, month })?;

    let mut days = Vec::with_capacity(31);
    let mut current = first;
    while current.month() == month {
        days.push(current);
        current = current
            .checked_add_days(Days::new(1))
            .ok_or(EngineError::InvalidMonth { year, month })?;
    }
    Ok(days)
}

/// Produces the draft roster: exactly one assignment per (employee, day).
///
/// Employees are sorted by id — the stable registration order — before
/// phase offsets are applied, so identical inputs always produce an
/// identical draft.
///
/// # Errors
///
/// - [`EngineError::InsufficientPersonnel`] when the roster is smaller than
///   the system's minimum headcount.
/// - [`EngineError::InvalidShiftSystem`] when the system lacks a definition
///   the rotation rule needs.
/// - [`EngineError::InvalidMonth`] for an invalid year/month pair.
pub fn plan_month(
    system: &ShiftSystem,
    employees: &[Employee],
    year: i32,
    month: u32,
) -> EngineResult<Vec<Assignment>> {
    let days = month_days(year, month)?;

    let minimum = system.minimum_headcount();
    if employees.len() < minimum {
        return Err(EngineError::InsufficientPersonnel {
            required: minimum,
            available: employees.len(),
        });
    }

    let mut ordered: Vec<&Employee> = employees.iter().collect();
    ordered.sort_by(|a, b| a.id.cmp(&b.id));

    match system.kind {
        ShiftSystemKind::TwoShiftTwelveHour => plan_two_shift(system, &ordered, &days),
        ShiftSystemKind::ThreeShiftEightHour => plan_three_shift(system, &ordered, &days),
        ShiftSystemKind::TwelveOnThirtySixOff => plan_twelve_thirty_six(system, &ordered, &days),
    }
}

fn required_definition(system: &ShiftSystem, shift_type: ShiftType) -> EngineResult<&ShiftDefinition> {
    system
        .definition(shift_type)
        .ok_or_else(|| EngineError::InvalidShiftSystem {
            id: system.id.clone(),
            message: format!("missing {} shift definition", shift_type),
        })
}

/// 12-hour two-shift rotation.
///
/// With three or more employees each follows a 6-day cycle (2 day shifts,
/// 2 night shifts, 2 rest days) phase-shifted by two days per ordinal, so
/// every day sees at least one day-shift and one night-shift worker. A pair
/// alternates day/night with no rest; a single guard covers every day,
/// day shift on even calendar days and night shift on odd ones.
fn plan_two_shift(
    system: &ShiftSystem,
    ordered: &[&Employee],
    days: &[NaiveDate],
) -> EngineResult<Vec<Assignment>> {
    let day_def = required_definition(system, ShiftType::Day)?;
    let night_def = required_definition(system, ShiftType::Night)?;

    let mut assignments = Vec::with_capacity(ordered.len() * days.len());

    for (day_index, date) in days.iter().enumerate() {
        for (i, employee) in ordered.iter().enumerate() {
            let assignment = match ordered.len() {
                1 => {
                    let def = if date.day() % 2 == 0 { day_def } else { night_def };
                    Assignment::on_duty(&employee.id, *date, def)
                }
                2 => {
                    let on_day = (day_index + i) % 2 == 0;
                    let def = if on_day { day_def } else { night_def };
                    Assignment::on_duty(&employee.id, *date, def)
                }
                _ => {
                    // Personal cycle starts 2i days after employee 0's.
                    let position = (day_index as i64 - 2 * i as i64).rem_euclid(6);
                    match position {
                        0 | 1 => Assignment::on_duty(&employee.id, *date, day_def),
                        2 | 3 => Assignment::on_duty(&employee.id, *date, night_def),
                        _ => Assignment::rest(&employee.id, *date),
                    }
                }
            };
            assignments.push(assignment);
        }
    }

    Ok(assignments)
}

/// 8-hour three-shift rotation.
///
/// Each day the rotated ordinal `(i + day_index) mod n` picks which
/// employees work: the first `3 * required_per_shift` rotated ordinals fill
/// day, evening, and night in definition order, the remainder rest. The
/// pattern repeats with the roster length, so rest rotates through the
/// whole roster across the month.
fn plan_three_shift(
    system: &ShiftSystem,
    ordered: &[&Employee],
    days: &[NaiveDate],
) -> EngineResult<Vec<Assignment>> {
    let per_shift = system.required_per_shift as usize;
    let working = 3 * per_shift;
    let n = ordered.len();

    if system.shifts.len() != 3 {
        return Err(EngineError::InvalidShiftSystem {
            id: system.id.clone(),
            message: format!(
                "3-shift rotation requires 3 definitions, found {}",
                system.shifts.len()
            ),
        });
    }

    let mut assignments = Vec::with_capacity(n * days.len());

    for (day_index, date) in days.iter().enumerate() {
        for (i, employee) in ordered.iter().enumerate() {
            let rotated = (i + day_index) % n;
            let assignment = if rotated < working {
                let def = &system.shifts[rotated / per_shift];
                Assignment::on_duty(&employee.id, *date, def)
            } else {
                Assignment::rest(&employee.id, *date)
            };
            assignments.push(assignment);
        }
    }

    Ok(assignments)
}

/// 12-on/36-off rotation.
///
/// The 48-hour cycle is four 12-hour slots; employee *i*'s duty slot is
/// offset by *i* slots, so slot *t* belongs to employee *i* when
/// `(t - i) mod 4 == 0`. A calendar day spans slots `2d` and `2d + 1`; the
/// duty's shift definition rotates with the completed-cycle count
/// (`cycle mod 3`), the remaining 36 hours are rest.
fn plan_twelve_thirty_six(
    system: &ShiftSystem,
    ordered: &[&Employee],
    days: &[NaiveDate],
) -> EngineResult<Vec<Assignment>> {
    if system.shifts.len() != 3 {
        return Err(EngineError::InvalidShiftSystem {
            id: system.id.clone(),
            message: format!(
                "12/36 rotation requires 3 definitions, found {}",
                system.shifts.len()
            ),
        });
    }

    let mut assignments = Vec::with_capacity(ordered.len() * days.len());

    for (day_index, date) in days.iter().enumerate() {
        for (i, employee) in ordered.iter().enumerate() {
            let duty_slot = [2 * day_index as i64, 2 * day_index as i64 + 1]
                .into_iter()
                .find(|t| (t - i as i64).rem_euclid(4) == 0);

            let assignment = match duty_slot {
                Some(t) => {
                    let cycle = (t - i as i64).div_euclid(4);
                    let def = &system.shifts[cycle.rem_euclid(3) as usize];
                    Assignment::on_duty(&employee.id, *date, def)
                }
                None => Assignment::rest(&employee.id, *date),
            };
            assignments.push(assignment);
        }
    }

    Ok(assignments)
}
