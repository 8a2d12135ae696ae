//! Monthly schedule generation.
//!
//! This module wires the pure pipeline stages together behind the one
//! public operation of the engine: plan the rotation draft, overlay
//! recorded leave, cover displaced slots with standby personnel, validate
//! coverage, summarize overtime, and atomically replace the stored month.
//!
//! Generation is a synchronous batch per (project, year, month). Concurrent
//! regeneration of the same key is serialized through a per-key lock;
//! different keys run fully independently. A failed run never touches the
//! previously stored month — the replace is the final step and a single
//! store call.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{Assignment, MonthlyOvertimeSummary, SubstituteIdentity};
use crate::stores::{AssignmentStore, LeaveStore, PersonnelStore, SubstituteStore};

use super::coverage::{CoverageIssue, validate};
use super::leave::apply_leave;
use super::overtime::summarize;
use super::rotation::plan_month;
use super::substitute::assign_substitutes;

/// The input of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The project (roster) to generate for.
    pub project_id: String,
    /// The target year.
    pub year: i32,
    /// The target month (1-12).
    pub month: u32,
    /// The shift system to generate with.
    pub shift_system_id: String,
    /// A new standby person to register if no active substitute exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standby: Option<SubstituteIdentity>,
}

/// The output of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResult {
    /// One assignment per (employee, day), substitutes included.
    pub assignments: Vec<Assignment>,
    /// Unresolved day/shift shortfalls. Empty means full coverage.
    pub coverage_issues: Vec<CoverageIssue>,
    /// Per-employee legal-overtime exposure.
    pub overtime: Vec<MonthlyOvertimeSummary>,
}

type MonthKey = (String, i32, u32);

/// The roster generation engine.
///
/// Holds the configuration and the four collaborator stores; shared across
/// request handlers behind an `Arc`.
pub struct ScheduleEngine {
    config: ConfigLoader,
    personnel: Arc<dyn PersonnelStore>,
    leave: Arc<dyn LeaveStore>,
    substitutes: Arc<dyn SubstituteStore>,
    assignments: Arc<dyn AssignmentStore>,
    month_locks: Mutex<HashMap<MonthKey, Arc<Mutex<()>>>>,
}

impl ScheduleEngine {
    /// Creates an engine over the given configuration and stores.
    pub fn new(
        config: ConfigLoader,
        personnel: Arc<dyn PersonnelStore>,
        leave: Arc<dyn LeaveStore>,
        substitutes: Arc<dyn SubstituteStore>,
        assignments: Arc<dyn AssignmentStore>,
    ) -> Self {
        Self {
            config,
            personnel,
            leave,
            substitutes,
            assignments,
            month_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the configuration this engine was built with.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    fn month_lock(&self, key: MonthKey) -> Arc<Mutex<()>> {
        let mut locks = match self.month_locks.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        locks.entry(key).or_default().clone()
    }

    /// Generates and stores the roster for one (project, year, month).
    ///
    /// The run either completes and replaces the month's assignments in one
    /// store call, or fails leaving the previously stored month untouched.
    /// Coverage shortfalls and substitute unavailability are reported in
    /// the result, not raised as errors.
    ///
    /// # Errors
    ///
    /// - [`crate::error::EngineError::MissingShiftSystem`] for an unknown system id.
    /// - [`crate::error::EngineError::InsufficientPersonnel`] when the roster is too small.
    /// - [`crate::error::EngineError::InvalidMonth`] for an invalid year/month.
    /// - [`crate::error::EngineError::StoreFailure`] when a collaborator call fails.
    pub fn generate_monthly_schedule(
        &self,
        request: &GenerateRequest,
    ) -> EngineResult<GenerateResult> {
        let key = (request.project_id.clone(), request.year, request.month);
        let key_lock = self.month_lock(key);
        let _serialized = match key_lock.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        info!(
            project_id = %request.project_id,
            year = request.year,
            month = request.month,
            shift_system_id = %request.shift_system_id,
            "Generating monthly schedule"
        );

        let system = self.config.get_shift_system(&request.shift_system_id)?;
        let employees = self
            .personnel
            .list_active_employees(&request.project_id)?;

        let draft = plan_month(system, &employees, request.year, request.month)?;
        let (mut assignments, hits) = apply_leave(draft, self.leave.as_ref())?;
        assign_substitutes(
            &request.project_id,
            &mut assignments,
            &hits,
            request.standby.as_ref(),
            self.substitutes.as_ref(),
        )?;

        let coverage_issues = validate(system, &assignments, request.year, request.month)?;
        if !coverage_issues.is_empty() {
            warn!(
                project_id = %request.project_id,
                gaps = coverage_issues.len(),
                "Schedule generated with coverage gaps"
            );
        }

        let overtime = summarize(&employees, &assignments, self.config.limits(), system);

        self.assignments.replace_month(
            &request.project_id,
            request.year,
            request.month,
            &assignments,
        )?;

        info!(
            project_id = %request.project_id,
            assignments = assignments.len(),
            gaps = coverage_issues.len(),
            "Monthly schedule stored"
        );

        Ok(GenerateResult {
            assignments,
            coverage_issues,
            overtime,
        })
    }
}
