//! Request types for the roster engine API.
//!
//! This module defines the JSON request structures for the `/generate`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::SubstituteIdentity;
use crate::scheduling::GenerateRequest;

/// Request body for the `/generate` endpoint.
///
/// Identifies the (project, year, month) to generate and the shift system
/// to generate with, optionally supplying a brand-new standby person to
/// register when no active substitute exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateScheduleRequest {
    /// The project (roster) to generate for.
    pub project_id: String,
    /// The target year.
    pub year: i32,
    /// The target month (1-12).
    pub month: u32,
    /// The shift system to generate with.
    pub shift_system_id: String,
    /// A new standby person to register on demand.
    #[serde(default)]
    pub standby: Option<StandbyRequest>,
}

/// Standby identity fields in a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandbyRequest {
    /// National identity number (the unique upsert key).
    pub national_id: String,
    /// Full name of the standby person.
    pub name: String,
    /// Employing company, when applicable.
    #[serde(default)]
    pub company: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<StandbyRequest> for SubstituteIdentity {
    fn from(req: StandbyRequest) -> Self {
        SubstituteIdentity {
            national_id: req.national_id,
            name: req.name,
            company: req.company,
            phone: req.phone,
        }
    }
}

impl From<GenerateScheduleRequest> for GenerateRequest {
    fn from(req: GenerateScheduleRequest) -> Self {
        GenerateRequest {
            project_id: req.project_id,
            year: req.year,
            month: req.month,
            shift_system_id: req.shift_system_id,
            standby: req.standby.map(Into::into),
        }
    }
}
