//! HTTP API module for the roster generation engine.
//!
//! This module provides the REST API endpoint for generating monthly duty
//! rosters.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{GenerateScheduleRequest, StandbyRequest};
pub use response::ApiError;
pub use state::AppState;
