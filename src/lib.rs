//! Monthly Duty-Roster Generation Engine
//!
//! This crate generates conflict-free monthly duty rosters for 24/7
//! shift-based personnel: it assigns every employee a shift or leave code for
//! every day of a month, substitutes absent employees with standby ("joker")
//! personnel, validates round-the-clock coverage, and computes legal-overtime
//! exposure.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduling;
pub mod stores;
