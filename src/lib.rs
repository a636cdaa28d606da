//! DLS Core - Revised-target engine for interrupted limited-overs cricket.
//!
//! Implements the Standard Edition resource-percentage model: the resource
//! table, overs-notation handling, revised targets, live par scores and
//! what-if projections. Python bindings are available with the `python`
//! feature.

pub mod chase;
pub mod constants;
pub mod error;
pub mod innings;
pub mod overs;
pub mod par;
#[cfg(feature = "python")]
mod python;
pub mod resource;
pub mod resource_table;
pub mod scenarios;
pub mod target;

pub use chase::ChaseState;
pub use constants::{ALL_OUT_WICKETS, BALLS_PER_OVER, G50, MAX_OVERS};
pub use error::DlsError;
pub use innings::{InningsSnapshot, MatchFormat, MatchSettings};
pub use overs::{decimal_to_notation, format_overs_display, to_decimal_overs};
pub use par::{par_score_at, par_status, ParStatus};
pub use resource::resource_percentage;
pub use resource_table::{validate_resource_table, RESOURCE_TABLE};
pub use scenarios::{generate_scenarios, WhatIfScenario};
pub use target::{calculate_target, target_ladder, DlsResult};
