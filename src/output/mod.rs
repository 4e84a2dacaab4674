//! Output formatting for subnet plans.
//!
//! This module handles rendering the finished plan:
//! - [`csv`] - CSV output for the operator
//! - [`terminal`] - terminal formatting helpers
//! - [`export`] - JSON plan file for the provisioning engine

mod csv;
mod export;
mod terminal;

pub use csv::{plan_print, plan_rows, PlanPrintRow};
pub use export::write_plan_file;
pub use terminal::format_field;
