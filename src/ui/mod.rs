//! UI utilities for terminal output
//!
//! Progress spinner and the confirmation prompt shown before a clone.

mod confirm;
mod spinner;

pub use confirm::{clone_plan, confirm_action};
pub use spinner::{clear_spinner, create_spinner, finish_spinner};
