//! Output formatting module
//!
//! Renders clone reports as text, JSON or YAML, and the stage summary table.

mod report;
mod summary;

pub use report::{output_report, render_report};
pub use summary::{print_stage_summary, stage_summary_table};
