//! Workspace cloning
//!
//! The orchestrator validates a [`CloneConfig`], resolves the source
//! workspace, creates the destination and then copies variables and (across
//! accounts) state. Every remote call goes through [`CloneApi`], so the same
//! flow runs against [`crate::hcp::TfeClient`] or an in-memory fake.

pub mod api;
mod commands;
mod config;
mod models;
mod orchestrator;
pub mod resolver;
pub mod state;
pub mod variables;
pub mod vcs;

#[cfg(test)]
pub(crate) mod testing;

pub use api::CloneApi;
pub use commands::run_clone_command;
pub use config::CloneConfig;
pub use models::{CloneFailure, CloneReport, Stage, StageOutcome, StageStatus};
pub use orchestrator::clone_workspace;
