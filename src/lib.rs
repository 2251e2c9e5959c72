//! tfclone - Clone Terraform Enterprise / HCP Terraform workspaces
//!
//! Creates a new workspace from an existing one, optionally in another
//! organization or account, and copies its settings, variables and state.
//!
//! # Features
//!
//! - Copies workspace settings and the VCS binding
//! - Copies variables; sensitive ones are created empty and reported
//! - Copies the latest state between accounts
//! - Maps VCS OAuth tokens to the destination account
//! - Text, JSON and YAML reports
//!
//! # Example
//!
//! ```bash
//! # Same organization, with variables
//! tfclone ws --org acme -s web -n web-copy -c
//!
//! # Another account, with variables and state
//! export TFE_TOKEN_DESTINATION=...
//! tfclone ws --org acme -s web -n web -d -p globex -v ot-abc123 -c -t
//! ```

pub mod cli;
pub mod clone;
pub mod config;
pub mod error;
pub mod hcp;
pub mod output;
pub mod ui;

pub use cli::{Cli, CloneWsArgs, Command, OutputFormat};
pub use clone::{
    clone_workspace, run_clone_command, CloneApi, CloneConfig, CloneFailure, CloneReport, Stage,
    StageOutcome, StageStatus,
};
pub use error::{CloneError, Result, TfeError, VariableFailure};
pub use hcp::{HostResolver, TfeClient, TfeResource, TokenResolver, Workspace};
