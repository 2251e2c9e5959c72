//! TFE API client module
//!
//! Typed access to the parts of the Terraform Enterprise v2 API needed to
//! clone a workspace: workspaces, variables, state versions and OAuth tokens.

mod client;
mod credentials;
mod host;
pub mod oauth_tokens;
pub mod state;
pub mod traits;
pub mod variables;
pub mod workspaces;

use serde::Deserialize;

pub(crate) use client::error_detail;
pub use client::TfeClient;
pub use credentials::{DestinationToken, TokenResolver};
pub use host::HostResolver;
pub use oauth_tokens::OAuthToken;
pub use state::StateSnapshot;
pub use traits::{ApiListResponse, ApiResponse, PaginatedResponse, TfeResource};
pub use variables::{Variable, VariableCategory, VariableDraft};
pub use workspaces::{VcsRepo, Workspace, WorkspaceDraft};

/// Pagination metadata from TFE API (shared across resources)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<Pagination>,
}

/// Pagination details
#[derive(Deserialize, Debug, Clone)]
pub struct Pagination {
    #[serde(rename = "current-page")]
    pub current_page: u32,
    #[serde(rename = "total-pages")]
    pub total_pages: u32,
    #[serde(rename = "total-count")]
    pub total_count: u32,
}
