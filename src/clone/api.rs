//! The API surface the clone core depends on

use crate::error::Result;
use crate::hcp::{StateSnapshot, TfeClient, Variable, VariableDraft, Workspace, WorkspaceDraft};

/// Remote operations needed to clone a workspace
///
/// Implemented by [`TfeClient`]; one implementation per account token.
#[allow(async_fn_in_trait)]
pub trait CloneApi {
    /// Look up a workspace by organization and name, `None` when absent
    async fn get_workspace(&self, organization: &str, name: &str) -> Result<Option<Workspace>>;

    /// Create a workspace; a name clash is `TfeError::Conflict`
    async fn create_workspace(
        &self,
        organization: &str,
        draft: &WorkspaceDraft,
    ) -> Result<Workspace>;

    /// Variables of a workspace in listing order
    async fn list_variables(&self, workspace_id: &str) -> Result<Vec<Variable>>;

    async fn create_variable(&self, workspace_id: &str, draft: &VariableDraft)
        -> Result<Variable>;

    /// Latest state of a workspace, `None` when it never had one
    async fn get_latest_state_version(&self, workspace_id: &str)
        -> Result<Option<StateSnapshot>>;

    async fn create_state_version(&self, workspace_id: &str, snapshot: &StateSnapshot)
        -> Result<()>;

    /// `hint` if it is the id of an OAuth token of `organization`
    async fn resolve_vcs_oauth_token_id(
        &self,
        organization: &str,
        hint: &str,
    ) -> Result<Option<String>>;
}

impl CloneApi for TfeClient {
    async fn get_workspace(&self, organization: &str, name: &str) -> Result<Option<Workspace>> {
        self.get_workspace_by_name(organization, name).await
    }

    async fn create_workspace(
        &self,
        organization: &str,
        draft: &WorkspaceDraft,
    ) -> Result<Workspace> {
        self.create_org_workspace(organization, draft).await
    }

    async fn list_variables(&self, workspace_id: &str) -> Result<Vec<Variable>> {
        self.get_workspace_vars(workspace_id).await
    }

    async fn create_variable(
        &self,
        workspace_id: &str,
        draft: &VariableDraft,
    ) -> Result<Variable> {
        self.create_workspace_var(workspace_id, draft).await
    }

    async fn get_latest_state_version(
        &self,
        workspace_id: &str,
    ) -> Result<Option<StateSnapshot>> {
        self.fetch_latest_state(workspace_id).await
    }

    async fn create_state_version(
        &self,
        workspace_id: &str,
        snapshot: &StateSnapshot,
    ) -> Result<()> {
        self.push_state_version(workspace_id, snapshot).await
    }

    async fn resolve_vcs_oauth_token_id(
        &self,
        organization: &str,
        hint: &str,
    ) -> Result<Option<String>> {
        self.find_oauth_token_id(organization, hint).await
    }
}
