//! In-memory `CloneApi` that records every call

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::error::{Result, TfeError};
use crate::hcp::{StateSnapshot, Variable, VariableDraft, Workspace, WorkspaceDraft};

use super::api::CloneApi;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    GetWorkspace(String, String),
    CreateWorkspace(String, WorkspaceDraft),
    ListVariables(String),
    CreateVariable(String, VariableDraft),
    GetLatestStateVersion(String),
    CreateStateVersion(String, StateSnapshot),
    ResolveVcsOAuthTokenId(String, String),
}

impl Call {
    pub(crate) fn is_state_call(&self) -> bool {
        matches!(
            self,
            Call::GetLatestStateVersion(_) | Call::CreateStateVersion(..)
        )
    }
}

/// Fake account: workspaces, variables, states and OAuth tokens in memory
#[derive(Default)]
pub(crate) struct SpyApi {
    workspaces: Mutex<Vec<(String, Workspace)>>,
    variables: HashMap<String, Vec<Variable>>,
    states: HashMap<String, StateSnapshot>,
    oauth_tokens: HashMap<String, Vec<String>>,
    failing_variable_keys: HashSet<String>,
    list_variables_error: bool,
    state_upload_error: bool,
    oauth_status: Option<u16>,
    calls: Mutex<Vec<Call>>,
}

impl SpyApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_workspace(self, organization: &str, workspace: Workspace) -> Self {
        self.workspaces
            .lock()
            .unwrap()
            .push((organization.to_string(), workspace));
        self
    }

    pub(crate) fn with_variables(mut self, workspace_id: &str, variables: Vec<Variable>) -> Self {
        self.variables.insert(workspace_id.to_string(), variables);
        self
    }

    pub(crate) fn with_state(mut self, workspace_id: &str, snapshot: StateSnapshot) -> Self {
        self.states.insert(workspace_id.to_string(), snapshot);
        self
    }

    pub(crate) fn with_oauth_tokens(mut self, organization: &str, ids: &[&str]) -> Self {
        self.oauth_tokens.insert(
            organization.to_string(),
            ids.iter().map(|id| id.to_string()).collect(),
        );
        self
    }

    /// Creating a variable with this key fails with a 422
    pub(crate) fn failing_variable(mut self, key: &str) -> Self {
        self.failing_variable_keys.insert(key.to_string());
        self
    }

    pub(crate) fn failing_variable_listing(mut self) -> Self {
        self.list_variables_error = true;
        self
    }

    pub(crate) fn failing_state_upload(mut self) -> Self {
        self.state_upload_error = true;
        self
    }

    /// OAuth token listing answers with this HTTP status
    pub(crate) fn oauth_listing_status(mut self, status: u16) -> Self {
        self.oauth_status = Some(status);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn created_workspaces(&self) -> Vec<(String, WorkspaceDraft)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::CreateWorkspace(org, draft) => Some((org, draft)),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn created_variables(&self) -> Vec<VariableDraft> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::CreateVariable(_, draft) => Some(draft),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub(crate) fn workspace(id: &str, name: &str, vcs_token_id: Option<&str>) -> Workspace {
    let vcs_repo = vcs_token_id.map(|token| {
        serde_json::json!({
            "identifier": "acme/infra",
            "branch": "main",
            "oauth-token-id": token
        })
    });
    serde_json::from_value(serde_json::json!({
        "id": id,
        "attributes": {
            "name": name,
            "terraform-version": "1.6.2",
            "working-directory": "envs/prod",
            "vcs-repo": vcs_repo
        }
    }))
    .unwrap()
}

pub(crate) fn variable(key: &str, value: Option<&str>, sensitive: bool) -> Variable {
    serde_json::from_value(serde_json::json!({
        "id": format!("var-{}", key),
        "attributes": {
            "key": key,
            "value": value,
            "category": "env",
            "sensitive": sensitive
        }
    }))
    .unwrap()
}

impl CloneApi for SpyApi {
    async fn get_workspace(&self, organization: &str, name: &str) -> Result<Option<Workspace>> {
        self.record(Call::GetWorkspace(organization.to_string(), name.to_string()));
        let found = self
            .workspaces
            .lock()
            .unwrap()
            .iter()
            .find(|(org, ws)| org == organization && ws.attributes.name == name)
            .map(|(_, ws)| ws.clone());
        Ok(found)
    }

    async fn create_workspace(
        &self,
        organization: &str,
        draft: &WorkspaceDraft,
    ) -> Result<Workspace> {
        self.record(Call::CreateWorkspace(
            organization.to_string(),
            draft.clone(),
        ));
        let mut workspaces = self.workspaces.lock().unwrap();
        if workspaces
            .iter()
            .any(|(org, ws)| org == organization && ws.attributes.name == draft.name)
        {
            return Err(TfeError::Conflict(format!("{} exists", draft.name)));
        }
        let created: Workspace = serde_json::from_value(serde_json::json!({
            "id": format!("ws-new-{}", workspaces.len()),
            "attributes": draft
        }))?;
        workspaces.push((organization.to_string(), created.clone()));
        Ok(created)
    }

    async fn list_variables(&self, workspace_id: &str) -> Result<Vec<Variable>> {
        self.record(Call::ListVariables(workspace_id.to_string()));
        if self.list_variables_error {
            return Err(TfeError::Api {
                status: 500,
                message: "variables unavailable".to_string(),
            });
        }
        Ok(self.variables.get(workspace_id).cloned().unwrap_or_default())
    }

    async fn create_variable(
        &self,
        workspace_id: &str,
        draft: &VariableDraft,
    ) -> Result<Variable> {
        self.record(Call::CreateVariable(
            workspace_id.to_string(),
            draft.clone(),
        ));
        if self.failing_variable_keys.contains(&draft.key) {
            return Err(TfeError::Api {
                status: 422,
                message: format!("{} is invalid", draft.key),
            });
        }
        Ok(serde_json::from_value(serde_json::json!({
            "id": format!("var-new-{}", draft.key),
            "attributes": draft
        }))?)
    }

    async fn get_latest_state_version(
        &self,
        workspace_id: &str,
    ) -> Result<Option<StateSnapshot>> {
        self.record(Call::GetLatestStateVersion(workspace_id.to_string()));
        Ok(self.states.get(workspace_id).cloned())
    }

    async fn create_state_version(
        &self,
        workspace_id: &str,
        snapshot: &StateSnapshot,
    ) -> Result<()> {
        self.record(Call::CreateStateVersion(
            workspace_id.to_string(),
            snapshot.clone(),
        ));
        if self.state_upload_error {
            return Err(TfeError::Api {
                status: 409,
                message: "workspace is locked".to_string(),
            });
        }
        Ok(())
    }

    async fn resolve_vcs_oauth_token_id(
        &self,
        organization: &str,
        hint: &str,
    ) -> Result<Option<String>> {
        self.record(Call::ResolveVcsOAuthTokenId(
            organization.to_string(),
            hint.to_string(),
        ));
        if let Some(status) = self.oauth_status {
            return Err(TfeError::Api {
                status,
                message: "Failed to fetch OAuth tokens".to_string(),
            });
        }
        Ok(self
            .oauth_tokens
            .get(organization)
            .and_then(|ids| ids.iter().find(|id| id.as_str() == hint))
            .cloned())
    }
}
