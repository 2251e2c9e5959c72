//! Workspace data models

use serde::{Deserialize, Serialize};

use crate::hcp::traits::TfeResource;

/// Workspace data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
    pub attributes: WorkspaceAttributes,
    pub relationships: Option<WorkspaceRelationships>,
}

/// Workspace attributes from TFE API
///
/// Only the settings carried over by a clone are modelled.
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceAttributes {
    pub name: String,

    #[serde(rename = "terraform-version")]
    pub terraform_version: Option<String>,

    #[serde(rename = "working-directory")]
    pub working_directory: Option<String>,

    #[serde(rename = "auto-apply")]
    pub auto_apply: Option<bool>,

    #[serde(rename = "execution-mode")]
    pub execution_mode: Option<String>,

    pub description: Option<String>,

    #[serde(rename = "vcs-repo")]
    pub vcs_repo: Option<VcsRepo>,
}

/// VCS repository binding of a workspace
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VcsRepo {
    /// Repository reference, e.g. `org/repo`
    pub identifier: String,

    /// Account-scoped OAuth token binding the workspace to a VCS connection
    #[serde(rename = "oauth-token-id", skip_serializing_if = "Option::is_none")]
    pub oauth_token_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    #[serde(
        rename = "ingress-submodules",
        skip_serializing_if = "Option::is_none"
    )]
    pub ingress_submodules: Option<bool>,
}

/// Workspace relationships from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceRelationships {
    pub organization: Option<RelationshipData>,
}

/// Generic relationship data
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipData {
    pub data: Option<RelationshipId>,
}

/// Relationship ID reference
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipId {
    pub id: String,
}

impl TfeResource for Workspace {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl Workspace {
    /// Terraform version, if pinned
    pub fn terraform_version(&self) -> Option<&str> {
        self.attributes.terraform_version.as_deref()
    }

    /// Working directory relative to the repository root
    pub fn working_directory(&self) -> Option<&str> {
        self.attributes.working_directory.as_deref()
    }

    /// VCS binding, if the workspace is VCS-driven
    pub fn vcs_repo(&self) -> Option<&VcsRepo> {
        self.attributes.vcs_repo.as_ref()
    }

    /// OAuth token id of the VCS binding
    pub fn vcs_oauth_token_id(&self) -> Option<&str> {
        self.vcs_repo().and_then(|r| r.oauth_token_id.as_deref())
    }

    /// Get organization name if available (from relationships)
    pub fn organization_name(&self) -> Option<&str> {
        self.relationships
            .as_ref()
            .and_then(|r| r.organization.as_ref())
            .and_then(|o| o.data.as_ref())
            .map(|d| d.id.as_str())
    }
}

/// Attributes sent when creating a workspace
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceDraft {
    pub name: String,

    #[serde(rename = "terraform-version", skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,

    #[serde(rename = "working-directory", skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,

    #[serde(rename = "auto-apply", skip_serializing_if = "Option::is_none")]
    pub auto_apply: Option<bool>,

    #[serde(rename = "execution-mode", skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "vcs-repo", skip_serializing_if = "Option::is_none")]
    pub vcs_repo: Option<VcsRepo>,
}

impl WorkspaceDraft {
    /// Copy every non-identity setting of `source` under a new name
    pub fn from_source(source: &Workspace, name: &str) -> Self {
        let attrs = &source.attributes;
        Self {
            name: name.to_string(),
            terraform_version: attrs.terraform_version.clone(),
            working_directory: attrs.working_directory.clone(),
            auto_apply: attrs.auto_apply,
            // agent mode needs the source's agent pool, which is not copied
            execution_mode: attrs
                .execution_mode
                .clone()
                .filter(|mode| mode != "agent"),
            description: attrs.description.clone(),
            vcs_repo: attrs.vcs_repo.clone(),
        }
    }

    /// Replace the OAuth token id of the VCS binding (no-op without one)
    pub fn with_vcs_oauth_token_id(mut self, token_id: &str) -> Self {
        if let Some(repo) = self.vcs_repo.as_mut() {
            repo.oauth_token_id = Some(token_id.to_string());
        }
        self
    }

    /// OAuth token id the workspace will be bound with
    pub fn vcs_oauth_token_id(&self) -> Option<&str> {
        self.vcs_repo
            .as_ref()
            .and_then(|r| r.oauth_token_id.as_deref())
    }

    /// JSON:API request body for `POST /organizations/:org/workspaces`
    pub fn to_request_body(&self) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "type": "workspaces",
                "attributes": self
            }
        })
    }
}
