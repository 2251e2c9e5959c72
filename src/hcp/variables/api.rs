//! Workspace variable API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::{ApiListResponse, ApiResponse};
use crate::hcp::{error_detail, TfeClient};

use super::models::{Variable, VariableDraft};

impl TfeClient {
    /// List all variables of a workspace, in API listing order
    pub async fn get_workspace_vars(&self, workspace_id: &str) -> Result<Vec<Variable>> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::WORKSPACES,
            workspace_id,
            api::VARS
        );

        debug!("Fetching variables from: {}", url);

        let response = self.get(&url).send().await?;
        let vars: ApiListResponse<Variable> = self
            .parse_api_response(response, &format!("variables of workspace '{}'", workspace_id))
            .await?;

        debug!(
            "Fetched {} variables for workspace '{}'",
            vars.data.len(),
            workspace_id
        );
        Ok(vars.data)
    }

    /// Create a variable on a workspace
    pub async fn create_workspace_var(
        &self,
        workspace_id: &str,
        draft: &VariableDraft,
    ) -> Result<Variable> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::WORKSPACES,
            workspace_id,
            api::VARS
        );

        debug!(
            "Creating {} variable '{}' on workspace {}",
            draft.category, draft.key, workspace_id
        );

        let response = self.post(&url).json(&draft.to_request_body()).send().await?;

        match response.status().as_u16() {
            200 | 201 => {
                let created: ApiResponse<Variable> = response.json().await?;
                Ok(created.data)
            }
            404 => Err(TfeError::Api {
                status: 404,
                message: format!("Workspace '{}' not found", workspace_id),
            }),
            422 => {
                let detail = error_detail(response, "Validation error").await;
                Err(TfeError::Api {
                    status: 422,
                    message: format!("Cannot create variable '{}': {}", draft.key, detail),
                })
            }
            status => {
                let detail = error_detail(response, "no response body").await;
                Err(TfeError::Api {
                    status,
                    message: format!("Failed to create variable '{}': {}", draft.key, detail),
                })
            }
        }
    }
}
