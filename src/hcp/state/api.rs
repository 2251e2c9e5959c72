//! State API operations

use log::{debug, warn};

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::ApiResponse;
use crate::hcp::{error_detail, TfeClient};

use super::models::{CurrentStateVersion, StateSnapshot, StateVersionRequest};

/// Lock reason shown in the TFE UI while a state version is uploaded
const UPLOAD_LOCK_REASON: &str = "tfclone: uploading initial state version";

impl TfeClient {
    /// Get the current state version of a workspace
    ///
    /// Returns `None` when the workspace has no state yet.
    pub async fn get_current_state_version(
        &self,
        workspace_id: &str,
    ) -> Result<Option<CurrentStateVersion>> {
        let url = format!(
            "{}/{}/{}/current-state-version",
            self.base_url(),
            api::WORKSPACES,
            workspace_id
        );

        debug!("Fetching current state version for: {}", workspace_id);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            200 => {
                let data: ApiResponse<CurrentStateVersion> = response.json().await?;
                Ok(Some(data.data))
            }
            404 => {
                debug!("Workspace '{}' has no state version", workspace_id);
                Ok(None)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(TfeError::Api {
                    status,
                    message: format!(
                        "Failed to get state version for '{}': {}",
                        workspace_id, body
                    ),
                })
            }
        }
    }

    /// Download a raw state file
    pub async fn download_state(&self, download_url: &str) -> Result<Vec<u8>> {
        debug!("Downloading state from: {}", download_url);

        let response = self.get(download_url).send().await?;

        match response.status().as_u16() {
            200 => Ok(response.bytes().await?.to_vec()),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(TfeError::Api {
                    status,
                    message: format!("Failed to download state: {}", body),
                })
            }
        }
    }

    /// Fetch the latest state of a workspace as an uploadable snapshot
    pub async fn fetch_latest_state(&self, workspace_id: &str) -> Result<Option<StateSnapshot>> {
        let Some(current) = self.get_current_state_version(workspace_id).await? else {
            return Ok(None);
        };

        let download_url = current
            .attributes
            .hosted_state_download_url
            .as_deref()
            .ok_or_else(|| TfeError::Api {
                status: 200,
                message: format!(
                    "State version '{}' of workspace '{}' has no download URL",
                    current.id, workspace_id
                ),
            })?;

        let payload = self.download_state(download_url).await?;
        debug!(
            "Downloaded state version {} (serial {}, {} bytes)",
            current.id,
            current.attributes.serial,
            payload.len()
        );

        Ok(Some(StateSnapshot::from_payload(
            current.attributes.serial,
            current.attributes.lineage.clone(),
            payload,
        )))
    }

    /// Upload a new state version to a workspace
    ///
    /// The workspace must already be locked by the caller's token.
    pub async fn upload_state_version(
        &self,
        workspace_id: &str,
        snapshot: &StateSnapshot,
    ) -> Result<()> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::WORKSPACES,
            workspace_id,
            api::STATE_VERSIONS
        );

        debug!(
            "Uploading state version (serial: {}, md5: {}) for: {}",
            snapshot.serial, snapshot.md5, workspace_id
        );

        let request = StateVersionRequest::from(snapshot);
        let response = self.post(&url).json(&request).send().await?;

        match response.status().as_u16() {
            200 | 201 => {
                debug!("Successfully uploaded state version");
                Ok(())
            }
            404 => Err(TfeError::Api {
                status: 404,
                message: format!("Workspace '{}' not found", workspace_id),
            }),
            409 => Err(TfeError::Api {
                status: 409,
                message: format!(
                    "State version conflict for '{}'. Another state may have been uploaded.",
                    workspace_id
                ),
            }),
            422 => {
                let detail = error_detail(response, "Validation error").await;
                Err(TfeError::Api {
                    status: 422,
                    message: format!("Invalid state version: {}", detail),
                })
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(TfeError::Api {
                    status,
                    message: format!("Failed to upload state version: {}", body),
                })
            }
        }
    }

    /// Lock the workspace, upload the snapshot, then unlock
    ///
    /// Unlock is attempted even when the upload fails. An unlock failure after
    /// a successful upload is only logged.
    pub async fn push_state_version(
        &self,
        workspace_id: &str,
        snapshot: &StateSnapshot,
    ) -> Result<()> {
        self.lock_workspace(workspace_id, UPLOAD_LOCK_REASON).await?;

        let uploaded = self.upload_state_version(workspace_id, snapshot).await;

        if let Err(e) = self.unlock_workspace(workspace_id).await {
            warn!(
                "Workspace '{}' could not be unlocked after state upload: {}",
                workspace_id, e
            );
        }

        uploaded
    }
}
