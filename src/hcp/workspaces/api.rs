//! Workspace API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::ApiResponse;
use crate::hcp::{error_detail, TfeClient};

use super::models::{Workspace, WorkspaceDraft};

impl TfeClient {
    /// Get a single workspace by name within an organization
    ///
    /// Returns `None` when the workspace does not exist.
    pub async fn get_workspace_by_name(&self, org: &str, name: &str) -> Result<Option<Workspace>> {
        let path = format!(
            "/{}/{}/{}/{}",
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::WORKSPACES,
            urlencoding::encode(name)
        );
        self.fetch_resource_by_path::<Workspace>(
            &path,
            &format!("workspace '{}' in organization '{}'", name, org),
        )
        .await
    }

    /// Create a workspace in an organization
    ///
    /// A name clash is reported as `TfeError::Conflict`.
    pub async fn create_org_workspace(&self, org: &str, draft: &WorkspaceDraft) -> Result<Workspace> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::WORKSPACES
        );

        debug!("Creating workspace '{}' in organization '{}'", draft.name, org);

        let response = self.post(&url).json(&draft.to_request_body()).send().await?;

        match response.status().as_u16() {
            200 | 201 => {
                let created: ApiResponse<Workspace> = response.json().await?;
                debug!(
                    "Created workspace '{}' ({})",
                    created.data.attributes.name, created.data.id
                );
                Ok(created.data)
            }
            404 => Err(TfeError::Api {
                status: 404,
                message: format!("Organization '{}' not found", org),
            }),
            409 => Err(TfeError::Conflict(format!(
                "Workspace '{}' already exists in organization '{}'",
                draft.name, org
            ))),
            422 => {
                let detail = error_detail(response, "Validation error").await;
                if detail.contains("already been taken") {
                    Err(TfeError::Conflict(format!(
                        "Workspace '{}' in organization '{}': {}",
                        draft.name, org, detail
                    )))
                } else {
                    Err(TfeError::Api {
                        status: 422,
                        message: format!("Cannot create workspace '{}': {}", draft.name, detail),
                    })
                }
            }
            status => {
                let detail = error_detail(response, "no response body").await;
                Err(TfeError::Api {
                    status,
                    message: format!(
                        "Failed to create workspace '{}' in '{}': {}",
                        draft.name, org, detail
                    ),
                })
            }
        }
    }

    /// Lock a workspace to prevent concurrent modifications
    pub async fn lock_workspace(&self, workspace_id: &str, reason: &str) -> Result<()> {
        let url = format!(
            "{}/{}/{}/actions/lock",
            self.base_url(),
            api::WORKSPACES,
            workspace_id
        );

        debug!("Locking workspace: {}", workspace_id);

        let body = serde_json::json!({ "reason": reason });
        let response = self.post(&url).json(&body).send().await?;

        match response.status().as_u16() {
            200 => Ok(()),
            404 => Err(TfeError::Api {
                status: 404,
                message: format!("Workspace '{}' not found", workspace_id),
            }),
            409 => Err(TfeError::Api {
                status: 409,
                message: format!(
                    "Workspace '{}' is already locked or has an active run",
                    workspace_id
                ),
            }),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(TfeError::Api {
                    status,
                    message: format!("Failed to lock workspace '{}': {}", workspace_id, body),
                })
            }
        }
    }

    /// Unlock a workspace
    pub async fn unlock_workspace(&self, workspace_id: &str) -> Result<()> {
        let url = format!(
            "{}/{}/{}/actions/unlock",
            self.base_url(),
            api::WORKSPACES,
            workspace_id
        );

        debug!("Unlocking workspace: {}", workspace_id);

        let response = self.post(&url).send().await?;

        match response.status().as_u16() {
            200 => Ok(()),
            404 => Err(TfeError::Api {
                status: 404,
                message: format!("Workspace '{}' not found", workspace_id),
            }),
            409 => Err(TfeError::Api {
                status: 409,
                message: format!(
                    "Workspace '{}' is not locked or locked by another user/run",
                    workspace_id
                ),
            }),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(TfeError::Api {
                    status,
                    message: format!("Failed to unlock workspace '{}': {}", workspace_id, body),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hcp::traits::TfeResource;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn workspace_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "id": id,
                "type": "workspaces",
                "attributes": {
                    "name": name,
                    "terraform-version": "1.5.0",
                    "working-directory": "",
                    "vcs-repo": null
                }
            }
        })
    }

    fn draft(name: &str) -> WorkspaceDraft {
        WorkspaceDraft {
            name: name.to_string(),
            terraform_version: Some("1.5.0".to_string()),
            working_directory: None,
            auto_apply: None,
            execution_mode: None,
            description: None,
            vcs_repo: None,
        }
    }

    #[tokio::test]
    async fn test_get_workspace_by_name_found() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces/web"))
            .respond_with(ResponseTemplate::new(200).set_body_json(workspace_json("ws-1", "web")))
            .mount(&mock_server)
            .await;

        let ws = client.get_workspace_by_name("acme", "web").await.unwrap();
        let ws = ws.expect("workspace should be found");
        assert_eq!(ws.id, "ws-1");
        assert_eq!(ws.name(), "web");
    }

    #[tokio::test]
    async fn test_get_workspace_by_name_missing() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces/nope"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        assert!(client
            .get_workspace_by_name("acme", "nope")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_create_org_workspace_success() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/organizations/acme/workspaces"))
            .and(body_partial_json(serde_json::json!({
                "data": { "type": "workspaces", "attributes": { "name": "web-copy" } }
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(workspace_json("ws-new", "web-copy")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let ws = client
            .create_org_workspace("acme", &draft("web-copy"))
            .await
            .unwrap();
        assert_eq!(ws.id, "ws-new");
    }

    #[tokio::test]
    async fn test_create_org_workspace_name_taken() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/organizations/acme/workspaces"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "errors": [{ "status": "422", "title": "invalid attribute", "detail": "Name has already been taken" }]
            })))
            .mount(&mock_server)
            .await;

        let err = client
            .create_org_workspace("acme", &draft("web-copy"))
            .await
            .unwrap_err();
        match err {
            TfeError::Conflict(msg) => assert!(msg.contains("web-copy")),
            other => panic!("Expected TfeError::Conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_org_workspace_other_validation_error() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/organizations/acme/workspaces"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "errors": [{ "detail": "Terraform version is not supported" }]
            })))
            .mount(&mock_server)
            .await;

        let err = client
            .create_org_workspace("acme", &draft("web-copy"))
            .await
            .unwrap_err();
        match err {
            TfeError::Api { status, message } => {
                assert_eq!(status, 422);
                assert!(message.contains("not supported"));
            }
            other => panic!("Expected TfeError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_lock_and_unlock_workspace() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/workspaces/ws-1/actions/lock"))
            .respond_with(ResponseTemplate::new(200).set_body_json(workspace_json("ws-1", "web")))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/workspaces/ws-1/actions/unlock"))
            .respond_with(ResponseTemplate::new(200).set_body_json(workspace_json("ws-1", "web")))
            .expect(1)
            .mount(&mock_server)
            .await;

        client.lock_workspace("ws-1", "test").await.unwrap();
        client.unlock_workspace("ws-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_lock_workspace_conflict() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/workspaces/ws-1/actions/lock"))
            .respond_with(ResponseTemplate::new(409))
            .mount(&mock_server)
            .await;

        match client.lock_workspace("ws-1", "test").await.unwrap_err() {
            TfeError::Api { status, .. } => assert_eq!(status, 409),
            other => panic!("Expected TfeError::Api, got {:?}", other),
        }
    }
}
