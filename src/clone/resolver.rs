//! Source lookup and destination creation

use log::{debug, info};

use crate::error::{CloneError, TfeError};
use crate::hcp::{TfeResource, Workspace, WorkspaceDraft};

use super::api::CloneApi;
use super::config::CloneConfig;

/// Fetch the source workspace
pub async fn resolve_source<A: CloneApi>(
    api: &A,
    config: &CloneConfig,
) -> Result<Workspace, CloneError> {
    let org = &config.source_organization;
    let name = &config.source_workspace;
    debug!("Resolving source workspace '{}/{}'", org, name);

    match api.get_workspace(org, name).await? {
        Some(ws) => {
            debug!("Source workspace '{}/{}' is {}", org, name, ws.id());
            Ok(ws)
        }
        None => Err(CloneError::SourceNotFound {
            organization: org.clone(),
            workspace: name.clone(),
        }),
    }
}

/// Describe the destination workspace
///
/// `vcs_token_id` replaces the source's OAuth token id in cross-account
/// clones; otherwise the source binding is reused verbatim.
pub fn build_destination(
    source: &Workspace,
    config: &CloneConfig,
    vcs_token_id: Option<&str>,
) -> WorkspaceDraft {
    let draft = WorkspaceDraft::from_source(source, &config.destination_workspace);
    match vcs_token_id {
        Some(token_id) if config.cross_account => draft.with_vcs_oauth_token_id(token_id),
        _ => draft,
    }
}

/// Create the destination workspace, refusing to touch an existing one
pub async fn create_destination<A: CloneApi>(
    api: &A,
    organization: &str,
    draft: &WorkspaceDraft,
) -> Result<Workspace, CloneError> {
    let exists = || CloneError::DestinationExists {
        organization: organization.to_string(),
        workspace: draft.name.clone(),
    };

    if api.get_workspace(organization, &draft.name).await?.is_some() {
        return Err(exists());
    }

    match api.create_workspace(organization, draft).await {
        Ok(ws) => {
            info!(
                "Created workspace '{}/{}' ({})",
                organization,
                ws.name(),
                ws.id()
            );
            Ok(ws)
        }
        Err(TfeError::Conflict(msg)) => {
            debug!("Create reported a conflict: {}", msg);
            Err(exists())
        }
        Err(e) => Err(CloneError::Transport(e)),
    }
}
