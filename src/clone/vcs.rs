//! VCS OAuth token mapping between accounts

use log::{debug, warn};

use crate::error::{CloneError, TfeError};
use crate::hcp::Workspace;

use super::api::CloneApi;
use super::config::CloneConfig;

/// OAuth token id the destination workspace must be bound with
///
/// `None` means the source binding (if any) is reused as-is: same-account
/// clones and workspaces without a VCS repository need no lookup.
pub async fn map_vcs_token<A: CloneApi>(
    destination: &A,
    config: &CloneConfig,
    source: &Workspace,
) -> Result<Option<String>, CloneError> {
    if !config.cross_account {
        return Ok(None);
    }
    if source.vcs_repo().is_none() {
        debug!("Source workspace has no VCS repository, no OAuth token to map");
        return Ok(None);
    }

    let organization = config.destination_organization();
    let supplied = config.destination_vcs_token_id().ok_or_else(|| {
        CloneError::ConfigurationInvalid(
            "a different destination account requires a new VCS OAuth token id".to_string(),
        )
    })?;

    match destination
        .resolve_vcs_oauth_token_id(organization, supplied)
        .await
    {
        Ok(Some(token_id)) => {
            debug!(
                "Mapped VCS OAuth token '{}' to '{}' in '{}'",
                supplied, token_id, organization
            );
            Ok(Some(token_id))
        }
        Ok(None) => Err(CloneError::VcsTokenUnresolved {
            organization: organization.to_string(),
            token_id: supplied.to_string(),
        }),
        Err(TfeError::Api { status, .. }) if status == 401 || status == 403 => {
            warn!(
                "Cannot list OAuth tokens of '{}' (status {}), using '{}' unverified",
                organization, status, supplied
            );
            Ok(Some(supplied.to_string()))
        }
        Err(e) => Err(CloneError::Transport(e)),
    }
}
