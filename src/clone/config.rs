//! Clone configuration and its invariants

use std::fmt;

use crate::error::CloneError;

/// Everything needed to clone one workspace
///
/// Built once by the caller and never mutated by the clone.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CloneConfig {
    pub source_organization: String,
    /// Defaults to `source_organization` when unset
    pub destination_organization: Option<String>,
    pub source_workspace: String,
    pub destination_workspace: String,
    pub copy_state: bool,
    pub copy_variables: bool,
    /// Source and destination live in different accounts (different tokens)
    pub cross_account: bool,
    /// OAuth token id (`ot-...`) of the destination account's VCS connection
    pub destination_vcs_token_id: Option<String>,
    pub source_api_token: String,
    pub destination_api_token: String,
}

impl CloneConfig {
    /// Organization the new workspace is created in
    pub fn destination_organization(&self) -> &str {
        self.destination_organization
            .as_deref()
            .map(str::trim)
            .filter(|org| !org.is_empty())
            .unwrap_or(&self.source_organization)
    }

    /// Supplied destination VCS token id, if non-blank
    pub fn destination_vcs_token_id(&self) -> Option<&str> {
        self.destination_vcs_token_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// State is only copied between accounts
    pub fn copies_state(&self) -> bool {
        self.copy_state && self.cross_account
    }

    /// Check every invariant; no remote call is made
    pub fn validate(&self) -> Result<(), CloneError> {
        let required = [
            ("source organization", &self.source_organization),
            ("source workspace", &self.source_workspace),
            ("new workspace", &self.destination_workspace),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(CloneError::ConfigurationInvalid(format!(
                    "{} must not be empty",
                    label
                )));
            }
        }

        if self.cross_account {
            let has_org = self
                .destination_organization
                .as_deref()
                .is_some_and(|org| !org.trim().is_empty());
            if !has_org {
                return Err(CloneError::ConfigurationInvalid(
                    "a different destination account requires a new organization".to_string(),
                ));
            }
            if self.destination_vcs_token_id().is_none() {
                return Err(CloneError::ConfigurationInvalid(
                    "a different destination account requires a new VCS OAuth token id"
                        .to_string(),
                ));
            }
        }

        // TFE names are case-insensitive
        if self
            .destination_organization()
            .eq_ignore_ascii_case(&self.source_organization)
            && self
                .destination_workspace
                .eq_ignore_ascii_case(&self.source_workspace)
        {
            return Err(CloneError::ConfigurationInvalid(format!(
                "workspace '{}' cannot be cloned onto itself in organization '{}'",
                self.source_workspace, self.source_organization
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for CloneConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloneConfig")
            .field("source_organization", &self.source_organization)
            .field("destination_organization", &self.destination_organization)
            .field("source_workspace", &self.source_workspace)
            .field("destination_workspace", &self.destination_workspace)
            .field("copy_state", &self.copy_state)
            .field("copy_variables", &self.copy_variables)
            .field("cross_account", &self.cross_account)
            .field("destination_vcs_token_id", &self.destination_vcs_token_id)
            .field("source_api_token", &"<redacted>")
            .field("destination_api_token", &"<redacted>")
            .finish()
    }
}
