//! TFE token resolution from multiple sources

use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{Result, TfeError};

/// Credentials file structure
#[derive(Deserialize, Debug)]
struct TfeCredentials {
    credentials: HashMap<String, TfeCredential>,
}

/// Single credential entry
#[derive(Deserialize, Debug)]
struct TfeCredential {
    token: String,
}

/// Token used for destination writes, and whether it was borrowed from the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationToken {
    pub token: String,
    pub from_source: bool,
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
}

impl TokenResolver {
    /// Create a new token resolver for the given host
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
        }
    }

    /// Resolve the source account token:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (HCP_TOKEN, TFC_TOKEN, TFE_TOKEN - in order)
    /// 3. Credentials file (~/.terraform.d/credentials.tfrc.json)
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = non_empty(cli_token) {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        if let Some(token) = first_env_var(credentials::TOKEN_ENV_VARS) {
            return Ok(token);
        }

        debug!(
            "No token found in environment variables {:?}, trying credentials file",
            credentials::TOKEN_ENV_VARS
        );
        self.read_from_credentials_file()
    }

    /// Resolve the destination account token:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (HCP_TOKEN_DESTINATION, TFE_TOKEN_DESTINATION)
    /// 3. The source token, with a warning
    pub fn resolve_destination(
        &self,
        cli_token: Option<&str>,
        source_token: &str,
    ) -> DestinationToken {
        if let Some(token) = non_empty(cli_token) {
            debug!("Using destination token from CLI argument");
            return DestinationToken {
                token: token.to_string(),
                from_source: false,
            };
        }

        if let Some(token) = first_env_var(credentials::DESTINATION_TOKEN_ENV_VARS) {
            return DestinationToken {
                token,
                from_source: false,
            };
        }

        warn!(
            "None of {:?} is set, using the source token for the destination account",
            credentials::DESTINATION_TOKEN_ENV_VARS
        );
        DestinationToken {
            token: source_token.to_string(),
            from_source: true,
        }
    }

    /// Read token from Terraform credentials file
    fn read_from_credentials_file(&self) -> Result<String> {
        let credentials_path = credentials_file_path()
            .ok_or_else(|| TfeError::TokenNotFound(self.token_not_found_message(None)))?;
        self.read_token_from(&credentials_path)
    }

    /// Read the token for this host from a credentials file at `path`
    fn read_token_from(&self, path: &Path) -> Result<String> {
        debug!("Looking for credentials file at: {}", path.display());

        let content = fs::read_to_string(path)
            .map_err(|_| TfeError::TokenNotFound(self.token_not_found_message(Some(path))))?;

        let creds: TfeCredentials = serde_json::from_str(&content).map_err(|e| {
            TfeError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        creds
            .credentials
            .get(&self.host)
            .map(|cred| {
                debug!(
                    "Using token from credentials file {} for host: {}",
                    path.display(),
                    self.host
                );
                cred.token.clone()
            })
            .ok_or_else(|| TfeError::TokenNotFound(self.token_not_found_message(Some(path))))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self, credentials_path: Option<&Path>) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        let creds_info = credentials_path
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API token found for host '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      tfclone --token <TOKEN>\n\
             2. Environment var:   export HCP_TOKEN=<TOKEN>  (also: TFC_TOKEN, TFE_TOKEN)\n\
             3. Terraform login:   terraform login {}\n\
             \n\
             Checked: env vars [{}]{}",
            self.host, self.host, env_vars, creds_info
        )
    }
}

/// First non-empty environment variable among `names`
fn first_env_var(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            debug!("Using token from {} environment variable", name);
            Some(value)
        }
        _ => None,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Get the path to Terraform credentials file (platform-specific)
/// - Windows: %APPDATA%\terraform.d\credentials.tfrc.json
/// - Linux/macOS: ~/.terraform.d/credentials.tfrc.json
pub(crate) fn credentials_file_path() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        dirs::config_dir().map(|p| p.join(credentials::FILE_NAME))
    }

    #[cfg(not(windows))]
    {
        dirs::home_dir().map(|p| p.join(credentials::FILE_PATH_UNIX))
    }
}
