//! Host resolution from multiple sources

use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::host as host_config;
use crate::error::{Result, TfeError};
use crate::hcp::credentials::credentials_file_path;

/// Credentials file structure (only the host keys are needed here)
#[derive(Deserialize, Debug)]
struct TfeCredentials {
    credentials: HashMap<String, serde_json::Value>,
}

/// Host resolution with fallback logic
pub struct HostResolver;

impl HostResolver {
    /// Resolve host from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (TFE_HOSTNAME)
    /// 3. Credentials file:
    ///    - If 1 host: use it
    ///    - If multiple hosts: interactive selection (or error in batch mode)
    ///    - If no hosts: error
    pub fn resolve(cli_host: Option<&str>, batch_mode: bool) -> Result<String> {
        if let Some(host) = cli_host {
            debug!("Using host from CLI argument: {}", host);
            return Ok(host.to_string());
        }

        if let Ok(host) = std::env::var(host_config::ENV_VAR) {
            if !host.trim().is_empty() {
                debug!(
                    "Using host from {} environment variable: {}",
                    host_config::ENV_VAR,
                    host
                );
                return Ok(host);
            }
        }

        debug!(
            "No host in CLI or {}, trying credentials file",
            host_config::ENV_VAR
        );
        let credentials_path = credentials_file_path()
            .ok_or_else(|| TfeError::HostNotFound(Self::host_not_found_message(None, None)))?;
        Self::resolve_from_credentials_file(&credentials_path, batch_mode)
    }

    /// Pick a host from the Terraform credentials file
    fn resolve_from_credentials_file(credentials_path: &Path, batch_mode: bool) -> Result<String> {
        let mut hosts = Self::hosts_in_file(credentials_path)?;

        match hosts.len() {
            0 => Err(TfeError::HostNotFound(Self::host_not_found_message(
                Some(credentials_path),
                None,
            ))),
            1 => {
                let host = hosts.remove(0);
                debug!(
                    "Using single host from credentials file {}: {}",
                    credentials_path.display(),
                    host
                );
                Ok(host)
            }
            _ if batch_mode => Err(TfeError::HostNotFound(Self::host_not_found_message(
                Some(credentials_path),
                Some(&hosts),
            ))),
            _ => Self::interactive_host_selection(&hosts, credentials_path),
        }
    }

    /// Sorted host names configured in a credentials file
    fn hosts_in_file(credentials_path: &Path) -> Result<Vec<String>> {
        debug!(
            "Looking for credentials file at: {}",
            credentials_path.display()
        );

        let content = fs::read_to_string(credentials_path).map_err(|_| {
            TfeError::HostNotFound(Self::host_not_found_message(Some(credentials_path), None))
        })?;

        let creds: TfeCredentials = serde_json::from_str(&content).map_err(|e| {
            TfeError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                credentials_path.display(),
                e
            ))
        })?;

        let mut hosts: Vec<String> = creds.credentials.into_keys().collect();
        hosts.sort();
        Ok(hosts)
    }

    /// Prompt user to select a host interactively
    fn interactive_host_selection(hosts: &[String], credentials_path: &Path) -> Result<String> {
        eprintln!("\nMultiple hosts found in {}:", credentials_path.display());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a host")
            .items(hosts)
            .default(0)
            .interact()
            .map_err(|e| TfeError::HostNotFound(format!("Failed to select host: {}", e)))?;

        let host = hosts[selection].clone();
        debug!("User selected host: {}", host);
        Ok(host)
    }

    /// Generate helpful error message when host is not found
    fn host_not_found_message(
        credentials_path: Option<&Path>,
        available_hosts: Option<&[String]>,
    ) -> String {
        let creds_info = match (credentials_path, available_hosts) {
            (Some(p), Some(hosts)) => format!(
                "\n   Credentials file: {} ({} hosts found)\n   Available hosts: {}",
                p.display(),
                hosts.len(),
                hosts.join(", ")
            ),
            (Some(p), None) => {
                format!("\n   Credentials file: {} (no hosts found)", p.display())
            }
            (None, _) => "\n   Credentials file: not found".to_string(),
        };

        format!(
            "No TFE/HCP host specified. Please provide a host using one of:\n\
             \n\
             1. CLI argument:      tfclone --host <HOST>\n\
             2. Environment var:   export {}=<HOST>\n\
             3. Terraform login:   terraform login <HOST>\n\
             \n\
             Checked:{}\n",
            host_config::ENV_VAR,
            creds_info
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn credentials_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_cli_host_takes_precedence() {
        assert_eq!(
            HostResolver::resolve(Some("my-custom-host.com"), true).unwrap(),
            "my-custom-host.com"
        );
    }

    #[test]
    fn test_single_host_in_file() {
        let file = credentials_file(r#"{"credentials": {"tfe.acme.io": {"token": "t"}}}"#);
        let host = HostResolver::resolve_from_credentials_file(file.path(), true).unwrap();
        assert_eq!(host, "tfe.acme.io");
    }

    #[test]
    fn test_multiple_hosts_in_batch_mode_is_error() {
        let file = credentials_file(
            r#"{"credentials": {"b.example.com": {"token": "t"}, "a.example.com": {"token": "t"}}}"#,
        );
        match HostResolver::resolve_from_credentials_file(file.path(), true).unwrap_err() {
            TfeError::HostNotFound(msg) => {
                assert!(msg.contains("a.example.com, b.example.com"));
                assert!(msg.contains("2 hosts found"));
            }
            other => panic!("Expected TfeError::HostNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_credentials_file() {
        let file = credentials_file(r#"{"credentials": {}}"#);
        let result = HostResolver::resolve_from_credentials_file(file.path(), true);
        assert!(matches!(result, Err(TfeError::HostNotFound(_))));
    }

    #[test]
    fn test_host_not_found_message_format() {
        let msg = HostResolver::host_not_found_message(None, None);
        assert!(msg.contains("tfclone --host"));
        assert!(msg.contains(host_config::ENV_VAR));
        assert!(msg.contains("terraform login"));
    }
}
