/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Workspace variables endpoint (nested under a workspace)
    pub const VARS: &str = "vars";

    /// State versions endpoint (nested under a workspace)
    pub const STATE_VERSIONS: &str = "state-versions";

    /// OAuth tokens endpoint (nested under an organization)
    pub const OAUTH_TOKENS: &str = "oauth-tokens";

    /// JSON:API media type used for request bodies
    pub const CONTENT_TYPE: &str = "application/vnd.api+json";

    /// Default page size for API requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Maximum concurrent page requests when paginating
    pub const MAX_CONCURRENT_PAGE_REQUESTS: usize = 10;

    /// Maximum concurrent variable creations against the destination
    pub const MAX_CONCURRENT_VARIABLE_WRITES: usize = 4;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file name
    pub const FILE_NAME: &str = "terraform.d/credentials.tfrc.json";

    /// Path to Terraform credentials file on Unix (relative to HOME)
    pub const FILE_PATH_UNIX: &str = ".terraform.d/credentials.tfrc.json";

    /// Environment variable names for the source token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["HCP_TOKEN", "TFC_TOKEN", "TFE_TOKEN"];

    /// Environment variable names for the destination token (checked in order)
    pub const DESTINATION_TOKEN_ENV_VARS: &[&str] =
        &["HCP_TOKEN_DESTINATION", "TFE_TOKEN_DESTINATION"];
}

/// Configuration constants for host resolution
pub mod host {
    /// Environment variable for TFE host
    pub const ENV_VAR: &str = "TFE_HOSTNAME";

    /// Environment variable for the default source organization
    pub const ORG_ENV_VAR: &str = "TFE_ORG";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_path_format() {
        assert!(api::BASE_PATH.starts_with('/'));
    }

    #[test]
    fn test_credentials_env_vars() {
        assert_eq!(
            credentials::TOKEN_ENV_VARS,
            &["HCP_TOKEN", "TFC_TOKEN", "TFE_TOKEN"]
        );
    }

    #[test]
    fn test_destination_env_vars_are_distinct() {
        for var in credentials::DESTINATION_TOKEN_ENV_VARS {
            assert!(!credentials::TOKEN_ENV_VARS.contains(var));
        }
    }

    #[test]
    fn test_variable_concurrency_is_bounded() {
        assert!(api::MAX_CONCURRENT_VARIABLE_WRITES >= 1);
        assert!(api::MAX_CONCURRENT_VARIABLE_WRITES <= api::MAX_CONCURRENT_PAGE_REQUESTS);
    }
}
