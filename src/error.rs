use std::fmt;

/// Custom error type for TFE operations
#[derive(Debug)]
pub enum TfeError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Resource already exists (409, or 422 "has already been taken")
    Conflict(String),
    /// Token not found in any source
    TokenNotFound(String),
    /// Host not found in any source
    HostNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for TfeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfeError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TfeError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            TfeError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            TfeError::TokenNotFound(msg) => write!(f, "{}", msg),
            TfeError::HostNotFound(msg) => write!(f, "{}", msg),
            TfeError::Credentials(msg) => write!(f, "{}", msg),
            TfeError::Json(msg) => write!(f, "JSON error: {}", msg),
            TfeError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for TfeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfeError {
    fn from(err: reqwest::Error) -> Self {
        TfeError::Http(err)
    }
}

impl From<serde_json::Error> for TfeError {
    fn from(err: serde_json::Error) -> Self {
        TfeError::Json(err.to_string())
    }
}

impl From<std::io::Error> for TfeError {
    fn from(err: std::io::Error) -> Self {
        TfeError::Credentials(err.to_string())
    }
}

impl From<std::env::VarError> for TfeError {
    fn from(err: std::env::VarError) -> Self {
        TfeError::Config(err.to_string())
    }
}

/// Result type alias for TFE operations
pub type Result<T> = std::result::Result<T, TfeError>;

/// A single variable that could not be created on the destination
#[derive(Debug)]
pub struct VariableFailure {
    pub key: String,
    pub error: TfeError,
}

/// Errors raised while cloning a workspace
#[derive(Debug)]
pub enum CloneError {
    /// Configuration rejected before any API call was made
    ConfigurationInvalid(String),
    /// Source workspace does not exist
    SourceNotFound {
        organization: String,
        workspace: String,
    },
    /// A workspace with the destination name already exists
    DestinationExists {
        organization: String,
        workspace: String,
    },
    /// The destination VCS OAuth token id is unknown to the destination organization
    VcsTokenUnresolved {
        organization: String,
        token_id: String,
    },
    /// One or more variables failed to copy; the rest were attempted
    PartialVariableCopyFailure {
        failed: Vec<VariableFailure>,
        attempted: usize,
    },
    /// Latest source state could not be copied to the destination
    StateCopyFailure(TfeError),
    /// Underlying API call failed
    Transport(TfeError),
    /// Several non-fatal stages failed
    Aggregate(Vec<CloneError>),
}

impl CloneError {
    /// Fatal errors abort the clone; the rest are reported alongside a report
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CloneError::ConfigurationInvalid(_)
                | CloneError::SourceNotFound { .. }
                | CloneError::DestinationExists { .. }
                | CloneError::VcsTokenUnresolved { .. }
        )
    }
}

impl fmt::Display for CloneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloneError::ConfigurationInvalid(msg) => write!(f, "Invalid configuration: {}", msg),
            CloneError::SourceNotFound {
                organization,
                workspace,
            } => write!(
                f,
                "Source workspace '{}' not found in organization '{}'",
                workspace, organization
            ),
            CloneError::DestinationExists {
                organization,
                workspace,
            } => write!(
                f,
                "Workspace '{}' already exists in organization '{}'",
                workspace, organization
            ),
            CloneError::VcsTokenUnresolved {
                organization,
                token_id,
            } => write!(
                f,
                "VCS OAuth token '{}' not found in organization '{}'",
                token_id, organization
            ),
            CloneError::PartialVariableCopyFailure { failed, attempted } => {
                write!(
                    f,
                    "{} of {} variable(s) failed to copy: ",
                    failed.len(),
                    attempted
                )?;
                let details: Vec<String> = failed
                    .iter()
                    .map(|v| format!("{} ({})", v.key, v.error))
                    .collect();
                write!(f, "{}", details.join("; "))
            }
            CloneError::StateCopyFailure(e) => write!(f, "State copy failed: {}", e),
            CloneError::Transport(e) => write!(f, "{}", e),
            CloneError::Aggregate(errors) => {
                let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                write!(f, "{}", messages.join("; "))
            }
        }
    }
}

impl std::error::Error for CloneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CloneError::StateCopyFailure(e) | CloneError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TfeError> for CloneError {
    fn from(err: TfeError) -> Self {
        CloneError::Transport(err)
    }
}
