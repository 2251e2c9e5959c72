//! Variable replication

use futures::stream::{self, StreamExt};
use log::{debug, warn};

use crate::config::api;
use crate::error::{CloneError, VariableFailure};
use crate::hcp::VariableDraft;

use super::api::CloneApi;

/// Result of copying the variables of one workspace
#[derive(Debug, Default)]
pub struct VariableCopy {
    /// Number of variables listed on the source
    pub attempted: usize,
    pub created: usize,
    /// Keys of sensitive variables, in source order, created or not
    pub sensitive_keys: Vec<String>,
    pub failures: Vec<VariableFailure>,
}

impl VariableCopy {
    /// Aggregated error when any creation failed
    pub fn into_error(self) -> Option<CloneError> {
        if self.failures.is_empty() {
            None
        } else {
            Some(CloneError::PartialVariableCopyFailure {
                failed: self.failures,
                attempted: self.attempted,
            })
        }
    }
}

/// Copy every variable of `source_ws` to `destination_ws`
///
/// Sensitive variables become empty placeholders. Creations run with bounded
/// concurrency and a failed creation never stops the others. Only a failure
/// to list the source variables is returned as an error.
pub async fn copy_variables<S: CloneApi, D: CloneApi>(
    source: &S,
    destination: &D,
    source_ws: &str,
    destination_ws: &str,
) -> Result<VariableCopy, CloneError> {
    let variables = source.list_variables(source_ws).await?;
    debug!(
        "Copying {} variable(s) from {} to {}",
        variables.len(),
        source_ws,
        destination_ws
    );

    let drafts: Vec<VariableDraft> = variables.iter().map(VariableDraft::copy_of).collect();

    let results: Vec<_> = stream::iter(drafts.iter().map(|draft| async move {
        let created = destination.create_variable(destination_ws, draft).await;
        (draft, created)
    }))
    .buffered(api::MAX_CONCURRENT_VARIABLE_WRITES)
    .collect()
    .await;

    let mut copy = VariableCopy {
        attempted: drafts.len(),
        ..Default::default()
    };

    for (draft, created) in results {
        if draft.sensitive {
            copy.sensitive_keys.push(draft.key.clone());
        }
        match created {
            Ok(_) => copy.created += 1,
            Err(e) => {
                warn!("Failed to create variable '{}': {}", draft.key, e);
                copy.failures.push(VariableFailure {
                    key: draft.key.clone(),
                    error: e,
                });
            }
        }
    }

    debug!(
        "Created {}/{} variable(s), {} sensitive",
        copy.created,
        copy.attempted,
        copy.sensitive_keys.len()
    );
    Ok(copy)
}
