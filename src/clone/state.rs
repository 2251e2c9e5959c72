//! State replication between accounts

use log::{debug, info};

use crate::error::CloneError;

use super::api::CloneApi;

/// Copy the latest state of `source_ws` to `destination_ws`
///
/// Returns the copied serial, or `None` when the source has no state.
pub async fn copy_state<S: CloneApi, D: CloneApi>(
    source: &S,
    destination: &D,
    source_ws: &str,
    destination_ws: &str,
) -> Result<Option<u64>, CloneError> {
    let snapshot = source
        .get_latest_state_version(source_ws)
        .await
        .map_err(CloneError::StateCopyFailure)?;

    let Some(snapshot) = snapshot else {
        info!("Workspace {} has no state, nothing to copy", source_ws);
        return Ok(None);
    };

    debug!(
        "Uploading state serial {} ({} bytes, md5 {}) to {}",
        snapshot.serial,
        snapshot.payload.len(),
        snapshot.md5,
        destination_ws
    );

    destination
        .create_state_version(destination_ws, &snapshot)
        .await
        .map_err(CloneError::StateCopyFailure)?;

    Ok(Some(snapshot.serial))
}
