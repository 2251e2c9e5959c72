//! Clone orchestration: stage sequencing and report assembly

use log::{debug, info, warn};

use crate::error::CloneError;
use crate::hcp::TfeResource;

use super::api::CloneApi;
use super::config::CloneConfig;
use super::models::{CloneFailure, CloneReport, Stage, StageStatus};
use super::{resolver, state, variables, vcs};

/// Clone a workspace from `source` to `destination`
///
/// Stages run in order: validate, resolve source, create destination, copy
/// variables, copy state. Validation and the first two remote stages are
/// fatal. Variable and state copy failures are collected and returned with
/// the report. The destination is never deleted on failure.
pub async fn clone_workspace<S: CloneApi, D: CloneApi>(
    config: CloneConfig,
    source: &S,
    destination: &D,
) -> Result<CloneReport, CloneFailure> {
    let mut report = CloneReport::default();
    debug!("Cloning with {:?}", config);

    if let Err(e) = config.validate() {
        return Err(fail(report, Stage::Validate, e));
    }
    report.record(Stage::Validate, StageStatus::Completed, None);

    let dest_org = config.destination_organization().to_string();
    report.destination_organization = Some(dest_org.clone());
    report.destination_workspace = Some(config.destination_workspace.clone());

    let source_ws = match resolver::resolve_source(source, &config).await {
        Ok(ws) => ws,
        Err(e) => return Err(fail(report, Stage::ResolveSource, e)),
    };
    report.record(
        Stage::ResolveSource,
        StageStatus::Completed,
        Some(source_ws.id().to_string()),
    );

    let vcs_token_id = match vcs::map_vcs_token(destination, &config, &source_ws).await {
        Ok(token_id) => token_id,
        Err(e) => return Err(fail(report, Stage::CreateDestination, e)),
    };
    let draft = resolver::build_destination(&source_ws, &config, vcs_token_id.as_deref());
    let dest_ws = match resolver::create_destination(destination, &dest_org, &draft).await {
        Ok(ws) => ws,
        Err(e) => return Err(fail(report, Stage::CreateDestination, e)),
    };
    report.destination_workspace_id = Some(dest_ws.id().to_string());
    report.record(
        Stage::CreateDestination,
        StageStatus::Completed,
        Some(dest_ws.id().to_string()),
    );

    let mut errors: Vec<CloneError> = Vec::new();

    if config.copy_variables {
        match variables::copy_variables(source, destination, source_ws.id(), dest_ws.id()).await {
            Ok(mut copy) => {
                report.sensitive_variable_names = std::mem::take(&mut copy.sensitive_keys);
                report.variables_created = copy.created;
                let summary = format!("{} of {} created", copy.created, copy.attempted);
                match copy.into_error() {
                    None => report.record(Stage::CopyVariables, StageStatus::Completed, Some(summary)),
                    Some(e) => {
                        report.record(Stage::CopyVariables, StageStatus::Failed, Some(summary));
                        errors.push(e);
                    }
                }
            }
            Err(e) => {
                warn!("Variable copy failed: {}", e);
                report.record(Stage::CopyVariables, StageStatus::Failed, Some(e.to_string()));
                errors.push(e);
            }
        }
    } else {
        report.record(
            Stage::CopyVariables,
            StageStatus::Skipped,
            Some("not requested".to_string()),
        );
    }

    if config.copies_state() {
        match state::copy_state(source, destination, source_ws.id(), dest_ws.id()).await {
            Ok(Some(serial)) => {
                report.state_serial = Some(serial);
                report.record(
                    Stage::CopyState,
                    StageStatus::Completed,
                    Some(format!("serial {}", serial)),
                );
            }
            Ok(None) => report.record(
                Stage::CopyState,
                StageStatus::Completed,
                Some("source has no state".to_string()),
            ),
            Err(e) => {
                warn!("State copy failed: {}", e);
                report.record(Stage::CopyState, StageStatus::Failed, Some(e.to_string()));
                errors.push(e);
            }
        }
    } else {
        let reason = if config.copy_state {
            "state is only copied to a different account"
        } else {
            "not requested"
        };
        report.record(Stage::CopyState, StageStatus::Skipped, Some(reason.to_string()));
    }

    report.record(Stage::Report, StageStatus::Completed, None);

    let error = match errors.len() {
        0 => {
            info!(
                "Cloned '{}/{}' to '{}/{}'",
                config.source_organization,
                config.source_workspace,
                dest_org,
                config.destination_workspace
            );
            return Ok(report);
        }
        1 => errors.remove(0),
        _ => CloneError::Aggregate(errors),
    };
    Err(CloneFailure { error, report })
}

/// Record a fatal stage failure and wrap the partial report
fn fail(mut report: CloneReport, stage: Stage, error: CloneError) -> CloneFailure {
    warn!("Stage {} failed: {}", stage, error);
    report.record(stage, StageStatus::Failed, Some(error.to_string()));
    CloneFailure { error, report }
}
