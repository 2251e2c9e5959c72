//! Clone report and stage bookkeeping

use std::fmt;

use serde::Serialize;

use crate::error::CloneError;

/// Ordered steps of a clone
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Validate,
    ResolveSource,
    CreateDestination,
    CopyVariables,
    CopyState,
    Report,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Validate => "validate",
            Stage::ResolveSource => "resolve-source",
            Stage::CreateDestination => "create-destination",
            Stage::CopyVariables => "copy-variables",
            Stage::CopyState => "copy-state",
            Stage::Report => "report",
        };
        write!(f, "{}", label)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Completed,
    Skipped,
    Failed,
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageStatus::Completed => write!(f, "completed"),
            StageStatus::Skipped => write!(f, "skipped"),
            StageStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Outcome of a single stage
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    pub stage: Stage,
    pub status: StageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// What a clone did, including the variables the operator must fill in
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneReport {
    /// Keys of sensitive variables created with an empty value, in source order
    pub sensitive_variable_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_workspace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_workspace_id: Option<String>,
    pub variables_created: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_serial: Option<u64>,
    pub stages: Vec<StageOutcome>,
}

impl CloneReport {
    pub(crate) fn record(&mut self, stage: Stage, status: StageStatus, detail: Option<String>) {
        self.stages.push(StageOutcome {
            stage,
            status,
            detail,
        });
    }

    /// Outcome of `stage`, if it was reached
    pub fn outcome(&self, stage: Stage) -> Option<&StageOutcome> {
        self.stages.iter().find(|o| o.stage == stage)
    }

    /// Status of `stage`, if it was reached
    pub fn status(&self, stage: Stage) -> Option<StageStatus> {
        self.outcome(stage).map(|o| o.status)
    }
}

/// A failed clone together with everything it managed to do
#[derive(Debug)]
pub struct CloneFailure {
    pub error: CloneError,
    pub report: CloneReport,
}

impl fmt::Display for CloneFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for CloneFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_lookup() {
        let mut report = CloneReport::default();
        report.record(Stage::Validate, StageStatus::Completed, None);
        report.record(
            Stage::CopyState,
            StageStatus::Skipped,
            Some("not requested".to_string()),
        );

        assert_eq!(report.status(Stage::Validate), Some(StageStatus::Completed));
        assert_eq!(report.status(Stage::CopyState), Some(StageStatus::Skipped));
        assert_eq!(report.status(Stage::CopyVariables), None);
        assert_eq!(
            report.outcome(Stage::CopyState).unwrap().detail.as_deref(),
            Some("not requested")
        );
    }

    #[test]
    fn test_report_serialization() {
        let mut report = CloneReport {
            sensitive_variable_names: vec!["API_KEY".to_string()],
            destination_organization: Some("acme".to_string()),
            destination_workspace: Some("web-copy".to_string()),
            variables_created: 2,
            ..Default::default()
        };
        report.record(Stage::ResolveSource, StageStatus::Completed, None);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sensitive_variable_names"][0], "API_KEY");
        assert_eq!(json["variables_created"], 2);
        assert_eq!(json["stages"][0]["stage"], "resolve-source");
        assert_eq!(json["stages"][0]["status"], "completed");
        assert!(json.get("state_serial").is_none());
        assert!(json["stages"][0].get("detail").is_none());
    }

    #[test]
    fn test_stage_display_matches_serialization() {
        for stage in [
            Stage::Validate,
            Stage::ResolveSource,
            Stage::CreateDestination,
            Stage::CopyVariables,
            Stage::CopyState,
            Stage::Report,
        ] {
            let serialized = serde_json::to_value(stage).unwrap();
            assert_eq!(serialized, stage.to_string());
        }
    }

    #[test]
    fn test_failure_displays_error() {
        let failure = CloneFailure {
            error: CloneError::ConfigurationInvalid("boom".to_string()),
            report: CloneReport::default(),
        };
        assert_eq!(failure.to_string(), "Invalid configuration: boom");
    }
}
