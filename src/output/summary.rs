//! Stage status summary table

use comfy_table::{presets::NOTHING, Table};

use crate::clone::CloneReport;

/// Build the per-stage status table of a report
pub fn stage_summary_table(report: &CloneReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["Stage", "Status", "Detail"]);

    for outcome in &report.stages {
        table.add_row(vec![
            outcome.stage.to_string(),
            outcome.status.to_string(),
            outcome.detail.clone().unwrap_or_default(),
        ]);
    }

    table
}

/// Print the stage summary to stderr
pub fn print_stage_summary(report: &CloneReport) {
    if report.stages.is_empty() {
        return;
    }
    eprintln!("{}", stage_summary_table(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clone::{Stage, StageOutcome, StageStatus};

    #[test]
    fn test_summary_rows() {
        let report = CloneReport {
            stages: vec![
                StageOutcome {
                    stage: Stage::Validate,
                    status: StageStatus::Completed,
                    detail: None,
                },
                StageOutcome {
                    stage: Stage::CopyState,
                    status: StageStatus::Skipped,
                    detail: Some("not requested".to_string()),
                },
            ],
            ..Default::default()
        };

        let rendered = stage_summary_table(&report).to_string();
        assert!(rendered.contains("validate"));
        assert!(rendered.contains("completed"));
        assert!(rendered.contains("copy-state"));
        assert!(rendered.contains("not requested"));
    }

    #[test]
    fn test_print_empty_summary() {
        // Should not panic
        print_stage_summary(&CloneReport::default());
    }
}
