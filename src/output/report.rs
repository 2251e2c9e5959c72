//! Clone report formatter

use crate::clone::CloneReport;
use crate::cli::OutputFormat;
use crate::error::{Result, TfeError};

/// Render a report in the requested format
///
/// Text output is the sensitive variable names, one per line; the structured
/// formats carry the whole report.
pub fn render_report(report: &CloneReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.sensitive_variable_names.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => serde_yml::to_string(report)
            .map_err(|e| TfeError::Json(format!("Error serializing to YAML: {}", e))),
    }
}

/// Print a report to stdout
///
/// Text mode prints nothing when there are no sensitive variables.
pub fn output_report(report: &CloneReport, format: OutputFormat) {
    match render_report(report, format) {
        Ok(rendered) if rendered.is_empty() => {}
        Ok(rendered) => println!("{}", rendered),
        Err(e) => eprintln!("{}", e),
    }
}
