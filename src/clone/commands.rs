//! Workspace clone command handler

use log::{debug, info};

use crate::cli::{CloneWsArgs, OutputFormat};
use crate::hcp::{HostResolver, TfeClient, TokenResolver};
use crate::output::{output_report, print_stage_summary};
use crate::ui::{clear_spinner, clone_plan, confirm_action, create_spinner, finish_spinner};
use crate::Cli;

use super::config::CloneConfig;
use super::models::CloneReport;
use super::orchestrator::clone_workspace;

/// Run the workspace clone command
///
/// Returns `Ok(false)` when the clone itself failed; the failure has already
/// been reported. Setup problems (host, token, prompt) are returned as errors.
pub async fn run_clone_command(
    cli: &Cli,
    args: &CloneWsArgs,
) -> Result<bool, Box<dyn std::error::Error>> {
    let host = HostResolver::resolve(cli.host.as_deref(), cli.batch)?;
    let token_resolver = TokenResolver::new(&host);
    let source_token = token_resolver.resolve(cli.token.as_deref())?;

    let destination_token = if args.different_destination_account {
        token_resolver
            .resolve_destination(cli.destination_token.as_deref(), &source_token)
            .token
    } else {
        source_token.clone()
    };

    let config = build_config(args, source_token, destination_token);
    debug!("Clone configuration: {:?}", config);

    let confirmed = confirm_action(&clone_plan(&config), args.yes || cli.batch)?;
    if !confirmed {
        eprintln!("Clone cancelled");
        return Ok(true);
    }

    let source = TfeClient::new(config.source_api_token.clone(), host.clone());
    let destination = TfeClient::new(config.destination_api_token.clone(), host.clone());

    let spinner = create_spinner(
        &format!(
            "Cloning '{}/{}' on {}...",
            config.source_organization, config.source_workspace, host
        ),
        cli.batch,
    );

    match clone_workspace(config, &source, &destination).await {
        Ok(report) => {
            finish_spinner(spinner, "Clone completed");
            report_outcome(&report, args.output);
            info!("Clone completed");
            Ok(true)
        }
        Err(failure) => {
            clear_spinner(spinner);
            eprintln!("Error: {}", failure.error);
            report_outcome(&failure.report, args.output);
            Ok(false)
        }
    }
}

/// Print the report (stdout) and, in text mode, the stage summary (stderr)
fn report_outcome(report: &CloneReport, format: OutputFormat) {
    if format == OutputFormat::Text {
        print_stage_summary(report);
    }
    output_report(report, format);
}

/// Translate CLI arguments into a clone configuration
fn build_config(
    args: &CloneWsArgs,
    source_api_token: String,
    destination_api_token: String,
) -> CloneConfig {
    CloneConfig {
        source_organization: args.org.clone(),
        destination_organization: args.new_organization.clone(),
        source_workspace: args.source_workspace.clone(),
        destination_workspace: args.new_workspace.clone(),
        copy_state: args.copy_state,
        copy_variables: args.copy_variables,
        cross_account: args.different_destination_account,
        destination_vcs_token_id: args.new_vcs_token_id.clone(),
        source_api_token,
        destination_api_token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Command;
    use clap::Parser;

    fn parse(argv: &[&str]) -> CloneWsArgs {
        match Cli::parse_from(argv).command {
            Command::Ws(args) => args,
        }
    }

    #[test]
    fn test_build_config_same_account() {
        let args = parse(&["tfclone", "ws", "--org", "acme", "-s", "web", "-n", "copy", "-c"]);
        let config = build_config(&args, "src".to_string(), "src".to_string());

        assert_eq!(config.source_organization, "acme");
        assert_eq!(config.destination_organization(), "acme");
        assert_eq!(config.destination_workspace, "copy");
        assert!(config.copy_variables);
        assert!(!config.cross_account);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_build_config_cross_account() {
        let args = parse(&[
            "tfclone", "ws", "--org", "acme", "-s", "web", "-n", "web", "-d", "-p", "globex",
            "-v", "ot-1", "-t",
        ]);
        let config = build_config(&args, "src".to_string(), "dst".to_string());

        assert!(config.cross_account);
        assert!(config.copies_state());
        assert_eq!(config.destination_organization(), "globex");
        assert_eq!(config.destination_vcs_token_id(), Some("ot-1"));
        assert_eq!(config.destination_api_token, "dst");
        assert!(config.validate().is_ok());
    }
}
