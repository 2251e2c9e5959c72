//! CLI argument parsing

mod common;
mod ws;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputFormat;
pub use ws::CloneWsArgs;

/// Clone Terraform Enterprise / HCP Terraform workspaces
#[derive(Parser, Debug)]
#[command(name = "tfclone")]
#[command(version)]
#[command(
    about = "Clone TFE/HCP Terraform workspaces, their variables and state",
    long_about = None
)]
pub struct Cli {
    /// TFE host (falls back to TFE_HOSTNAME, then the Terraform credentials file)
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// API token of the source account (overrides env vars and credentials file)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API token of the destination account (defaults to the source token)
    #[arg(long, global = true)]
    pub destination_token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Non-interactive mode: no prompts, no spinner
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Clone a workspace
    #[command(visible_alias = "workspace")]
    Ws(CloneWsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ws_args(cli: Cli) -> CloneWsArgs {
        match cli.command {
            Command::Ws(args) => args,
        }
    }

    #[test]
    fn test_cli_minimal_clone() {
        let cli = Cli::parse_from(["tfclone", "ws", "--org", "acme", "-s", "web", "-n", "copy"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(!cli.batch);
        assert!(cli.host.is_none());

        let args = ws_args(cli);
        assert_eq!(args.org, "acme");
        assert_eq!(args.source_workspace, "web");
        assert_eq!(args.new_workspace, "copy");
        assert_eq!(args.output, OutputFormat::Text);
        assert!(!args.copy_variables);
        assert!(!args.copy_state);
        assert!(!args.different_destination_account);
        assert!(args.new_organization.is_none());
    }

    #[test]
    fn test_cli_cross_account_flags() {
        let cli = Cli::parse_from([
            "tfclone", "ws", "--org", "acme", "-s", "web", "-n", "web", "-d", "-p", "globex",
            "-v", "ot-123", "-t", "-c", "-o", "json", "-y",
        ]);
        let args = ws_args(cli);
        assert!(args.different_destination_account);
        assert_eq!(args.new_organization.as_deref(), Some("globex"));
        assert_eq!(args.new_vcs_token_id.as_deref(), Some("ot-123"));
        assert!(args.copy_state);
        assert!(args.copy_variables);
        assert!(args.yes);
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "tfclone", "ws", "--org", "acme", "-s", "web", "-n", "copy", "--batch", "-H",
            "tfe.example.com", "--destination-token", "dst",
        ]);
        assert!(cli.batch);
        assert_eq!(cli.host.as_deref(), Some("tfe.example.com"));
        assert_eq!(cli.destination_token.as_deref(), Some("dst"));
    }

    #[test]
    fn test_cli_different_account_requires_org_and_token() {
        let result = Cli::try_parse_from([
            "tfclone", "ws", "--org", "acme", "-s", "web", "-n", "copy", "-d",
        ]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "tfclone", "ws", "--org", "acme", "-s", "web", "-n", "copy", "-d", "-p", "globex",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_missing_new_workspace() {
        let result = Cli::try_parse_from(["tfclone", "ws", "--org", "acme", "-s", "web"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
