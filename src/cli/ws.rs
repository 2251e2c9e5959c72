//! Workspace clone arguments

use clap::Parser;

use super::common::OutputFormat;
use crate::config::host;

/// Arguments for the 'ws' (workspace clone) subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
    tfclone ws --org acme -s web -n web-copy -c\n  \
    tfclone ws --org acme -s web -n web -d -p globex -v ot-abc123 -c -t")]
pub struct CloneWsArgs {
    /// Organization of the source workspace
    #[arg(long = "org", env = host::ORG_ENV_VAR)]
    pub org: String,

    /// Name of the workspace to clone
    #[arg(short = 's', long)]
    pub source_workspace: String,

    /// Name of the new workspace
    #[arg(short = 'n', long)]
    pub new_workspace: String,

    /// Organization of the new workspace (defaults to --org)
    #[arg(short = 'p', long)]
    pub new_organization: Option<String>,

    /// OAuth token id (`ot-...`) of the destination account's VCS connection
    #[arg(short = 'v', long)]
    pub new_vcs_token_id: Option<String>,

    /// Copy the latest state (only with --different-destination-account)
    #[arg(short = 't', long, default_value_t = false)]
    pub copy_state: bool,

    /// Copy variables (sensitive ones are created empty)
    #[arg(short = 'c', long, default_value_t = false)]
    pub copy_variables: bool,

    /// Destination lives in another account (uses the destination token)
    #[arg(
        short = 'd',
        long,
        default_value_t = false,
        requires_all = ["new_organization", "new_vcs_token_id"]
    )]
    pub different_destination_account: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
