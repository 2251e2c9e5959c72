//! tfclone - Main entry point

use clap::Parser;
use log::{debug, info};

use tfclone::{run_clone_command, Cli, Command};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfclone v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: host={:?}, batch={}, log_level={}",
        cli.host, cli.batch, cli.log_level
    );

    let result = match &cli.command {
        Command::Ws(args) => run_clone_command(&cli, args).await,
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
