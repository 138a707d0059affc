//! Command orchestration: configuration, logging, dispatch, exit status.

use std::process::ExitCode;

use clap::CommandFactory;
use tracing::{debug, info};

use crate::adapter::inbound::cli::command::Cli;
use crate::adapter::inbound::cli::handler::{self, CommandOutcome};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Run one parsed invocation to completion.
///
/// Loads the configuration file, initializes logging, then either prints
/// help (no subcommand) or runs exactly one wallet operation.
pub async fn execute(cli: Cli) -> ExitCode {
    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    config
        .logging
        .init(cli.log_level.filter_directive(), cli.json_logs);
    info!(level = cli.log_level.as_str(), "Logging configured");

    let Some(command) = &cli.command else {
        // stdout may be closed; nothing useful to do about it
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    let connector = bootstrap::wallet_connector(&config);
    let outcome = handler::execute(command, &connector).await;
    if outcome != CommandOutcome::Succeeded {
        debug!(?outcome, strict = cli.strict, "Command did not succeed");
    }

    ExitCode::from(outcome.exit_status(cli.strict))
}
