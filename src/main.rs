use std::process::ExitCode;

use cdp_wallet::adapter::inbound::cli::{command::Cli, run};
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    run::execute(cli).await
}
