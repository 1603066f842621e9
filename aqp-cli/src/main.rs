//! AQP CLI - Command line client for the air quality prediction services.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "aqp-cli",
    version,
    about = "Air quality prediction form, from the command line"
)]
struct Cli {
    #[command(subcommand)]
    command: aqp_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("aqp-cli {}", env!("CARGO_PKG_VERSION"));
    aqp_cmd::run(cli.command).await
}
