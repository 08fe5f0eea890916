use std::process::ExitCode;

use brandkit_cli::install::{self, InstallCli};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = InstallCli::parse();
    let config = brandkit_core::load_app_config()?;
    brandkit_cli::init_tracing(&config)?;

    install::run(&cli, &config).await
}
