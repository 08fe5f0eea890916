use brandkit_cli::scan::{self, ScanCli};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = ScanCli::parse();
    let config = brandkit_core::load_app_config()?;
    brandkit_cli::init_tracing(&config)?;

    let path = scan::run(cli, &config).await?;
    println!("Wrote {}", path.display());
    Ok(())
}
