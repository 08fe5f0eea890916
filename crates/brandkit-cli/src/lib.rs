//! Shared plumbing for the `brand-scan` and `install-trending` binaries.

pub mod install;
pub mod scan;

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `config.log_level` is used. Logs go
/// to stderr so stdout carries only user-facing output.
///
/// # Errors
///
/// Returns an error if neither filter source parses.
pub fn init_tracing(config: &brandkit_core::AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
