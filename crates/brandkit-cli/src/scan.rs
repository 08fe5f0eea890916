//! `brand-scan`: analyze brand pages and write a signal report.

use std::path::PathBuf;

use brandkit_scraper::{analyze_urls, write_report, AnalyzeOptions, PageFetcher, Report};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "brand-scan")]
#[command(about = "Extract brand design signals from one or more web pages")]
pub struct ScanCli {
    /// Page to analyze. Repeatable; results keep this order.
    #[arg(long = "url", value_name = "URL", required = true)]
    pub urls: Vec<String>,

    /// Report destination. Missing parent directories are created.
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,

    /// Also fetch stylesheets served from other hosts.
    #[arg(long)]
    pub allow_cross_origin_css: bool,

    /// Identifier recorded in the report.
    #[arg(long, value_name = "SLUG")]
    pub brand_slug: Option<String>,
}

/// Analyzes every `--url` and writes the report, returning its path.
///
/// Per-URL failures are recorded in the report and do not fail the run.
///
/// # Errors
///
/// Returns an error if the fetcher cannot be built or the report cannot be
/// written.
pub async fn run(cli: ScanCli, config: &brandkit_core::AppConfig) -> anyhow::Result<PathBuf> {
    let fetcher = PageFetcher::new(config.scan_timeout_secs, &config.scan_user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build page fetcher: {e}"))?;
    let options = AnalyzeOptions {
        allow_cross_origin_css: cli.allow_cross_origin_css,
        ..AnalyzeOptions::default()
    };

    let results = analyze_urls(&fetcher, &cli.urls, &options).await;
    let report = Report::new(results, cli.brand_slug);
    write_report(&cli.out, &report)?;

    let failed = report.failed_count();
    if failed > 0 {
        tracing::warn!(
            failed,
            total = report.results.len(),
            "some pages could not be analyzed"
        );
    }
    Ok(cli.out)
}

#[cfg(test)]
#[path = "scan_test.rs"]
mod tests;
