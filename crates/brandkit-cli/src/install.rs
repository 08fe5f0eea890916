//! `install-trending`: install entries from the trending skills listing.

use std::process::ExitCode;

use brandkit_scraper::PageFetcher;
use brandkit_skills::{fetch_trending, run_plan, InstallOptions, InstallPlan, RunMode, RunSummary};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "install-trending")]
#[command(about = "Install trending skills via the skills CLI (dry run unless --apply)")]
pub struct InstallCli {
    /// Trending listing page. Defaults to `BRANDKIT_TRENDING_URL`.
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Agent to target (e.g. claude-code). Repeatable.
    #[arg(long = "agent", value_name = "AGENT")]
    pub agents: Vec<String>,

    /// Install globally (user-level) instead of project-level.
    #[arg(long)]
    pub global: bool,

    /// Only install entries from this source repo. Repeatable.
    #[arg(long = "source", value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Cap on matched entries (0 = no cap).
    #[arg(long, default_value_t = 0)]
    pub limit: usize,

    /// Actually run installs. Without it, commands are only printed.
    #[arg(long)]
    pub apply: bool,

    /// Pass -y to the skills CLI (default).
    #[arg(long, overrides_with = "no_yes")]
    pub yes: bool,

    /// Do not pass -y to the skills CLI.
    #[arg(long, overrides_with = "yes")]
    pub no_yes: bool,
}

impl InstallCli {
    #[must_use]
    pub fn pass_yes(&self) -> bool {
        !self.no_yes
    }

    #[must_use]
    pub fn mode(&self) -> RunMode {
        if self.apply {
            RunMode::Apply
        } else {
            RunMode::DryRun
        }
    }

    #[must_use]
    pub fn install_options(&self, launcher: &str) -> InstallOptions {
        InstallOptions {
            agents: self.agents.clone(),
            global: self.global,
            sources: self.sources.clone(),
            limit: self.limit,
            pass_yes: self.pass_yes(),
            launcher: launcher.to_string(),
        }
    }
}

/// Fetches the listing, builds the plan and runs it in the selected mode.
///
/// # Errors
///
/// Returns an error if the listing cannot be fetched or parsed, or stdout
/// cannot be written. Failed installs are reported through the exit code.
pub async fn run(cli: &InstallCli, config: &brandkit_core::AppConfig) -> anyhow::Result<ExitCode> {
    let url = cli.url.as_deref().unwrap_or(&config.trending_url);
    let fetcher = PageFetcher::new(config.trending_timeout_secs, &config.trending_user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build trending fetcher: {e}"))?;

    let skills = fetch_trending(&fetcher, url).await?;
    let plan = InstallPlan::build(&skills, &cli.install_options(&config.skills_launcher));

    let mut stdout = std::io::stdout();
    let summary = run_plan(&plan, cli.mode(), &mut stdout).await?;

    match summary {
        RunSummary::NothingMatched => println!("{summary}"),
        RunSummary::Failed { .. } => eprintln!("\n{summary}"),
        RunSummary::DryRun { .. } | RunSummary::Installed { .. } => println!("\n{summary}"),
    }

    Ok(if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
#[path = "install_test.rs"]
mod tests;
