//! Executes (or previews) an [`InstallPlan`].

use std::fmt;
use std::io::Write;
use std::process::ExitStatus;

use crate::error::SkillsError;
use crate::plan::{InstallCommand, InstallPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Print each command without running it.
    DryRun,
    /// Run each command and wait for it to exit.
    Apply,
}

/// Final state of a run. `Display` renders the closing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSummary {
    NothingMatched,
    DryRun { matched: usize, installable: usize },
    Installed { installable: usize },
    Failed { failures: usize, installable: usize },
}

impl RunSummary {
    #[must_use]
    pub fn is_success(&self) -> bool {
        !matches!(self, RunSummary::Failed { .. })
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunSummary::NothingMatched => write!(f, "No trending skills matched the filters."),
            RunSummary::DryRun {
                matched,
                installable,
            } => write!(
                f,
                "Dry run complete. Matched entries: {matched}. Installable entries: {installable}. \
                 Re-run with --apply to install."
            ),
            RunSummary::Installed { installable } => {
                write!(f, "Installed trending entries: {installable}")
            }
            RunSummary::Failed {
                failures,
                installable,
            } => write!(f, "Completed with failures: {failures}/{installable}"),
        }
    }
}

/// Walks the plan in order, writing a header per command to `out`.
///
/// In [`RunMode::DryRun`] each header is followed by `$ <shell line>` and
/// nothing is spawned. In [`RunMode::Apply`] each command runs to completion
/// with inherited stdio before the next starts; a non-zero exit or a spawn
/// failure counts as one failure and the run continues.
///
/// The closing message is left to the caller via the returned summary.
///
/// # Errors
///
/// Returns [`SkillsError::Output`] if writing to `out` fails.
pub async fn run_plan<W: Write>(
    plan: &InstallPlan,
    mode: RunMode,
    out: &mut W,
) -> Result<RunSummary, SkillsError> {
    if plan.is_empty() {
        return Ok(RunSummary::NothingMatched);
    }

    let mut failures = 0usize;
    for command in &plan.commands {
        writeln!(out, "\n{}", command.header()).map_err(SkillsError::Output)?;
        match mode {
            RunMode::DryRun => {
                writeln!(out, "$ {}", command.shell_line()).map_err(SkillsError::Output)?;
            }
            RunMode::Apply => {
                out.flush().map_err(SkillsError::Output)?;
                match spawn_install(command).await {
                    Ok(status) if status.success() => {
                        tracing::info!(source = %command.source, skill = %command.skill_id, "installed");
                    }
                    Ok(status) => {
                        failures += 1;
                        tracing::warn!(
                            source = %command.source,
                            skill = %command.skill_id,
                            %status,
                            "install command failed"
                        );
                    }
                    Err(e) => {
                        failures += 1;
                        tracing::warn!(skill = %command.skill_id, error = %e, "install command failed");
                    }
                }
            }
        }
    }

    let installable = plan.installable();
    Ok(match mode {
        RunMode::DryRun => RunSummary::DryRun {
            matched: plan.matched,
            installable,
        },
        RunMode::Apply if failures > 0 => RunSummary::Failed {
            failures,
            installable,
        },
        RunMode::Apply => RunSummary::Installed { installable },
    })
}

async fn spawn_install(command: &InstallCommand) -> Result<ExitStatus, SkillsError> {
    let mut child = tokio::process::Command::new(command.program());
    child.args(command.args());
    child.status().await.map_err(|source| SkillsError::Spawn {
        program: command.program().to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
