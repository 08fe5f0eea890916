//! Turning trending entries into install commands.

use crate::trending::TrendingSkill;

/// Launcher used when none is configured.
pub const DEFAULT_LAUNCHER: &str = "npx";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    /// Agents passed after a single `--agent` flag.
    pub agents: Vec<String>,
    /// Install at user level (`-g`) instead of project level.
    pub global: bool,
    /// Keep only entries from these sources. Empty keeps everything.
    pub sources: Vec<String>,
    /// Cap on matched entries; `0` means no cap.
    pub limit: usize,
    /// Forward `-y` to the skills CLI.
    pub pass_yes: bool,
    pub launcher: String,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            agents: Vec::new(),
            global: false,
            sources: Vec::new(),
            limit: 0,
            pass_yes: true,
            launcher: DEFAULT_LAUNCHER.to_string(),
        }
    }
}

/// One install invocation for a single trending entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub name: Option<String>,
    pub source: String,
    pub skill_id: String,
    pub installs: Option<String>,
    /// Program followed by its arguments.
    pub argv: Vec<String>,
}

impl InstallCommand {
    #[must_use]
    pub fn program(&self) -> &str {
        self.argv.first().map_or("", String::as_str)
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }

    /// `# <name> (<source>/<skill_id>) installs=<n>`, with `?` for
    /// missing values.
    #[must_use]
    pub fn header(&self) -> String {
        format!(
            "# {} ({}/{}) installs={}",
            self.name.as_deref().unwrap_or("?"),
            self.source,
            self.skill_id,
            self.installs.as_deref().unwrap_or("?"),
        )
    }

    /// The command as a line a POSIX shell would run unchanged.
    #[must_use]
    pub fn shell_line(&self) -> String {
        self.argv
            .iter()
            .map(|arg| shell_quote(arg))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    /// Entries left after source filtering and the limit.
    pub matched: usize,
    /// Commands for matched entries that carry both a source and a skill id.
    pub commands: Vec<InstallCommand>,
}

impl InstallPlan {
    /// Filters by source first, then applies the limit, then builds one
    /// command per entry that has both `source` and `skill_id`.
    #[must_use]
    pub fn build(skills: &[TrendingSkill], options: &InstallOptions) -> Self {
        let mut matched: Vec<&TrendingSkill> = skills
            .iter()
            .filter(|skill| {
                options.sources.is_empty()
                    || skill
                        .source
                        .as_ref()
                        .is_some_and(|s| options.sources.contains(s))
            })
            .collect();
        if options.limit > 0 {
            matched.truncate(options.limit);
        }

        let base = base_command(options);
        let commands = matched
            .iter()
            .filter_map(|skill| {
                let source = skill.source.as_deref().filter(|s| !s.is_empty());
                let skill_id = skill.skill_id.as_deref().filter(|s| !s.is_empty());
                let (Some(source), Some(skill_id)) = (source, skill_id) else {
                    tracing::debug!(name = ?skill.name, "skipping entry without source or skill id");
                    return None;
                };

                let mut argv = base.clone();
                argv.extend([
                    source.to_string(),
                    "--skill".to_string(),
                    skill_id.to_string(),
                ]);
                Some(InstallCommand {
                    name: skill.name.clone(),
                    source: source.to_string(),
                    skill_id: skill_id.to_string(),
                    installs: skill.installs.clone(),
                    argv,
                })
            })
            .collect();

        Self {
            matched: matched.len(),
            commands,
        }
    }

    #[must_use]
    pub fn installable(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }
}

/// `<launcher> --yes skills add [-g] [--agent a...] [-y]`
#[must_use]
pub fn base_command(options: &InstallOptions) -> Vec<String> {
    let mut argv: Vec<String> = [options.launcher.as_str(), "--yes", "skills", "add"]
        .iter()
        .map(ToString::to_string)
        .collect();
    if options.global {
        argv.push("-g".to_string());
    }
    if !options.agents.is_empty() {
        argv.push("--agent".to_string());
        argv.extend(options.agents.iter().cloned());
    }
    if options.pass_yes {
        argv.push("-y".to_string());
    }
    argv
}

/// Quotes `arg` for a POSIX shell. Arguments made only of safe characters
/// are left bare.
#[must_use]
pub fn shell_quote(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }
    let safe = arg
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r#"'"'"'"#))
    }
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
