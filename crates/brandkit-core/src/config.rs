use crate::app_config::{
    AppConfig, DEFAULT_SCAN_USER_AGENT, DEFAULT_TRENDING_URL, DEFAULT_TRENDING_USER_AGENT,
};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("BRANDKIT_LOG_LEVEL", "info");
    let scan_timeout_secs = parse_u64("BRANDKIT_SCAN_TIMEOUT_SECS", "12")?;
    let scan_user_agent = or_default("BRANDKIT_SCAN_USER_AGENT", DEFAULT_SCAN_USER_AGENT);
    let trending_url = or_default("BRANDKIT_TRENDING_URL", DEFAULT_TRENDING_URL);
    let trending_timeout_secs = parse_u64("BRANDKIT_TRENDING_TIMEOUT_SECS", "30")?;
    let trending_user_agent =
        or_default("BRANDKIT_TRENDING_USER_AGENT", DEFAULT_TRENDING_USER_AGENT);
    let skills_launcher = or_default("BRANDKIT_SKILLS_LAUNCHER", "npx");

    Ok(AppConfig {
        log_level,
        scan_timeout_secs,
        scan_user_agent,
        trending_url,
        trending_timeout_secs,
        trending_user_agent,
        skills_launcher,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
