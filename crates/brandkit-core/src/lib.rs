mod app_config;
mod config;

use thiserror::Error;

pub use app_config::{
    AppConfig, DEFAULT_SCAN_USER_AGENT, DEFAULT_TRENDING_URL, DEFAULT_TRENDING_USER_AGENT,
};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
