/// Desktop Chrome identifying header sent with page and stylesheet fetches.
/// Naive bot filters tend to let this through where a tool UA is blocked.
pub const DEFAULT_SCAN_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

pub const DEFAULT_TRENDING_URL: &str = "https://skills.sh/trending";

pub const DEFAULT_TRENDING_USER_AGENT: &str =
    "skills-sh-trending-installer/0.2 (+https://skills.sh)";

/// Runtime settings shared by the `brand-scan` and `install-trending` binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    pub scan_timeout_secs: u64,
    pub scan_user_agent: String,
    pub trending_url: String,
    pub trending_timeout_secs: u64,
    pub trending_user_agent: String,
    /// Program that fronts the skills installer (`<launcher> --yes skills add ...`).
    pub skills_launcher: String,
}
