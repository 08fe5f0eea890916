pub mod error;
pub mod plan;
pub mod runner;
pub mod trending;

pub use error::SkillsError;
pub use plan::{InstallCommand, InstallOptions, InstallPlan};
pub use runner::{run_plan, RunMode, RunSummary};
pub use trending::{extract_initial_skills, fetch_trending, TrendingSkill};
