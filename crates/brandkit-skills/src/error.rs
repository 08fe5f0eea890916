use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillsError {
    #[error("could not find initialSkills in trending HTML")]
    MissingInitialSkills,

    #[error("failed to parse initialSkills JSON: {reason}")]
    InvalidInitialSkills { reason: String },

    #[error("failed to fetch trending page: {0}")]
    Fetch(#[from] brandkit_scraper::ScraperError),

    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write runner output: {0}")]
    Output(#[source] std::io::Error),
}
