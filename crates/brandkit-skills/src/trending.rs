//! Trending listing extraction.
//!
//! The listing page ships its data inside a script payload as an
//! `initialSkills` array followed by a `totalSkills` key. Depending on how
//! the page was rendered the array appears either as plain JSON or as the
//! body of a JS string literal with every quote backslash-escaped.

use std::sync::LazyLock;

use brandkit_scraper::PageFetcher;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::SkillsError;

static UNESCAPED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)"initialSkills"\s*:\s*(\[\{.*?\}\])\s*,\s*"totalSkills""#)
        .expect("valid regex")
});

static ESCAPED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\\"initialSkills\\"\s*:\s*(\[\{.*?\}\])\s*,\s*\\"totalSkills\\""#)
        .expect("valid regex")
});

/// One entry of the trending listing. Every field may be missing, and a
/// field holding an unexpected type reads as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingSkill {
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: Option<String>,
    #[serde(rename = "skillId", default, deserialize_with = "lenient_string")]
    pub skill_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    /// Display text: numbers as written, strings verbatim (`"1.2K"`).
    #[serde(default, deserialize_with = "installs_text")]
    pub installs: Option<String>,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn installs_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Fetches the trending page at `url` and extracts its skill entries.
///
/// # Errors
///
/// Returns [`SkillsError::Fetch`] when the page cannot be fetched, or any
/// error from [`extract_initial_skills`].
pub async fn fetch_trending(
    fetcher: &PageFetcher,
    url: &str,
) -> Result<Vec<TrendingSkill>, SkillsError> {
    let html = fetcher.fetch_text(url).await?;
    let skills = extract_initial_skills(&html)?;
    tracing::info!(url, count = skills.len(), "extracted trending skills");
    Ok(skills)
}

/// Extracts the embedded `initialSkills` array from trending-page markup.
///
/// The plain JSON form is tried first; if it is absent or does not parse,
/// the escaped string-literal form is decoded and parsed instead. Array
/// elements that are not JSON objects are skipped.
///
/// # Errors
///
/// - [`SkillsError::MissingInitialSkills`] when neither form is present.
/// - [`SkillsError::InvalidInitialSkills`] when the escaped form cannot be
///   decoded or does not hold a JSON array.
pub fn extract_initial_skills(html: &str) -> Result<Vec<TrendingSkill>, SkillsError> {
    if let Some(raw) = UNESCAPED_RE.captures(html).and_then(|c| c.get(1)) {
        match serde_json::from_str::<Value>(raw.as_str()) {
            Ok(Value::Array(items)) => return Ok(collect_entries(items)),
            Ok(_) => tracing::debug!("unescaped initialSkills is not an array; trying escaped form"),
            Err(e) => {
                tracing::debug!(error = %e, "unescaped initialSkills did not parse; trying escaped form");
            }
        }
    }

    let raw = ESCAPED_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .ok_or(SkillsError::MissingInitialSkills)?;

    let unescaped = unescape_string_body(raw.as_str())?;
    match serde_json::from_str::<Value>(&unescaped) {
        Ok(Value::Array(items)) => Ok(collect_entries(items)),
        Ok(_) => Err(SkillsError::InvalidInitialSkills {
            reason: "parsed initialSkills is not a list".to_string(),
        }),
        Err(e) => Err(SkillsError::InvalidInitialSkills {
            reason: e.to_string(),
        }),
    }
}

/// Decodes `raw` as the inside of a JSON string literal, turning `\"` into
/// `"`, `\\` into `\` and `\uXXXX` into the character it names.
fn unescape_string_body(raw: &str) -> Result<String, SkillsError> {
    serde_json::from_str::<String>(&format!("\"{raw}\"")).map_err(|e| {
        SkillsError::InvalidInitialSkills {
            reason: format!("failed to unescape embedded JSON: {e}"),
        }
    })
}

fn collect_entries(items: Vec<Value>) -> Vec<TrendingSkill> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                tracing::debug!(index, "skipping non-object trending entry");
                return None;
            }
            match serde_json::from_value::<TrendingSkill>(item) {
                Ok(skill) => Some(skill),
                Err(e) => {
                    tracing::debug!(index, error = %e, "skipping malformed trending entry");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "trending_test.rs"]
mod tests;
