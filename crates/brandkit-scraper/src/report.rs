//! Report assembly and persistence.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::analyze::UrlOutcome;
use crate::error::ScraperError;
use crate::merge::{merge_signals, MergedSignals};

/// The JSON document written by `brand-scan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(serialize_with = "serialize_timestamp")]
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_slug: Option<String>,
    pub inputs: Vec<String>,
    /// One entry per input, in input order, failures included.
    pub results: Vec<UrlOutcome>,
    /// Computed from analyzed results only.
    pub merged: MergedSignals,
}

impl Report {
    /// Builds a report stamped with the current time. `inputs` is taken from
    /// the outcomes' URLs, so it always pairs one-to-one with `results`.
    #[must_use]
    pub fn new(results: Vec<UrlOutcome>, brand_slug: Option<String>) -> Self {
        Self::with_generated_at(Utc::now(), results, brand_slug)
    }

    #[must_use]
    pub fn with_generated_at(
        generated_at: DateTime<Utc>,
        results: Vec<UrlOutcome>,
        brand_slug: Option<String>,
    ) -> Self {
        let inputs = results.iter().map(|r| r.url().to_owned()).collect();
        let merged = merge_signals(results.iter().filter_map(UrlOutcome::record));
        Self {
            generated_at,
            brand_slug,
            inputs,
            results,
            merged,
        }
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failed()).count()
    }

    /// Pretty JSON (2-space indent) with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ScraperError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Writes `report` to `path`, creating missing parent directories.
///
/// The file is overwritten in place; the write is not atomic.
///
/// # Errors
///
/// Returns [`ScraperError::WriteReport`] when the directory or file cannot
/// be written, or [`ScraperError::Serialize`] if serialization fails.
pub fn write_report(path: &Path, report: &Report) -> Result<(), ScraperError> {
    let json = report.to_json()?;
    let write_err = |source: std::io::Error| ScraperError::WriteReport {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, json).map_err(write_err)?;

    tracing::info!(
        path = %path.display(),
        results = report.results.len(),
        failed = report.failed_count(),
        "wrote brand signal report"
    );
    Ok(())
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::analyze::extract_signals;
    use crate::tally::RankedValue;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()
    }

    fn sample_report() -> Report {
        let mut ok = extract_signals("https://a.example/", "<title>A</title>", "", vec![]);
        ok.top_colors = vec![RankedValue::new("#FF0000", 3)];
        let failed = UrlOutcome::Failed {
            url: "https://b.example/".to_string(),
            error: "HTTP 404 Not Found".to_string(),
        };
        Report::with_generated_at(fixed_time(), vec![UrlOutcome::Analyzed(ok), failed], None)
    }

    #[test]
    fn inputs_mirror_result_urls_in_order() {
        let report = sample_report();
        assert_eq!(report.inputs, vec!["https://a.example/", "https://b.example/"]);
        assert_eq!(report.inputs.len(), report.results.len());

        let empty = Report::with_generated_at(fixed_time(), vec![], None);
        assert!(empty.inputs.is_empty());
        assert_eq!(empty.merged, MergedSignals::default());
    }

    #[test]
    fn merged_ignores_failed_results() {
        let report = sample_report();
        assert_eq!(report.failed_count(), 1);
        assert_eq!(
            report.merged.palette_candidates,
            vec![RankedValue::new("#FF0000", 3)]
        );
    }

    #[test]
    fn to_json_is_two_space_indented_with_trailing_newline() {
        let json = sample_report().to_json().unwrap();
        assert!(json.ends_with("}\n"));
        assert!(json.starts_with("{\n  \"generated_at\": \"2026-01-02T03:04:05.000Z\",\n  \"inputs\""));
    }

    #[test]
    fn brand_slug_is_emitted_only_when_set() {
        let mut report = sample_report();
        let without: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert!(without.get("brand_slug").is_none());

        report.brand_slug = Some("stripe".to_string());
        let with: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(with["brand_slug"], "stripe");
    }

    #[test]
    fn write_report_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brand").join("acme").join("brand-signals.json");

        write_report(&path, &sample_report()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["results"].as_array().unwrap().len(), 2);
        assert_eq!(value["results"][1]["error"], "HTTP 404 Not Found");
    }

    #[test]
    fn write_report_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let err = write_report(&blocker.join("report.json"), &sample_report()).unwrap_err();
        assert!(
            matches!(err, ScraperError::WriteReport { .. }),
            "expected WriteReport, got: {err:?}"
        );
    }
}
