//! Per-URL analysis: fetch a page and its stylesheets, then run every
//! extractor over the result.
//!
//! The flow is linear: fetch page → discover stylesheets → fetch up to
//! [`MAX_STYLESHEETS`] of them → extract → emit one [`UrlOutcome`]. Only a
//! failed page fetch turns the outcome into [`UrlOutcome::Failed`]; a failed
//! stylesheet fetch just drops that stylesheet's contribution.

use serde::Serialize;

use crate::client::origin::is_same_host;
use crate::client::PageFetcher;
use crate::css::{extract_colors, extract_css_variables, extract_durations, extract_fonts};
use crate::html::{
    extract_logo_candidates, extract_meta_description, extract_stylesheet_urls, extract_title,
    extract_visible_text, truncate_chars, LogoCandidate,
};
use crate::keywords::extract_keywords;
use crate::limits::{MAX_STYLESHEETS, SAMPLE_TEXT_CHARS};
use crate::ordered_map::OrderedMap;
use crate::tally::RankedValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Fetch stylesheets hosted on a different domain than the page.
    pub allow_cross_origin_css: bool,
    /// Discovered stylesheets considered per page, cross-origin ones included.
    pub max_stylesheets: usize,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            allow_cross_origin_css: false,
            max_stylesheets: MAX_STYLESHEETS,
        }
    }
}

/// A stylesheet that was fetched and folded into the CSS signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylesheetInfo {
    pub url: String,
    /// UTF-8 length of the decoded stylesheet text.
    pub bytes: usize,
}

/// Signals extracted from one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalRecord {
    pub url: String,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub stylesheets_analyzed: Vec<StylesheetInfo>,
    pub top_colors: Vec<RankedValue>,
    pub top_fonts: Vec<RankedValue>,
    pub top_durations: Vec<RankedValue>,
    pub css_variables: OrderedMap<String>,
    pub keywords: OrderedMap<usize>,
    pub logo_candidates: Vec<LogoCandidate>,
    pub sample_text: String,
}

/// Result of analyzing one input URL.
///
/// Serialized untagged: a failure is exactly `{"url": ..., "error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UrlOutcome {
    Analyzed(SignalRecord),
    Failed { url: String, error: String },
}

impl UrlOutcome {
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            UrlOutcome::Analyzed(record) => &record.url,
            UrlOutcome::Failed { url, .. } => url,
        }
    }

    #[must_use]
    pub fn record(&self) -> Option<&SignalRecord> {
        match self {
            UrlOutcome::Analyzed(record) => Some(record),
            UrlOutcome::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, UrlOutcome::Failed { .. })
    }
}

/// Analyzes every URL in order, one at a time. The output has exactly one
/// outcome per input, in input order.
pub async fn analyze_urls(
    fetcher: &PageFetcher,
    urls: &[String],
    options: &AnalyzeOptions,
) -> Vec<UrlOutcome> {
    let mut outcomes = Vec::with_capacity(urls.len());
    for url in urls {
        outcomes.push(analyze_url(fetcher, url, options).await);
    }
    outcomes
}

/// Fetches `url` plus its stylesheets and extracts all signals.
///
/// Never fails: a page fetch error becomes [`UrlOutcome::Failed`] carrying
/// the error message.
pub async fn analyze_url(
    fetcher: &PageFetcher,
    url: &str,
    options: &AnalyzeOptions,
) -> UrlOutcome {
    tracing::info!(url, "analyzing page");

    let html = match fetcher.fetch_text(url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(url, error = %e, "page fetch failed; recording error");
            return UrlOutcome::Failed {
                url: url.to_owned(),
                error: e.to_string(),
            };
        }
    };

    let stylesheet_urls = extract_stylesheet_urls(url, &html);
    let mut analyzed: Vec<StylesheetInfo> = Vec::new();
    let mut all_css = String::new();

    for css_url in stylesheet_urls.iter().take(options.max_stylesheets) {
        if !options.allow_cross_origin_css && !is_same_host(url, css_url) {
            tracing::debug!(page = url, stylesheet = %css_url, "skipping cross-origin stylesheet");
            continue;
        }
        match fetcher.fetch_text(css_url).await {
            Ok(css) => {
                all_css.push('\n');
                all_css.push_str(&css);
                analyzed.push(StylesheetInfo {
                    url: css_url.clone(),
                    bytes: css.len(),
                });
            }
            Err(e) => {
                tracing::debug!(
                    page = url,
                    stylesheet = %css_url,
                    error = %e,
                    "stylesheet fetch failed; continuing without it"
                );
            }
        }
    }

    UrlOutcome::Analyzed(extract_signals(url, &html, &all_css, analyzed))
}

/// Runs every extractor over already-fetched page markup and concatenated
/// stylesheet text.
#[must_use]
pub fn extract_signals(
    url: &str,
    html: &str,
    css: &str,
    stylesheets_analyzed: Vec<StylesheetInfo>,
) -> SignalRecord {
    let text = extract_visible_text(html);

    SignalRecord {
        url: url.to_owned(),
        title: extract_title(html),
        meta_description: extract_meta_description(html),
        stylesheets_analyzed,
        top_colors: extract_colors(html, css),
        top_fonts: extract_fonts(css),
        top_durations: extract_durations(css),
        css_variables: extract_css_variables(css),
        keywords: extract_keywords(&text),
        logo_candidates: extract_logo_candidates(url, html),
        sample_text: truncate_chars(&text, SAMPLE_TEXT_CHARS).to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_signals_on_bare_page_is_empty_but_not_failed() {
        let record = extract_signals("https://example.com/", "<html><body></body></html>", "", vec![]);
        assert_eq!(record.title, None);
        assert_eq!(record.meta_description, None);
        assert!(record.top_colors.is_empty());
        assert!(record.top_fonts.is_empty());
        assert!(record.top_durations.is_empty());
        assert!(record.css_variables.is_empty());
        assert!(record.keywords.is_empty());
        assert!(record.logo_candidates.is_empty());
        assert_eq!(record.sample_text, "");
    }

    #[test]
    fn extract_signals_combines_html_and_css() {
        let html = r#"<html><head><title>Acme</title>
            <meta name="description" content="Simple tools">
            </head><body><img src="/acme-logo.svg" alt="Acme">
            <p style="color:#0a2540">Simple, modern, simple.</p></body></html>"#;
        let css = ":root{--accent:#635bff}body{font-family:Inter;transition:opacity 200ms}";
        let record = extract_signals("https://acme.test/", html, css, vec![]);

        assert_eq!(record.title.as_deref(), Some("Acme"));
        assert_eq!(record.meta_description.as_deref(), Some("Simple tools"));
        assert_eq!(record.top_colors.len(), 2);
        assert_eq!(record.top_fonts, vec![RankedValue::new("Inter", 1)]);
        assert_eq!(record.top_durations, vec![RankedValue::new("200ms", 1)]);
        assert_eq!(
            record.css_variables.get("--accent").map(String::as_str),
            Some("#635bff")
        );
        assert_eq!(record.keywords.get("simple"), Some(&2));
        assert_eq!(record.keywords.get("modern"), Some(&1));
        assert_eq!(record.logo_candidates[0].src, "https://acme.test/acme-logo.svg");
    }

    #[test]
    fn sample_text_is_capped() {
        let html = format!("<p>{}</p>", "word ".repeat(1_000));
        let record = extract_signals("https://example.com/", &html, "", vec![]);
        assert_eq!(record.sample_text.chars().count(), SAMPLE_TEXT_CHARS);
    }

    #[test]
    fn failed_outcome_serializes_to_url_and_error_only() {
        let outcome = UrlOutcome::Failed {
            url: "https://down.example".to_string(),
            error: "HTTP 503 Service Unavailable".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "url": "https://down.example",
                "error": "HTTP 503 Service Unavailable"
            })
        );
        assert!(outcome.is_failed());
        assert!(outcome.record().is_none());
    }

    #[test]
    fn analyzed_outcome_serializes_absent_title_as_null() {
        let record = extract_signals("https://example.com/", "", "", vec![]);
        let json = serde_json::to_value(UrlOutcome::Analyzed(record)).unwrap();
        assert!(json["title"].is_null());
        assert!(json.get("error").is_none());
        assert_eq!(json["css_variables"], serde_json::json!({}));
        assert_eq!(json["keywords"], serde_json::json!({}));
    }
}
