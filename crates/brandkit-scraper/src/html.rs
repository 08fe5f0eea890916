//! Regex-based signal extraction from page markup.
//!
//! Nothing here is a real HTML parser: tags are located with regular
//! expressions and attributes are read from the matched tag text. Malformed
//! markup degrades to empty or absent results, never to an error.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use reqwest::Url;
use serde::Serialize;

use crate::limits::{MAX_LOGO_CANDIDATES, MAX_VISIBLE_TEXT_CHARS};

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid title regex"));
static META_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("valid regex"));
static LINK_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<link\b[^>]*>").expect("valid regex"));
static IMG_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<img\b[^>]*>").expect("valid regex"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").expect("valid tags regex"));
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)([a-zA-Z_:][-a-zA-Z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#,
    )
    .expect("valid attr regex")
});
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});")
        .expect("valid entity regex")
});

/// Substrings that mark an `<img>` as a logo when found in its `src` or `alt`.
const LOGO_MARKERS: [&str; 2] = ["logo", "brand"];

/// An `<img>` that looks like a brand mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoCandidate {
    /// Absolute image URL.
    pub src: String,
    pub alt: String,
}

/// Text of the first `<title>` element, or `None` when missing or blank.
#[must_use]
pub fn extract_title(html: &str) -> Option<String> {
    let cap = TITLE_RE.captures(html)?;
    non_empty(clean_text(cap.get(1).map_or("", |m| m.as_str())))
}

/// `content` of the first `<meta name="description">`, or `None` when
/// missing or blank. Attribute order inside the tag does not matter.
#[must_use]
pub fn extract_meta_description(html: &str) -> Option<String> {
    let content = META_TAG_RE.find_iter(html).find_map(|m| {
        let attrs = parse_attrs(m.as_str());
        let name = attrs.get("name")?;
        if name.trim().eq_ignore_ascii_case("description") {
            Some(attrs.get("content").cloned().unwrap_or_default())
        } else {
            None
        }
    })?;
    non_empty(collapse_whitespace(&content))
}

/// All markup removed, entities decoded, whitespace collapsed, capped at
/// [`MAX_VISIBLE_TEXT_CHARS`] characters.
#[must_use]
pub fn extract_visible_text(html: &str) -> String {
    let text = clean_text(html);
    truncate_chars(&text, MAX_VISIBLE_TEXT_CHARS).to_owned()
}

/// Absolute URLs of `<link rel="stylesheet">` elements in document order,
/// without duplicates.
///
/// `rel` may carry several space-separated tokens (`"preload stylesheet"`).
/// Hrefs that cannot be resolved against `base_url` are skipped.
#[must_use]
pub fn extract_stylesheet_urls(base_url: &str, html: &str) -> Vec<String> {
    let Ok(base) = Url::parse(base_url) else {
        tracing::debug!(base_url, "page URL does not parse; no stylesheets resolved");
        return Vec::new();
    };

    let mut urls: Vec<String> = Vec::new();
    for m in LINK_TAG_RE.find_iter(html) {
        let attrs = parse_attrs(m.as_str());
        let is_stylesheet = attrs.get("rel").is_some_and(|rel| {
            rel.split_ascii_whitespace()
                .any(|token| token.eq_ignore_ascii_case("stylesheet"))
        });
        if !is_stylesheet {
            continue;
        }
        let Some(href) = attrs.get("href").map(|h| h.trim()).filter(|h| !h.is_empty()) else {
            continue;
        };
        let Ok(resolved) = base.join(href) else {
            tracing::debug!(href, "skipping unresolvable stylesheet href");
            continue;
        };
        let resolved = resolved.to_string();
        if !urls.contains(&resolved) {
            urls.push(resolved);
        }
    }
    urls
}

/// `<img>` elements whose `src` or `alt` mentions "logo" or "brand".
///
/// Sources are resolved against `base_url` and deduplicated, with the first
/// occurrence keeping both its position and its `alt`. The result is capped
/// at [`MAX_LOGO_CANDIDATES`].
#[must_use]
pub fn extract_logo_candidates(base_url: &str, html: &str) -> Vec<LogoCandidate> {
    let Ok(base) = Url::parse(base_url) else {
        return Vec::new();
    };

    let mut candidates: Vec<LogoCandidate> = Vec::new();
    for m in IMG_TAG_RE.find_iter(html) {
        if candidates.len() >= MAX_LOGO_CANDIDATES {
            break;
        }
        let mut attrs = parse_attrs(m.as_str());
        let Some(src) = attrs.remove("src") else {
            continue;
        };
        let src = src.trim();
        if src.is_empty() {
            continue;
        }
        let alt = attrs.remove("alt").unwrap_or_default();

        let marker = format!("{src} {alt}").to_lowercase();
        if !LOGO_MARKERS.iter().any(|needle| marker.contains(needle)) {
            continue;
        }

        let Ok(resolved) = base.join(src) else {
            continue;
        };
        let resolved = resolved.to_string();
        if candidates.iter().any(|c| c.src == resolved) {
            continue;
        }
        candidates.push(LogoCandidate { src: resolved, alt });
    }
    candidates
}

/// Attributes of a single tag, keyed by lowercase name. Values are
/// entity-decoded; the first occurrence of a repeated attribute wins.
pub(crate) fn parse_attrs(tag: &str) -> HashMap<String, String> {
    let mut attrs = HashMap::new();
    for cap in ATTR_RE.captures_iter(tag) {
        let Some(name) = cap.get(1) else {
            continue;
        };
        let value = cap
            .get(2)
            .or_else(|| cap.get(3))
            .or_else(|| cap.get(4))
            .map_or("", |m| m.as_str());
        attrs
            .entry(name.as_str().to_ascii_lowercase())
            .or_insert_with(|| decode_entities(value));
    }
    attrs
}

/// Strips tags, decodes entities and collapses whitespace runs to one space.
pub(crate) fn clean_text(input: &str) -> String {
    let no_tags = TAG_RE.replace_all(input, " ");
    collapse_whitespace(&decode_entities(&no_tags))
}

pub(crate) fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decodes the common named entities and all numeric character references.
/// Unknown or invalid references are left untouched.
pub(crate) fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_owned();
    }
    ENTITY_RE
        .replace_all(input, |caps: &Captures<'_>| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            let body = caps.get(1).map_or("", |m| m.as_str());
            decode_entity(body).map_or_else(|| whole.to_owned(), |c| c.to_string())
        })
        .into_owned()
}

fn decode_entity(body: &str) -> Option<char> {
    if let Some(numeric) = body.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        return char::from_u32(code).filter(|c| *c != '\0');
    }
    let c = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        "trade" => '\u{2122}',
        "hellip" => '\u{2026}',
        "mdash" => '\u{2014}',
        "ndash" => '\u{2013}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "middot" => '\u{b7}',
        "bull" => '\u{2022}',
        _ => return None,
    };
    Some(c)
}

/// Longest prefix of `s` with at most `max_chars` characters.
pub(crate) fn truncate_chars(s: &str, max_chars: usize) -> &str {
    s.char_indices().nth(max_chars).map_or(s, |(idx, _)| &s[..idx])
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;
