//! Style signal extraction from stylesheet text.

use std::sync::LazyLock;

use regex::Regex;

use crate::limits::{
    MAX_CSS_VARIABLES, MAX_CSS_VARIABLE_VALUE_CHARS, TOP_COLORS, TOP_DURATIONS, TOP_FONTS,
};
use crate::ordered_map::OrderedMap;
use crate::tally::{RankedValue, Tally};

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{3,8}\b").expect("valid hex color regex"));
static RGB_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgba?\([^)]+\)").expect("valid rgb color regex"));
static HSL_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"hsla?\([^)]+\)").expect("valid hsl color regex"));
static CSS_VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(--[a-zA-Z0-9_-]+)\s*:\s*([^;}{]+)").expect("valid custom property regex")
});
static FONT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)font-family\s*:\s*([^;}{]+)").expect("valid font-family regex")
});
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?m?s\b").expect("valid duration regex"));

/// Family keywords that say nothing about a brand's typography.
const GENERIC_FONT_FAMILIES: [&str; 4] = ["inherit", "serif", "sans-serif", "monospace"];

/// Upper-cases a hex color and expands 3- and 4-digit shorthands by
/// doubling every digit: `#abc` → `#AABBCC`, `#abcd` → `#AABBCCDD`.
///
/// Other lengths are only upper-cased, so the function is idempotent.
#[must_use]
pub fn normalize_hex(color: &str) -> String {
    let upper = color.trim().to_ascii_uppercase();
    match upper.strip_prefix('#') {
        Some(digits)
            if matches!(digits.len(), 3 | 4) && digits.bytes().all(|b| b.is_ascii_hexdigit()) =>
        {
            let mut expanded = String::with_capacity(1 + digits.len() * 2);
            expanded.push('#');
            for c in digits.chars() {
                expanded.push(c);
                expanded.push(c);
            }
            expanded
        }
        _ => upper,
    }
}

/// Color literals ranked by frequency.
///
/// Hex literals come from both the page markup and the stylesheets;
/// `rgb()`/`hsl()` functional notations only from the stylesheets, kept
/// verbatim.
#[must_use]
pub fn extract_colors(html: &str, css: &str) -> Vec<RankedValue> {
    let mut tally = Tally::new();
    for source in [html, css] {
        for m in HEX_COLOR_RE.find_iter(source) {
            tally.add(&normalize_hex(m.as_str()));
        }
    }
    for m in RGB_COLOR_RE.find_iter(css) {
        tally.add(m.as_str());
    }
    for m in HSL_COLOR_RE.find_iter(css) {
        tally.add(m.as_str());
    }
    tally.ranked(TOP_COLORS)
}

/// `--name: value` custom property declarations, first definition wins.
///
/// Blank values and values longer than [`MAX_CSS_VARIABLE_VALUE_CHARS`] are
/// skipped; collection stops once [`MAX_CSS_VARIABLES`] names are known.
#[must_use]
pub fn extract_css_variables(css: &str) -> OrderedMap<String> {
    let mut vars = OrderedMap::new();
    for cap in CSS_VAR_RE.captures_iter(css) {
        if vars.len() >= MAX_CSS_VARIABLES {
            break;
        }
        let (Some(name), Some(value)) = (cap.get(1), cap.get(2)) else {
            continue;
        };
        let value = value.as_str().trim();
        if value.is_empty() || value.chars().count() > MAX_CSS_VARIABLE_VALUE_CHARS {
            continue;
        }
        vars.insert_if_absent(name.as_str(), value.to_owned());
    }
    vars
}

/// Font families named in `font-family` declarations, ranked by frequency.
#[must_use]
pub fn extract_fonts(css: &str) -> Vec<RankedValue> {
    let mut tally = Tally::new();
    for cap in FONT_RE.captures_iter(css) {
        let raw = cap.get(1).map_or("", |m| m.as_str());
        for family in raw.split(',') {
            let clean = strip_quotes(family.trim());
            if clean.is_empty()
                || GENERIC_FONT_FAMILIES
                    .iter()
                    .any(|generic| clean.eq_ignore_ascii_case(generic))
            {
                continue;
            }
            tally.add(clean);
        }
    }
    tally.ranked(TOP_FONTS)
}

/// `ms`/`s` time literals (`300ms`, `1.5s`) ranked by exact text.
#[must_use]
pub fn extract_durations(css: &str) -> Vec<RankedValue> {
    DURATION_RE
        .find_iter(css)
        .map(|m| m.as_str())
        .collect::<Tally>()
        .ranked(TOP_DURATIONS)
}

/// Removes one leading and one trailing quote character, if present.
fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix(['"', '\'']).unwrap_or(s);
    s.strip_suffix(['"', '\'']).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_hex_expands_short_forms() {
        assert_eq!(normalize_hex("#abc"), "#AABBCC");
        assert_eq!(normalize_hex("#abcd"), "#AABBCCDD");
    }

    #[test]
    fn normalize_hex_is_idempotent() {
        for value in ["#AABBCC", "#635BFF", "#0A2540CC", "#abc", "#abcd", "#12345"] {
            let once = normalize_hex(value);
            assert_eq!(normalize_hex(&once), once, "not idempotent for {value}");
        }
        assert_eq!(normalize_hex("#635BFF"), "#635BFF");
        assert_eq!(normalize_hex(" #0a2540cc "), "#0A2540CC");
    }

    #[test]
    fn extract_colors_merges_html_and_css_hex() {
        let html = r##"<div style="color:#fff"></div>"##;
        let css = "a{color:#FFFFFF}b{color:#635bff}";
        let colors = extract_colors(html, css);
        assert_eq!(colors[0], RankedValue::new("#FFFFFF", 2));
        assert_eq!(colors[1], RankedValue::new("#635BFF", 1));
    }

    #[test]
    fn extract_colors_keeps_functional_notation_verbatim() {
        let css = "a{color:rgba(0, 0, 0, .5)}b{color:hsl(210 40% 50%)}c{color:rgba(0, 0, 0, .5)}";
        let colors = extract_colors("", css);
        assert_eq!(
            colors,
            vec![
                RankedValue::new("rgba(0, 0, 0, .5)", 2),
                RankedValue::new("hsl(210 40% 50%)", 1),
            ]
        );
    }

    #[test]
    fn extract_colors_ignores_rgb_in_markup() {
        let html = r#"<p style="color: rgb(1, 2, 3)">x</p>"#;
        assert!(extract_colors(html, "").is_empty());
    }

    #[test]
    fn extract_colors_rejects_overlong_hex_runs() {
        assert!(extract_colors("", "#123456789").is_empty());
    }

    #[test]
    fn extract_colors_caps_at_top_colors() {
        let css: String = (0..40).map(|i| format!("a{{color:#{i:06x}}}")).collect();
        assert_eq!(extract_colors("", &css).len(), TOP_COLORS);
    }

    #[test]
    fn extract_css_variables_first_definition_wins() {
        let css = ":root{--brand: #635bff; --radius:4px}.dark{--brand:#000}";
        let vars = extract_css_variables(css);
        assert_eq!(vars.get("--brand").map(String::as_str), Some("#635bff"));
        assert_eq!(vars.get("--radius").map(String::as_str), Some("4px"));
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn extract_css_variables_drops_long_values() {
        let long = "x".repeat(MAX_CSS_VARIABLE_VALUE_CHARS + 1);
        let css = format!(":root{{--long:{long};--ok:1}}");
        let vars = extract_css_variables(&css);
        assert!(!vars.contains_key("--long"));
        assert!(vars.contains_key("--ok"));
    }

    #[test]
    fn extract_css_variables_caps_entry_count() {
        let css: String = (0..200).map(|i| format!("--v{i}:{i};")).collect();
        let vars = extract_css_variables(&css);
        assert_eq!(vars.len(), MAX_CSS_VARIABLES);
        assert!(vars
            .iter()
            .all(|(_, v)| v.chars().count() <= MAX_CSS_VARIABLE_VALUE_CHARS));
    }

    #[test]
    fn extract_fonts_strips_quotes_and_generics() {
        let css = r#"body{font-family: "Inter", -apple-system, sans-serif}
                     h1{FONT-FAMILY:'Inter';}
                     code{font-family: Menlo, monospace}
                     p{font-family: inherit}"#;
        let fonts = extract_fonts(css);
        assert_eq!(
            fonts,
            vec![
                RankedValue::new("Inter", 2),
                RankedValue::new("-apple-system", 1),
                RankedValue::new("Menlo", 1),
            ]
        );
    }

    #[test]
    fn extract_durations_tallies_exact_text() {
        let css = "a{transition:color 300ms ease, opacity .3s}b{animation:spin 1.5s}c{transition-duration:300ms}";
        let durations = extract_durations(css);
        assert_eq!(
            durations,
            vec![
                RankedValue::new("300ms", 2),
                RankedValue::new("3s", 1),
                RankedValue::new("1.5s", 1),
            ]
        );
    }

    #[test]
    fn extract_durations_ignores_words_starting_with_s() {
        assert!(extract_durations("grid-template: 12px 2sec").is_empty());
    }
}
