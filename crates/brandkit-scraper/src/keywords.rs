//! Brand-tone keyword scan over visible page text.

use crate::ordered_map::OrderedMap;

/// Marketing and tone adjectives counted in visible text.
pub const KEYWORDS: [&str; 15] = [
    "premium",
    "modern",
    "trusted",
    "simple",
    "fast",
    "secure",
    "creative",
    "playful",
    "minimal",
    "powerful",
    "elegant",
    "bold",
    "professional",
    "friendly",
    "innovative",
];

/// Case-insensitive substring counts of [`KEYWORDS`] in `text`.
///
/// Occurrences are non-overlapping and not word-bounded, so "fast" also
/// counts inside "breakfast". Keywords that never occur are omitted.
#[must_use]
pub fn extract_keywords(text: &str) -> OrderedMap<usize> {
    let lower = text.to_lowercase();
    let mut hits = OrderedMap::new();
    for keyword in KEYWORDS {
        let count = lower.matches(keyword).count();
        if count > 0 {
            hits.insert_if_absent(keyword, count);
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_case_insensitively() {
        let hits = extract_keywords("Premium PREMIUM premium");
        assert_eq!(hits.get("premium"), Some(&3));
    }

    #[test]
    fn omits_zero_count_keywords() {
        let hits = extract_keywords("A bold, friendly bank.");
        assert_eq!(hits.len(), 2);
        assert!(!hits.contains_key("premium"));
    }

    #[test]
    fn keeps_vocabulary_order() {
        let hits = extract_keywords("friendly secure modern");
        let keys: Vec<&str> = hits.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["modern", "secure", "friendly"]);
    }

    #[test]
    fn counts_inside_longer_words() {
        let hits = extract_keywords("Breakfast, fast.");
        assert_eq!(hits.get("fast"), Some(&2));
    }

    #[test]
    fn empty_text_has_no_hits() {
        assert!(extract_keywords("").is_empty());
    }
}
