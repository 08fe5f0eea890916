//! Insertion-ordered counting with a stable descending-count ranking.
//!
//! Ties in the ranking keep first-seen order, which is why this is not a
//! plain `HashMap` followed by a sort.

use std::collections::HashMap;

use serde::Serialize;

/// One entry of a ranked list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedValue {
    pub value: String,
    pub count: usize,
}

impl RankedValue {
    #[must_use]
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: &str) {
        self.add_n(value, 1);
    }

    /// Adds `n` occurrences of `value`. Values are trimmed; blank values and
    /// zero counts are ignored.
    pub fn add_n(&mut self, value: &str, n: usize) {
        let value = value.trim();
        if value.is_empty() || n == 0 {
            return;
        }
        if let Some(&pos) = self.index.get(value) {
            self.entries[pos].1 += n;
        } else {
            self.index.insert(value.to_owned(), self.entries.len());
            self.entries.push((value.to_owned(), n));
        }
    }

    #[must_use]
    pub fn count(&self, value: &str) -> usize {
        self.index
            .get(value.trim())
            .map_or(0, |&pos| self.entries[pos].1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top `limit` values by descending count. `sort_by` is stable, so equal
    /// counts stay in insertion order.
    #[must_use]
    pub fn ranked(&self, limit: usize) -> Vec<RankedValue> {
        let mut ranked: Vec<RankedValue> = self
            .entries
            .iter()
            .map(|(value, count)| RankedValue::new(value.clone(), *count))
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(limit);
        ranked
    }
}

impl<S: AsRef<str>> FromIterator<S> for Tally {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for value in iter {
            tally.add(value.as_ref());
        }
        tally
    }
}
