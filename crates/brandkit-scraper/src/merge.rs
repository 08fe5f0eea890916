//! Cross-URL aggregation of per-page signals.

use serde::Serialize;

use crate::analyze::SignalRecord;
use crate::limits::{MERGED_DURATIONS, MERGED_FONTS, MERGED_KEYWORDS, MERGED_PALETTE};
use crate::tally::{RankedValue, Tally};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MergedSignals {
    pub palette_candidates: Vec<RankedValue>,
    pub font_candidates: Vec<RankedValue>,
    pub motion_duration_candidates: Vec<RankedValue>,
    pub voice_keywords: Vec<RankedValue>,
}

/// Sums ranked counts across records and keeps the top entries of each list.
///
/// Totals do not depend on record order; equal totals rank by the record
/// and position where a value was first seen.
pub fn merge_signals<'a, I>(records: I) -> MergedSignals
where
    I: IntoIterator<Item = &'a SignalRecord>,
{
    let mut colors = Tally::new();
    let mut fonts = Tally::new();
    let mut durations = Tally::new();
    let mut keywords = Tally::new();

    for record in records {
        for entry in &record.top_colors {
            colors.add_n(&entry.value, entry.count);
        }
        for entry in &record.top_fonts {
            fonts.add_n(&entry.value, entry.count);
        }
        for entry in &record.top_durations {
            durations.add_n(&entry.value, entry.count);
        }
        for (keyword, count) in record.keywords.iter() {
            keywords.add_n(keyword, *count);
        }
    }

    MergedSignals {
        palette_candidates: colors.ranked(MERGED_PALETTE),
        font_candidates: fonts.ranked(MERGED_FONTS),
        motion_duration_candidates: durations.ranked(MERGED_DURATIONS),
        voice_keywords: keywords.ranked(MERGED_KEYWORDS),
    }
}
