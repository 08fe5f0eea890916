//! Caps applied while extracting and merging brand signals.

/// Stylesheets considered per page, in discovery order.
pub const MAX_STYLESHEETS: usize = 12;

/// Visible text kept after tag stripping, in characters.
pub const MAX_VISIBLE_TEXT_CHARS: usize = 15_000;
/// Prefix of the visible text stored as `sample_text`, in characters.
pub const SAMPLE_TEXT_CHARS: usize = 900;

pub const MAX_CSS_VARIABLES: usize = 80;
/// Custom property values longer than this (in characters) are discarded.
pub const MAX_CSS_VARIABLE_VALUE_CHARS: usize = 80;

pub const MAX_LOGO_CANDIDATES: usize = 8;

pub const TOP_COLORS: usize = 20;
pub const TOP_FONTS: usize = 12;
pub const TOP_DURATIONS: usize = 12;

pub const MERGED_PALETTE: usize = 24;
pub const MERGED_FONTS: usize = 16;
pub const MERGED_DURATIONS: usize = 16;
pub const MERGED_KEYWORDS: usize = 16;
