pub mod analyze;
pub mod client;
pub mod css;
pub mod error;
pub mod html;
pub mod keywords;
pub mod limits;
pub mod merge;
pub mod ordered_map;
pub mod report;
pub mod tally;

pub use analyze::{analyze_url, analyze_urls, AnalyzeOptions, SignalRecord, UrlOutcome};
pub use client::PageFetcher;
pub use error::ScraperError;
pub use merge::{merge_signals, MergedSignals};
pub use report::{write_report, Report};
pub use tally::RankedValue;
