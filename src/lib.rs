//! # tgstats
//!
//! A Rust library for computing usage statistics from Telegram Desktop HTML
//! chat exports.
//!
//! ## Overview
//!
//! tgstats reads the `messages.html`, `messages2.html`, ... files of one chat
//! export and produces, for every calendar year and for the whole chat:
//! - message counts per participant
//! - top-N word leaderboards, overall and per participant
//! - hourly activity and the busiest two-hour window
//! - monthly activity and the busiest month
//! - reply / forwarded counts and average message length
//!
//! The pipeline has two stages: extraction ([`parser`], [`parsers`]) turns
//! export files into an ordered stream of [`Message`]s, and aggregation
//! ([`core::Analyzer`]) folds that stream into an immutable [`Stats`](core::Stats).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tgstats::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let result = parse_directory(
//!         &TelegramHtmlParser::new(),
//!         Path::new("ChatExport_2024-01-01"),
//!         &ExtractorConfig::default(),
//!     )?;
//!
//!     let stats = Analyzer::new().analyze(&result);
//!     for year in stats.sorted_years() {
//!         println!("{year}: {} messages", stats.by_year[&year].total_messages);
//!     }
//!
//!     write_report(&stats, Path::new("reports"), ReportFormat::Markdown)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ExportParser`](parser::ExportParser) trait, [`parse_directory`](parser::parse_directory)
//! - [`parsers`] - [`TelegramHtmlParser`](parsers::TelegramHtmlParser)
//! - [`parsing`] - file discovery, date and sender-label helpers
//! - [`config`] - [`ExtractorConfig`](config::ExtractorConfig), [`AnalyzerConfig`](config::AnalyzerConfig)
//! - [`core`] - tokenizer, stopwords, accumulators, ranking, report writers
//! - [`format`] - [`ReportFormat`](format::ReportFormat), [`write_report`](format::write_report)
//! - [`progress`] - per-file progress callbacks
//! - [`error`] - [`TgStatsError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod parser;
pub mod parsers;
pub mod parsing;
pub mod progress;

// Re-export the main types at the crate root for convenience
pub use error::{Result, TgStatsError};
pub use message::{ChatKind, ChatMetadata, Message};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use tgstats::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::message::{ChatKind, ChatMetadata, Message};

    // Error types
    pub use crate::error::{Result, TgStatsError};

    // Configuration
    pub use crate::config::{AnalyzerConfig, ExtractorConfig};

    // Extraction
    pub use crate::parser::{
        ExportParser, ParseResult, SenderState, parse_directory, parse_directory_with_progress,
    };
    pub use crate::parsers::TelegramHtmlParser;

    // Aggregation
    pub use crate::core::{
        Analyzer, MonthStat, Stats, StopWords, TimeWindow, Tokenizer, WordCount, YearStats,
    };

    // Output
    pub use crate::core::output::{print_summary, write_summary};
    pub use crate::format::{ReportFormat, write_report};

    // Progress
    pub use crate::progress::{Progress, ProgressCallback};
}
