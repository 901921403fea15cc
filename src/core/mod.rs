//! Core analysis logic for tgstats.
//!
//! This module contains:
//! - [`stopwords`] - Stopword sets
//! - [`tokenizer`] - URL stripping and word tokenization
//! - [`stats`] - Accumulator and result types
//! - [`ranking`] - Leaderboards, peaks and user ordering
//! - [`analyzer`] - Single-pass aggregation
//! - [`output`] - Report writers (markdown, JSON, CSV, console)
//!
//! # Quick Start
//!
//! ```rust
//! use tgstats::core::{Analyzer, Stats, Tokenizer, StopWords};
//!
//! let tokenizer = Tokenizer::new(StopWords::russian());
//! assert_eq!(tokenizer.tokenize("Привет, мир!"), vec!["привет", "мир"]);
//! ```

pub mod analyzer;
pub mod output;
pub mod ranking;
pub mod stats;
pub mod stopwords;
pub mod tokenizer;

// Re-export main types for convenience
pub use analyzer::{Analyzer, analyze};
pub use ranking::{UserCount, main_users, sorted_users, top_words};
pub use stats::{MonthStat, Stats, TimeWindow, WordCount, YearStats};
pub use stopwords::StopWords;
pub use tokenizer::{Tokenizer, strip_urls};

pub use crate::Message;
