//! Single-pass statistics aggregation.
//!
//! The [`Analyzer`] walks the ordered message stream once. Each message is
//! tokenized a single time and folded into two accumulators: the one for its
//! calendar year and the whole-chat one. After the pass every accumulator is
//! finalized and the result is returned as an immutable [`Stats`].
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tgstats::Message;
//! use tgstats::core::Analyzer;
//! use tgstats::parser::ParseResult;
//!
//! let ts = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let result = ParseResult::from_messages("Chat", vec![Message::new(ts, "Alice", "hello world")]);
//!
//! let stats = Analyzer::new().analyze(&result);
//! assert_eq!(stats.overall.total_messages, 1);
//! assert_eq!(stats.sorted_years(), vec![2021]);
//! ```

use std::collections::BTreeMap;

use chrono::Datelike;
use tracing::info;

use super::stats::{Stats, YearStats};
use super::tokenizer::Tokenizer;
use crate::Message;
use crate::config::AnalyzerConfig;
use crate::message::ChatMetadata;
use crate::parser::ParseResult;

/// Folds one message into every target accumulator.
fn record_into(targets: &mut [&mut YearStats], msg: &Message, tokens: &[String]) {
    for target in targets.iter_mut() {
        target.record(msg, tokens);
    }
}

/// Aggregates a message stream into [`Stats`].
#[derive(Debug, Clone)]
pub struct Analyzer {
    tokenizer: Tokenizer,
    top_n: usize,
}

impl Analyzer {
    /// Creates an analyzer with [`AnalyzerConfig::default`].
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Creates an analyzer with an explicit configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(config.stopwords),
            top_n: config.top_n,
        }
    }

    /// Returns the leaderboard length.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Aggregates an extraction result.
    pub fn analyze(&self, result: &ParseResult) -> Stats {
        self.analyze_messages(&result.messages, &result.metadata)
    }

    /// Aggregates messages with the given chat metadata.
    ///
    /// Messages are expected in export order, but the result does not depend
    /// on it: first/last timestamps are found by comparison.
    pub fn analyze_messages(&self, messages: &[Message], metadata: &ChatMetadata) -> Stats {
        let mut overall = YearStats::overall();
        let mut by_year: BTreeMap<i32, YearStats> = BTreeMap::new();

        for msg in messages {
            let tokens = self.tokenizer.tokenize(msg.text());
            let year = msg.timestamp().year();
            let year_stats = by_year
                .entry(year)
                .or_insert_with(|| YearStats::for_year(year));
            record_into(&mut [year_stats, &mut overall], msg, &tokens);
        }

        for stats in by_year.values_mut() {
            stats.finalize(self.top_n);
        }
        overall.finalize(self.top_n);

        info!(
            messages = overall.total_messages,
            years = by_year.len(),
            words = overall.word_frequency.len(),
            "aggregation finished"
        );

        Stats {
            chat_name: metadata.name.clone(),
            chat_kind: metadata.kind,
            overall,
            by_year,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregates with default settings.
pub fn analyze(result: &ParseResult) -> Stats {
    Analyzer::new().analyze(result)
}
