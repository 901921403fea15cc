//! Word tokenization for frequency counting.
//!
//! Text is normalised in four steps:
//! 1. `http://` / `https://` links are removed
//! 2. the remainder is lowercased (Unicode-aware, so Cyrillic folds correctly)
//! 3. it is split into maximal runs of letters (`\p{L}`) and decimal digits (`\p{Nd}`)
//! 4. tokens of one character, digit-only tokens and stopwords are dropped
//!
//! Superscripts, subscripts, fractions and roman numerals are separators.
//!
//! # Example
//!
//! ```
//! use tgstats::core::stopwords::StopWords;
//! use tgstats::core::tokenizer::Tokenizer;
//!
//! let tokenizer = Tokenizer::new(StopWords::russian());
//! let words = tokenizer.tokenize("Привет, это тест! https://t.me/x 2024 я");
//! assert_eq!(words, vec!["привет", "тест"]);
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::stopwords::StopWords;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("URL pattern is valid"));

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{Nd}]+").expect("word pattern is valid"));

static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Nd}+$").expect("digit pattern is valid"));

/// Removes `http(s)://` links from `text`.
///
/// Borrows when there is nothing to remove.
pub fn strip_urls(text: &str) -> Cow<'_, str> {
    URL_RE.replace_all(text, "")
}

/// Splits message text into normalised word tokens.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stopwords: StopWords,
}

impl Tokenizer {
    /// Creates a tokenizer that filters with `stopwords`.
    pub fn new(stopwords: StopWords) -> Self {
        Self { stopwords }
    }

    /// Returns the stopword set in use.
    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Tokenizes `text` in order of appearance, duplicates included.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = strip_urls(text).to_lowercase();
        WORD_RE
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|token| self.keep(token))
            .map(str::to_owned)
            .collect()
    }

    fn keep(&self, token: &str) -> bool {
        let mut chars = token.chars();
        // at least two characters
        if chars.next().is_none() || chars.next().is_none() {
            return false;
        }
        !DIGITS_RE.is_match(token) && !self.stopwords.contains(token)
    }
}
