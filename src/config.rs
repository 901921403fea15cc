//! Configuration types for extraction and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ExtractorConfig`] - which files in the export directory are read
//! - [`AnalyzerConfig`] - leaderboard size and stopword list
//!
//! # Example
//!
//! ```rust
//! use tgstats::config::{AnalyzerConfig, ExtractorConfig};
//! use tgstats::core::stopwords::StopWords;
//!
//! let extractor = ExtractorConfig::new().with_progress_every(50);
//! assert_eq!(extractor.glob_pattern(), "messages*.html");
//!
//! let analyzer = AnalyzerConfig::new()
//!     .with_top_n(10)
//!     .with_stopwords(StopWords::none());
//! assert_eq!(analyzer.top_n, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::stopwords::StopWords;

/// Configuration for reading an export directory.
///
/// Telegram Desktop splits an HTML export into `messages.html`,
/// `messages2.html`, `messages3.html`, ... The defaults match that layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// File name prefix before the optional sequence number (default: `messages`)
    pub file_stem: String,

    /// File extension without the dot (default: `html`)
    pub extension: String,

    /// Report progress every N files (default: 20)
    pub progress_every: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            file_stem: "messages".to_string(),
            extension: "html".to_string(),
            progress_every: 20,
        }
    }
}

impl ExtractorConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file name prefix.
    #[must_use]
    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    /// Sets the file extension (without the dot).
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Sets how often progress is reported, in files. Zero disables it.
    #[must_use]
    pub fn with_progress_every(mut self, files: usize) -> Self {
        self.progress_every = files;
        self
    }

    /// Returns the file name glob, e.g. `messages*.html`.
    ///
    /// Glob metacharacters in the stem and extension are escaped.
    pub fn glob_pattern(&self) -> String {
        format!(
            "{}*.{}",
            glob::Pattern::escape(&self.file_stem),
            glob::Pattern::escape(&self.extension)
        )
    }
}

/// Configuration for the statistics engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Length of every top-words leaderboard (default: 20)
    pub top_n: usize,

    /// Words excluded from frequency counts (default: built-in Russian list)
    pub stopwords: StopWords,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_n: 20,
            stopwords: StopWords::russian(),
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the leaderboard length.
    #[must_use]
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Replaces the stopword list.
    #[must_use]
    pub fn with_stopwords(mut self, stopwords: StopWords) -> Self {
        self.stopwords = stopwords;
        self
    }
}
