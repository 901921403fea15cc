//! Unified error types for tgstats.
//!
//! This module provides a single [`TgStatsError`] enum that covers every fatal
//! failure of the pipeline. Per-message problems (media-only messages,
//! unparseable timestamps) are not errors: such messages are skipped by the
//! extractor and never reach the aggregator.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - A run either produces a complete [`Stats`](crate::core::Stats) or an error, never both

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for tgstats operations.
///
/// # Example
///
/// ```rust
/// use tgstats::error::Result;
/// use tgstats::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, TgStatsError>;

/// The error type for all tgstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TgStatsError {
    /// No export files matched the naming pattern in the input directory.
    ///
    /// Raised before any parsing or aggregation happens.
    #[error("No export files matching '{pattern}' found in {}", dir.display())]
    NoInputFiles {
        /// The directory that was searched
        dir: PathBuf,
        /// The file name pattern, e.g. `messages*.html`
        pattern: String,
    },

    /// A matched export file could not be opened or read.
    #[error("Failed to open {}: {source}", path.display())]
    FileOpen {
        /// The file that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A matched export file does not have the expected document structure.
    #[error("Malformed export document {}: {reason}", path.display())]
    MalformedDocument {
        /// The file that failed
        path: PathBuf,
        /// Description of what's wrong
        reason: String,
    },

    /// The file discovery pattern could not be compiled.
    ///
    /// Only possible with a custom [`ExtractorConfig`](crate::config::ExtractorConfig).
    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The glob pattern that was built
        pattern: String,
        /// The underlying glob error
        #[source]
        source: glob::PatternError,
    },

    /// The requested report format was compiled out.
    #[error("Report format {format} requires the '{feature}' feature to be enabled")]
    FormatUnavailable {
        /// Format name, e.g. `json`
        format: &'static str,
        /// Cargo feature that provides it
        feature: &'static str,
    },

    /// An I/O error occurred while writing reports.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// PDF layout or rendering error, including unusable font files.
    #[cfg(feature = "pdf-output")]
    #[error("PDF error: {0}")]
    Pdf(#[from] genpdf::error::Error),

    /// No TrueType font with Cyrillic glyphs was found for PDF reports.
    #[cfg(feature = "pdf-output")]
    #[error("No TTF font with Cyrillic support found")]
    NoPdfFont,
}

/// Structural problems found in a single export document.
///
/// Raised by [`ExportParser::parse_str`](crate::parser::ExportParser::parse_str),
/// which has no file path; [`TgStatsError::MalformedDocument`] wraps it with one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// The document has no message history container.
    #[error("no message history container found")]
    MissingHistory,

    /// The file is not valid UTF-8.
    #[error("not valid UTF-8: {0}")]
    NotUtf8(String),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl TgStatsError {
    /// Creates a "no input files" error for the given directory.
    pub fn no_input_files(dir: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        TgStatsError::NoInputFiles {
            dir: dir.into(),
            pattern: pattern.into(),
        }
    }

    /// Creates a file-open error.
    pub fn file_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TgStatsError::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Creates a malformed-document error.
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        TgStatsError::MalformedDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if no input files were found.
    pub fn is_no_input_files(&self) -> bool {
        matches!(self, TgStatsError::NoInputFiles { .. })
    }

    /// Returns `true` if an export file could not be opened.
    pub fn is_file_open(&self) -> bool {
        matches!(self, TgStatsError::FileOpen { .. })
    }

    /// Returns `true` if an export file had an unexpected structure.
    pub fn is_malformed(&self) -> bool {
        matches!(self, TgStatsError::MalformedDocument { .. })
    }

    /// Returns `true` if this is a report-writing I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, TgStatsError::Io(_))
    }
}
