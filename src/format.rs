//! Report format selection.
//!
//! [`ReportFormat`] is a library-level enum that doesn't depend on the CLI
//! framework; [`write_report`] dispatches to the matching writer in
//! [`core::output`](crate::core::output).
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "json-output")]
//! # fn main() -> tgstats::Result<()> {
//! use tgstats::core::Analyzer;
//! use tgstats::format::{ReportFormat, write_report};
//! use tgstats::parser::ParseResult;
//! use std::path::Path;
//!
//! let stats = Analyzer::new().analyze(&ParseResult::from_messages("Chat", vec![]));
//! let written = write_report(&stats, Path::new("reports"), ReportFormat::Json)?;
//! assert!(written[0].ends_with("stats.json"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json-output"))]
//! # fn main() {}
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::stats::Stats;
use crate::error::{Result, TgStatsError};

/// Report output format.
///
/// - [`Markdown`](ReportFormat::Markdown) - per-year and overall `.md` reports (default)
/// - [`Json`](ReportFormat::Json) - a single `stats.json`
/// - [`Csv`](ReportFormat::Csv) - `user_activity.csv`, per-user counts by year
///
/// # Example
///
/// ```rust
/// use tgstats::format::ReportFormat;
///
/// let format: ReportFormat = "md".parse().unwrap();
/// assert_eq!(format, ReportFormat::Markdown);
/// assert_eq!(format.extension(), "md");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[non_exhaustive]
pub enum ReportFormat {
    /// Markdown reports, one per year plus an overall one
    #[default]
    #[serde(alias = "md")]
    #[cfg_attr(feature = "cli", value(alias = "md"))]
    Markdown,

    /// Pretty-printed JSON of all statistics
    Json,

    /// Semicolon-delimited per-user activity
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["markdown", "md", "json", "csv"]
    }

    /// Returns the cargo feature that provides this format.
    pub fn feature(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "markdown-output",
            ReportFormat::Json => "json-output",
            ReportFormat::Csv => "csv-output",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Markdown => write!(f, "Markdown"),
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes the report for `format` into `dir`, creating it if needed.
///
/// Returns the paths of all files written.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - A file cannot be written
#[allow(unused_variables)]
pub fn write_report(stats: &Stats, dir: &Path, format: ReportFormat) -> Result<Vec<PathBuf>> {
    match format {
        #[cfg(feature = "markdown-output")]
        ReportFormat::Markdown => crate::core::output::write_markdown(stats, dir),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => {
            std::fs::create_dir_all(dir)?;
            let path = dir.join(crate::core::output::JSON_REPORT);
            crate::core::output::write_json(stats, &path)?;
            Ok(vec![path])
        }
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => {
            std::fs::create_dir_all(dir)?;
            let path = dir.join(crate::core::output::CSV_REPORT);
            crate::core::output::write_csv(stats, &path)?;
            Ok(vec![path])
        }
        #[allow(unreachable_patterns)]
        _ => Err(TgStatsError::FormatUnavailable {
            format: format.extension(),
            feature: format.feature(),
        }),
    }
}
