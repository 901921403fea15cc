//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the argument structure of the `tgstats`
//! binary. Report formats reuse the library's
//! [`ReportFormat`](crate::format::ReportFormat).

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AnalyzerConfig, ExtractorConfig};
use crate::format::ReportFormat;
use crate::logging::LogLevel;

/// Usage statistics for Telegram HTML chat exports: per-user activity,
/// word leaderboards and activity patterns, broken down by year.
#[derive(Parser, Debug, Clone)]
#[command(name = "tgstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    tgstats ~/Downloads/Telegram/ChatExport_2024-01-01
    tgstats ./export -o ./reports --top 30
    tgstats ./export -f json --no-console
    RUST_LOG=debug tgstats ./export")]
pub struct Args {
    /// Directory with messages.html, messages2.html, ...
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Directory for generated reports
    #[arg(short, long, value_name = "DIR", default_value = "reports")]
    pub output: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value = "markdown")]
    pub format: ReportFormat,

    /// Length of every top-words leaderboard
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top: usize,

    /// Do not print the summary to stdout
    #[arg(long)]
    pub no_console: bool,

    /// Skip the PDF companion of the Markdown reports
    #[cfg(feature = "pdf-output")]
    #[arg(long)]
    pub no_pdf: bool,

    /// TrueType font with Cyrillic glyphs for PDF reports
    #[cfg(feature = "pdf-output")]
    #[arg(long, value_name = "FILE", conflicts_with = "no_pdf")]
    pub pdf_font: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Extraction settings derived from the arguments.
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig::default()
    }

    /// Analysis settings derived from the arguments.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::new().with_top_n(self.top)
    }

    /// Whether PDF reports are written next to the Markdown ones.
    #[cfg(feature = "pdf-output")]
    pub fn wants_pdf(&self) -> bool {
        self.format == ReportFormat::Markdown && !self.no_pdf
    }

    /// Log level derived from `-v` / `-q`.
    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_flags(self.verbose, self.quiet)
    }
}
