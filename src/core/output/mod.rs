//! Report writers.
//!
//! This module provides writers for the computed [`Stats`](crate::core::Stats):
//! - [`write_markdown`] - one report per year plus an overall report - requires `markdown-output` feature
//! - [`write_json`] / [`to_json`] - pretty-printed `stats.json` - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - per-user activity table, semicolon delimited - requires `csv-output` feature
//! - [`write_pdf`] / [`write_pdf_with_font`] - the Markdown report set as A4 PDFs - requires `pdf-output` feature
//! - [`print_summary`] / [`write_summary`] - console summary, always available
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "markdown-output")]
//! # fn main() -> tgstats::Result<()> {
//! use tgstats::core::Analyzer;
//! use tgstats::core::output::{print_summary, write_markdown};
//! use tgstats::parser::ParseResult;
//! use std::path::Path;
//!
//! let stats = Analyzer::new().analyze(&ParseResult::from_messages("Chat", vec![]));
//! print_summary(&stats)?;
//! write_markdown(&stats, Path::new("reports"))?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "markdown-output"))]
//! # fn main() {}
//! ```

mod console;
#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "markdown-output")]
mod markdown;
#[cfg(feature = "pdf-output")]
pub mod pdf;

pub use console::{CONSOLE_TOP_WORDS, print_summary, write_summary};
#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_REPORT, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{JSON_REPORT, to_json, write_json};
#[cfg(feature = "markdown-output")]
pub use markdown::{OVERALL_REPORT, to_overall_markdown, to_year_markdown, write_markdown};
#[cfg(feature = "pdf-output")]
pub use pdf::{OVERALL_PDF, PDF_DIR, find_font, write_pdf, write_pdf_with_font};

/// Russian month names, indexed by `month - 1`.
pub const RUSSIAN_MONTHS: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// Returns the Russian name of a 1-based month, or `"?"` if out of range.
pub fn month_name(month: u32) -> &'static str {
    (month as usize)
        .checked_sub(1)
        .and_then(|i| RUSSIAN_MONTHS.get(i))
        .copied()
        .unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "Январь");
        assert_eq!(month_name(12), "Декабрь");
        assert_eq!(month_name(0), "?");
        assert_eq!(month_name(13), "?");
    }
}
