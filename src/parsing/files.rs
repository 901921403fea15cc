//! Export file discovery.
//!
//! Telegram Desktop writes a chat as `messages.html`, `messages2.html`,
//! `messages3.html`, ... Files are located with a glob and processed in
//! ascending order of the embedded number; the unnumbered file counts as 0.

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use crate::config::ExtractorConfig;
use crate::error::{Result, TgStatsError};

/// One export file together with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExportFile {
    /// Sequence number embedded in the file name (0 when absent)
    pub number: u64,
    /// Full path to the file
    pub path: PathBuf,
}

fn file_name_regex(config: &ExtractorConfig) -> Option<Regex> {
    let pattern = format!(
        r"^{}(\d*)\.{}$",
        regex::escape(&config.file_stem),
        regex::escape(&config.extension)
    );
    Regex::new(&pattern).ok()
}

fn number_from_name(re: &Regex, file_name: &str) -> Option<u64> {
    let caps = re.captures(file_name)?;
    let digits = caps.get(1).map_or("", |m| m.as_str());
    if digits.is_empty() {
        Some(0)
    } else {
        digits.parse().ok()
    }
}

/// Returns the sequence number of an export file name.
///
/// `None` means the name does not follow the export naming scheme.
///
/// ```
/// use tgstats::config::ExtractorConfig;
/// use tgstats::parsing::export_file_number;
///
/// let config = ExtractorConfig::default();
/// assert_eq!(export_file_number("messages.html", &config), Some(0));
/// assert_eq!(export_file_number("messages12.html", &config), Some(12));
/// assert_eq!(export_file_number("messages_old.html", &config), None);
/// ```
pub fn export_file_number(file_name: &str, config: &ExtractorConfig) -> Option<u64> {
    let re = file_name_regex(config)?;
    number_from_name(&re, file_name)
}

/// Finds every export file in `dir`, sorted by sequence number.
///
/// Returns an empty list when nothing matches; deciding whether that is an
/// error is up to the caller.
///
/// # Errors
///
/// - [`TgStatsError::InvalidPattern`] if the configured stem or extension
///   produce an unusable glob
/// - [`TgStatsError::FileOpen`] if a directory entry cannot be read
pub fn discover_export_files(dir: &Path, config: &ExtractorConfig) -> Result<Vec<ExportFile>> {
    let dir_pattern = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{}/{}", dir_pattern, config.glob_pattern());

    let entries = glob::glob(&pattern).map_err(|source| TgStatsError::InvalidPattern {
        pattern: pattern.clone(),
        source,
    })?;
    let name_re = file_name_regex(config).ok_or_else(|| TgStatsError::InvalidPattern {
        pattern: pattern.clone(),
        source: glob::PatternError {
            pos: 0,
            msg: "file name pattern cannot be compiled",
        },
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            TgStatsError::file_open(path, e.into_error())
        })?;
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        match number_from_name(&name_re, name) {
            Some(number) => files.push(ExportFile { number, path }),
            None => debug!(file = %path.display(), "skipping non-export file"),
        }
    }

    files.sort();
    Ok(files)
}
