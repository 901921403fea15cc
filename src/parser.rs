//! Parser trait and the directory-level extraction driver.
//!
//! An [`ExportParser`] turns one export document into a [`ParsedPage`].
//! [`parse_directory`] drives it across all export files of a chat in
//! sequence order and produces a [`ParseResult`]: the ordered message stream
//! plus the derived [`ChatMetadata`].
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> tgstats::Result<()> {
//! use tgstats::config::ExtractorConfig;
//! use tgstats::parser::parse_directory;
//! use tgstats::parsers::TelegramHtmlParser;
//! use std::path::Path;
//!
//! let result = parse_directory(
//!     &TelegramHtmlParser::new(),
//!     Path::new("ChatExport_2024-01-01"),
//!     &ExtractorConfig::default(),
//! )?;
//! println!("{}: {} messages", result.metadata.name, result.messages.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Sender continuity
//!
//! Consecutive messages from one author carry the sender label only on the
//! first of the run. The last seen label is held in a [`SenderState`] that is
//! threaded through every file of an extraction run, so a run that spans a
//! file boundary still resolves correctly.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::Message;
use crate::config::ExtractorConfig;
use crate::error::{DocumentError, Result, TgStatsError};
use crate::message::ChatMetadata;
use crate::parsing::{clean_sender_name, discover_export_files};
use crate::progress::{Progress, ProgressCallback, no_progress};

/// Most recent explicit sender label seen during an extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenderState {
    last_sender: String,
}

impl SenderState {
    /// Creates an empty state: no sender seen yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the sender of a message from its optional label.
    ///
    /// A non-empty label (after [`clean_sender_name`]) becomes the new current
    /// sender; a missing or blank label inherits the previous one. Before any
    /// label has been seen the sender is the empty string.
    pub fn resolve(&mut self, label: Option<&str>) -> &str {
        if let Some(raw) = label {
            let cleaned = clean_sender_name(raw);
            if !cleaned.is_empty() {
                self.last_sender = cleaned;
            }
        }
        &self.last_sender
    }

    /// Returns the current sender, if any label has been seen.
    pub fn last_sender(&self) -> Option<&str> {
        (!self.last_sender.is_empty()).then_some(self.last_sender.as_str())
    }
}

/// Output of parsing a single export document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// Chat display name from the page header, if present and non-empty
    pub chat_name: Option<String>,
    /// Retained messages in document order
    pub messages: Vec<Message>,
    /// Message elements that were dropped (no text, or unparseable date)
    pub skipped: usize,
}

/// Ordered message stream and chat metadata for a whole export directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Chat-level facts derived from `messages`
    pub metadata: ChatMetadata,
    /// All retained messages in file order, then document order
    pub messages: Vec<Message>,
    /// Number of export files read
    pub files: usize,
}

impl ParseResult {
    /// Builds a result directly from messages, e.g. for tests or for
    /// messages obtained without an export directory.
    pub fn from_messages(chat_name: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            metadata: ChatMetadata::derive(chat_name, &messages),
            messages,
            files: 0,
        }
    }
}

/// Trait for parsing one export document format.
///
/// # Implementation Notes
///
/// Implementors provide:
/// - [`name`](ExportParser::name) - parser identifier
/// - [`parse_str`](ExportParser::parse_str) - extraction from document text
///
/// [`parse_file`](ExportParser::parse_file) has a default implementation that
/// reads the file and attaches its path to errors.
pub trait ExportParser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Extracts messages from the text of one export document.
    ///
    /// `state` carries the current sender across documents and is updated
    /// for every message element that has a sender label, including
    /// elements that are later dropped.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] if the document lacks the expected structure.
    fn parse_str(
        &self,
        content: &str,
        state: &mut SenderState,
    ) -> std::result::Result<ParsedPage, DocumentError>;

    /// Reads and parses one export file.
    ///
    /// # Errors
    ///
    /// - [`TgStatsError::FileOpen`] if the file cannot be read
    /// - [`TgStatsError::MalformedDocument`] if it is not UTF-8 or has an
    ///   unexpected structure
    fn parse_file(&self, path: &Path, state: &mut SenderState) -> Result<ParsedPage> {
        let bytes = fs::read(path).map_err(|e| TgStatsError::file_open(path, e))?;
        let content = String::from_utf8(bytes).map_err(|e| {
            TgStatsError::malformed(path, DocumentError::NotUtf8(e.utf8_error().to_string()).to_string())
        })?;
        self.parse_str(&content, state)
            .map_err(|e| TgStatsError::malformed(path, e.to_string()))
    }
}

/// Extracts all messages from an export directory.
///
/// See [`parse_directory_with_progress`].
///
/// # Errors
///
/// Same as [`parse_directory_with_progress`].
pub fn parse_directory<P>(parser: &P, dir: &Path, config: &ExtractorConfig) -> Result<ParseResult>
where
    P: ExportParser + ?Sized,
{
    parse_directory_with_progress(parser, dir, config, &no_progress())
}

/// Extracts all messages from an export directory, reporting progress.
///
/// Files are processed in ascending sequence order. The chat name is taken
/// from the first file only. `progress` is invoked once per file.
///
/// # Errors
///
/// - [`TgStatsError::NoInputFiles`] if no export file matches
/// - [`TgStatsError::FileOpen`] / [`TgStatsError::MalformedDocument`] on the
///   first file that fails; no partial result is returned
pub fn parse_directory_with_progress<P>(
    parser: &P,
    dir: &Path,
    config: &ExtractorConfig,
    progress: &ProgressCallback,
) -> Result<ParseResult>
where
    P: ExportParser + ?Sized,
{
    let files = discover_export_files(dir, config)?;
    if files.is_empty() {
        return Err(TgStatsError::no_input_files(dir, config.glob_pattern()));
    }

    let total = files.len();
    debug!(parser = parser.name(), files = total, dir = %dir.display(), "starting extraction");

    let mut state = SenderState::new();
    let mut chat_name = String::new();
    let mut messages = Vec::new();
    let mut skipped = 0usize;

    for (i, file) in files.iter().enumerate() {
        let page = parser.parse_file(&file.path, &mut state)?;

        if i == 0 {
            match page.chat_name {
                Some(name) => chat_name = name,
                None => warn!(file = %file.path.display(), "no chat name in page header"),
            }
        }

        debug!(
            file = %file.path.display(),
            kept = page.messages.len(),
            skipped = page.skipped,
            "parsed export file"
        );

        skipped += page.skipped;
        messages.extend(page.messages);
        progress(Progress::new(i + 1, Some(total), messages.len()));
    }

    info!(
        files = total,
        messages = messages.len(),
        skipped,
        chat = %chat_name,
        "extraction finished"
    );

    Ok(ParseResult {
        metadata: ChatMetadata::derive(chat_name, &messages),
        messages,
        files: total,
    })
}
