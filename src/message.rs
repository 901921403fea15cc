//! Message and chat metadata types produced by the extractor.
//!
//! This module provides [`Message`], the clean record recovered from one
//! message element of an export file, and [`ChatMetadata`], the chat-level
//! facts derived from the whole ordered message stream.
//!
//! # Overview
//!
//! A message consists of:
//! - **Always present**: `timestamp`, `sender`, `text`, `length`
//! - **Flags**: `is_reply`, `is_forwarded`
//!
//! Messages are immutable once built: the extractor constructs them, the
//! aggregator only reads them.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tgstats::Message;
//!
//! let ts = NaiveDate::from_ymd_opt(2021, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//!
//! let msg = Message::new(ts, "Alice", "привет мир").with_reply(true);
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.length(), 10);
//! assert!(msg.is_reply());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single text message recovered from a chat export.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Send time as written in the export, offset discarded |
/// | `sender` | `String` | Resolved display name (continuations inherit the previous author) |
/// | `text` | `String` | Trimmed text of the message's own text block |
/// | `length` | `usize` | Number of Unicode scalar values in `text` |
/// | `is_reply` | `bool` | The message quotes another message |
/// | `is_forwarded` | `bool` | The message embeds a forwarded message |
///
/// A serialized `length` is ignored on deserialization and derived again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MessageRecord")]
pub struct Message {
    timestamp: NaiveDateTime,
    sender: String,
    text: String,
    length: usize,
    is_reply: bool,
    is_forwarded: bool,
}

/// Deserialization shape of [`Message`], without the derived length.
#[derive(Deserialize)]
struct MessageRecord {
    timestamp: NaiveDateTime,
    sender: String,
    text: String,
    #[serde(default)]
    is_reply: bool,
    #[serde(default)]
    is_forwarded: bool,
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Message::new(record.timestamp, record.sender, record.text)
            .with_reply(record.is_reply)
            .with_forwarded(record.is_forwarded)
    }
}

impl Message {
    /// Creates a message; `length` is derived from `text`.
    pub fn new(timestamp: NaiveDateTime, sender: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let length = text.chars().count();
        Self {
            timestamp,
            sender: sender.into(),
            text,
            length,
            is_reply: false,
            is_forwarded: false,
        }
    }

    /// Builder method to set the reply flag.
    #[must_use]
    pub fn with_reply(mut self, is_reply: bool) -> Self {
        self.is_reply = is_reply;
        self
    }

    /// Builder method to set the forwarded flag.
    #[must_use]
    pub fn with_forwarded(mut self, is_forwarded: bool) -> Self {
        self.is_forwarded = is_forwarded;
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the resolved sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the text length in characters.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns `true` if the message is a reply.
    pub fn is_reply(&self) -> bool {
        self.is_reply
    }

    /// Returns `true` if the message carries a forwarded message.
    pub fn is_forwarded(&self) -> bool {
        self.is_forwarded
    }
}

/// Kind of chat an export belongs to.
///
/// The HTML export does not distinguish groups from private chats in a way
/// the extractor relies on, so every export is classified as [`Private`](ChatKind::Private).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    /// One-to-one chat
    #[default]
    Private,
}

impl ChatKind {
    /// Returns the label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ChatKind::Private => "личный",
        }
    }
}

impl std::fmt::Display for ChatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Chat-level facts derived from an ordered message stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMetadata {
    /// Chat display name from the first export file's header
    pub name: String,
    /// Chat classification
    pub kind: ChatKind,
    /// Timestamp of the first message in stream order
    pub first_message: Option<NaiveDateTime>,
    /// Timestamp of the last message in stream order
    pub last_message: Option<NaiveDateTime>,
    /// Number of retained messages
    pub total_count: usize,
}

impl ChatMetadata {
    /// Derives metadata from a chat name and the ordered message list.
    pub fn derive(name: impl Into<String>, messages: &[Message]) -> Self {
        Self {
            name: name.into(),
            kind: ChatKind::default(),
            first_message: messages.first().map(Message::timestamp),
            last_message: messages.last().map(Message::timestamp),
            total_count: messages.len(),
        }
    }
}
