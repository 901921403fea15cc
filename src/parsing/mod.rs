//! Shared parsing utilities for Telegram HTML exports.
//!
//! This module holds the pieces of extraction that don't depend on the HTML
//! document model: locating export files in a directory and normalising the
//! raw strings (dates, sender labels) pulled out of message elements.

pub mod files;
pub mod telegram_html;

pub use files::{ExportFile, discover_export_files, export_file_number};
pub use telegram_html::{DATE_FORMAT, clean_sender_name, parse_export_date};
