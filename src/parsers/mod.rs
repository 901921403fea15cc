//! Export document parsers.
//!
//! Each parser implements the [`ExportParser`](crate::parser::ExportParser)
//! trait.
//!
//! # Available Parsers
//!
//! - [`TelegramHtmlParser`] - Parses Telegram Desktop HTML exports
//!
//! # Example
//!
//! ```rust
//! use tgstats::parser::{ExportParser, SenderState};
//! use tgstats::parsers::TelegramHtmlParser;
//!
//! let parser = TelegramHtmlParser::new();
//! assert_eq!(parser.name(), "Telegram HTML");
//! ```

mod telegram_html;

pub use telegram_html::TelegramHtmlParser;
