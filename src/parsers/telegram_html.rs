//! Telegram Desktop HTML export parser.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::Message;
use crate::core::tokenizer::strip_urls;
use crate::error::DocumentError;
use crate::parser::{ExportParser, ParsedPage, SenderState};
use crate::parsing::parse_export_date;

/// Parser for Telegram Desktop HTML exports.
///
/// Each export file has the following shape (irrelevant markup omitted):
/// ```html
/// <div class="page_header"><div class="text bold">Chat Name</div></div>
/// <div class="history">
///   <div class="message default clearfix" id="message1">
///     <div class="body">
///       <div class="pull_right date details" title="05.03.2022 14:30:00 UTC+03:00">14:30</div>
///       <div class="from_name">Alice</div>
///       <div class="reply_to details">In reply to ...</div>
///       <div class="text">Hello</div>
///     </div>
///   </div>
///   <div class="message default clearfix joined" id="message2">
///     <div class="body">
///       <div class="pull_right date details" title="...">14:31</div>
///       <div class="text">continuation without sender label</div>
///     </div>
///   </div>
/// </div>
/// ```
///
/// Only the message's own `body > from_name` and `body > text` are read, so
/// the text of an embedded forwarded message never leaks into its parent.
/// Messages with no text (media, stickers, link-only text) or an unreadable
/// date are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelegramHtmlParser;

impl TelegramHtmlParser {
    pub fn new() -> Self {
        Self
    }
}

static HISTORY: LazyLock<Selector> = LazyLock::new(|| selector(".history"));
static HEADER_NAME: LazyLock<Selector> = LazyLock::new(|| selector(".page_header .text.bold"));
static MESSAGE: LazyLock<Selector> = LazyLock::new(|| selector(".message.default"));
static DATE: LazyLock<Selector> = LazyLock::new(|| selector(".date.details"));
static REPLY: LazyLock<Selector> = LazyLock::new(|| selector(".reply_to"));
static FORWARDED: LazyLock<Selector> = LazyLock::new(|| selector(".forwarded"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

fn has_classes(el: ElementRef<'_>, classes: &[&str]) -> bool {
    classes
        .iter()
        .all(|wanted| el.value().classes().any(|c| c == *wanted))
}

fn direct_child<'a>(parent: ElementRef<'a>, classes: &[&str]) -> Option<ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .find(|child| has_classes(*child, classes))
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn date_title<'a>(message: ElementRef<'a>, body: Option<ElementRef<'a>>) -> Option<&'a str> {
    body.and_then(|b| direct_child(b, &["pull_right", "date", "details"]))
        .or_else(|| message.select(&DATE).next())
        .and_then(|el| el.value().attr("title"))
}

fn extract_message(element: ElementRef<'_>, state: &mut SenderState) -> Option<Message> {
    let body = direct_child(element, &["body"]);

    // sender bookkeeping happens before any drop decision
    let label = body
        .and_then(|b| direct_child(b, &["from_name"]))
        .map(text_of);
    let sender = state.resolve(label.as_deref()).to_string();

    let text = body
        .and_then(|b| direct_child(b, &["text"]))
        .map(text_of)
        .unwrap_or_default();
    if strip_urls(&text).trim().is_empty() {
        return None;
    }

    let timestamp = date_title(element, body).and_then(parse_export_date)?;

    Some(
        Message::new(timestamp, sender, text)
            .with_reply(element.select(&REPLY).next().is_some())
            .with_forwarded(element.select(&FORWARDED).next().is_some()),
    )
}

impl ExportParser for TelegramHtmlParser {
    fn name(&self) -> &'static str {
        "Telegram HTML"
    }

    fn parse_str(
        &self,
        content: &str,
        state: &mut SenderState,
    ) -> Result<ParsedPage, DocumentError> {
        let document = Html::parse_document(content);

        if document.select(&HISTORY).next().is_none() {
            return Err(DocumentError::MissingHistory);
        }

        let chat_name = document
            .select(&HEADER_NAME)
            .next()
            .map(text_of)
            .filter(|name| !name.is_empty());

        let mut page = ParsedPage {
            chat_name,
            ..ParsedPage::default()
        };

        for element in document.select(&MESSAGE) {
            match extract_message(element, state) {
                Some(msg) => page.messages.push(msg),
                None => page.skipped += 1,
            }
        }

        Ok(page)
    }
}
