//! String helpers for Telegram HTML exports.
//!
//! Message elements carry their send time in a `title` attribute such as
//! `"05.03.2022 14:30:00 UTC+03:00"`, and forwarded-message headers append a
//! date to the sender label. These functions turn both into clean values.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

/// Layout of the local date-time part of a `title` attribute.
pub const DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

static TRAILING_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+\d{2}\.\d{2}\.\d{4}.*$").expect("trailing date pattern is valid")
});

/// Parses an export timestamp, discarding the UTC offset.
///
/// The wall-clock time is kept as written; no conversion is applied.
///
/// ```
/// use tgstats::parsing::parse_export_date;
///
/// let ts = parse_export_date("05.03.2022 14:30:00 UTC+03:00").unwrap();
/// assert_eq!(ts.to_string(), "2022-03-05 14:30:00");
///
/// assert!(parse_export_date("yesterday").is_none());
/// ```
pub fn parse_export_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    let local = raw.find(" UTC").map_or(raw, |idx| &raw[..idx]);

    if let Ok(ts) = NaiveDateTime::parse_from_str(local, DATE_FORMAT) {
        return Some(ts);
    }

    // some exports use a different zone token, e.g. "GMT+3"
    let (head, _zone) = local.rsplit_once(' ')?;
    NaiveDateTime::parse_from_str(head, DATE_FORMAT).ok()
}

/// Strips a trailing date from a sender label and trims it.
///
/// ```
/// use tgstats::parsing::clean_sender_name;
///
/// assert_eq!(clean_sender_name("Bob 05.03.2022 14:00:00"), "Bob");
/// assert_eq!(clean_sender_name("  Alice  "), "Alice");
/// ```
pub fn clean_sender_name(raw: &str) -> String {
    TRAILING_DATE_RE.replace(raw, "").trim().to_string()
}
