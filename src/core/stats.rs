//! Statistics data model.
//!
//! [`YearStats`] is the single accumulator type used for both a calendar year
//! and the whole chat. It is built in two phases: [`YearStats::record`] is
//! called once per message, then [`YearStats::finalize`] derives the ranked
//! and averaged fields. [`Stats`] owns one accumulator per year plus the
//! overall one and is only handed out after finalization.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

use super::ranking::{self, UserCount};
use crate::Message;
use crate::message::ChatKind;

/// Number of hours in one activity window.
pub const WINDOW_HOURS: u32 = 2;

/// A word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// A fixed two-hour window of the day, `[start_hour, end_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeWindow {
    pub start_hour: u32,
    pub end_hour: u32,
    pub count: u64,
}

impl TimeWindow {
    /// Human-readable range, e.g. `"14:00-16:00"`.
    pub fn label(&self) -> String {
        format!("{:02}:00-{:02}:00", self.start_hour, self.end_hour)
    }

    /// Returns `true` if no message fell into this window.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start_hour: 0,
            end_hour: WINDOW_HOURS,
            count: 0,
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} messages)", self.label(), self.count)
    }
}

/// A calendar month and its message count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthStat {
    pub year: i32,
    /// 1-based month number
    pub month: u32,
    pub count: u64,
}

impl MonthStat {
    /// Histogram key, e.g. `"2022-03"`.
    pub fn key(&self) -> String {
        month_key(self.year, self.month)
    }

    /// Returns `true` if the month has no messages.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Builds the `YYYY-MM` key used by the monthly histogram.
pub fn month_key(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

/// Aggregated statistics for one calendar year or for the whole chat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearStats {
    /// Calendar year, or `None` for the whole-chat accumulator
    pub year: Option<i32>,
    pub total_messages: u64,
    pub messages_by_user: BTreeMap<String, u64>,

    #[serde(skip)]
    pub word_frequency: HashMap<String, u64>,
    #[serde(skip)]
    pub word_frequency_by_user: HashMap<String, HashMap<String, u64>>,

    /// Filled by [`finalize`](YearStats::finalize)
    pub top_words: Vec<WordCount>,
    /// Filled by [`finalize`](YearStats::finalize)
    pub top_words_by_user: BTreeMap<String, Vec<WordCount>>,

    /// Message count per hour of day, index 0..=23
    pub hourly_activity: [u64; 24],
    /// Message count per `YYYY-MM`
    pub monthly_activity: BTreeMap<String, u64>,

    /// Filled by [`finalize`](YearStats::finalize)
    pub most_active_window: TimeWindow,
    /// Filled by [`finalize`](YearStats::finalize); `None` when there were no messages
    pub most_active_month: Option<MonthStat>,

    pub first_message: Option<NaiveDateTime>,
    pub last_message: Option<NaiveDateTime>,
    pub replies_count: u64,
    pub forwarded_count: u64,

    /// Mean text length in characters, filled by [`finalize`](YearStats::finalize)
    pub avg_message_length: f64,

    #[serde(skip)]
    total_length: u64,
}

impl YearStats {
    /// Creates an empty accumulator for a calendar year.
    pub fn for_year(year: i32) -> Self {
        Self::empty(Some(year))
    }

    /// Creates an empty whole-chat accumulator.
    pub fn overall() -> Self {
        Self::empty(None)
    }

    fn empty(year: Option<i32>) -> Self {
        Self {
            year,
            total_messages: 0,
            messages_by_user: BTreeMap::new(),
            word_frequency: HashMap::new(),
            word_frequency_by_user: HashMap::new(),
            top_words: Vec::new(),
            top_words_by_user: BTreeMap::new(),
            hourly_activity: [0; 24],
            monthly_activity: BTreeMap::new(),
            most_active_window: TimeWindow::default(),
            most_active_month: None,
            first_message: None,
            last_message: None,
            replies_count: 0,
            forwarded_count: 0,
            avg_message_length: 0.0,
            total_length: 0,
        }
    }

    /// Folds one message and its tokens into the accumulator.
    pub(crate) fn record(&mut self, msg: &Message, tokens: &[String]) {
        let ts = msg.timestamp();
        let sender = msg.sender();

        self.total_messages += 1;
        *self.messages_by_user.entry(sender.to_string()).or_insert(0) += 1;

        let user_words = self
            .word_frequency_by_user
            .entry(sender.to_string())
            .or_default();
        for token in tokens {
            *self.word_frequency.entry(token.clone()).or_insert(0) += 1;
            *user_words.entry(token.clone()).or_insert(0) += 1;
        }

        self.hourly_activity[ts.hour() as usize] += 1;
        *self
            .monthly_activity
            .entry(month_key(ts.year(), ts.month()))
            .or_insert(0) += 1;

        if self.first_message.is_none_or(|first| ts < first) {
            self.first_message = Some(ts);
        }
        if self.last_message.is_none_or(|last| ts > last) {
            self.last_message = Some(ts);
        }

        if msg.is_reply() {
            self.replies_count += 1;
        }
        if msg.is_forwarded() {
            self.forwarded_count += 1;
        }
        self.total_length += msg.length() as u64;
    }

    /// Computes leaderboards, peaks and the average length.
    pub(crate) fn finalize(&mut self, top_n: usize) {
        self.top_words = ranking::top_words(&self.word_frequency, top_n);
        self.top_words_by_user = self
            .word_frequency_by_user
            .iter()
            .map(|(user, freq)| (user.clone(), ranking::top_words(freq, top_n)))
            .collect();
        self.most_active_window = ranking::most_active_window(&self.hourly_activity);
        self.most_active_month = ranking::most_active_month(&self.monthly_activity);
        self.avg_message_length = if self.total_messages > 0 {
            self.total_length as f64 / self.total_messages as f64
        } else {
            0.0
        };
    }

    /// Message counts for all twelve windows, in hour order.
    pub fn window_counts(&self) -> [TimeWindow; 12] {
        ranking::window_counts(&self.hourly_activity)
    }

    /// Users by message count, most active first.
    pub fn sorted_users(&self) -> Vec<UserCount> {
        ranking::sorted_users(&self.messages_by_user)
    }

    /// Users worth listing individually in reports.
    pub fn main_users(&self) -> Vec<UserCount> {
        ranking::main_users(&self.messages_by_user, self.total_messages)
    }

    /// Share of all messages sent by `user`, in percent.
    pub fn user_share(&self, user: &str) -> f64 {
        match self.messages_by_user.get(user) {
            Some(&count) if self.total_messages > 0 => {
                count as f64 / self.total_messages as f64 * 100.0
            }
            _ => 0.0,
        }
    }
}

/// Complete statistics for a chat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub chat_name: String,
    pub chat_kind: ChatKind,
    pub overall: YearStats,
    pub by_year: BTreeMap<i32, YearStats>,
}

impl Stats {
    /// Years that contain at least one message, ascending.
    pub fn sorted_years(&self) -> Vec<i32> {
        self.by_year.keys().copied().collect()
    }

    /// Statistics for a single year.
    pub fn year(&self, year: i32) -> Option<&YearStats> {
        self.by_year.get(&year)
    }

    /// Returns `true` if no message was analyzed.
    pub fn is_empty(&self) -> bool {
        self.overall.total_messages == 0
    }
}
