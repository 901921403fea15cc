//! Ranking helpers: leaderboards, peak windows and months, user ordering.
//!
//! All functions are pure and deterministic. Ties are broken the same way
//! everywhere so repeated runs over the same input produce identical reports:
//! - words: higher count first, then lexicographic
//! - windows: the earliest window wins
//! - months: the earliest month wins
//! - users: higher count first, then lexicographic

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::stats::{MonthStat, TimeWindow, WINDOW_HOURS, WordCount};

/// Minimum number of users always listed by [`main_users`].
pub const MIN_LISTED_USERS: usize = 10;

/// A user and their message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCount {
    pub name: String,
    pub count: u64,
}

/// Returns at most `n` words ordered by count descending, then by word.
///
/// ```
/// use std::collections::HashMap;
/// use tgstats::core::ranking::top_words;
///
/// let freq = HashMap::from([("b".to_string(), 2), ("a".to_string(), 2), ("c".to_string(), 5)]);
/// let top: Vec<_> = top_words(&freq, 2).into_iter().map(|w| w.word).collect();
/// assert_eq!(top, vec!["c", "a"]);
/// ```
pub fn top_words(freq: &HashMap<String, u64>, n: usize) -> Vec<WordCount> {
    let mut words: Vec<WordCount> = freq
        .iter()
        .map(|(word, &count)| WordCount {
            word: word.clone(),
            count,
        })
        .collect();
    words.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    words.truncate(n);
    words
}

/// Sums the hourly histogram into the twelve fixed windows.
pub fn window_counts(hourly: &[u64; 24]) -> [TimeWindow; 12] {
    std::array::from_fn(|i| {
        let start = i as u32 * WINDOW_HOURS;
        let end = start + WINDOW_HOURS;
        TimeWindow {
            start_hour: start,
            end_hour: end,
            count: hourly[start as usize..end as usize].iter().sum(),
        }
    })
}

/// Returns the window with the most messages.
///
/// With an all-zero histogram the result is `[00:00, 02:00)` with count 0.
pub fn most_active_window(hourly: &[u64; 24]) -> TimeWindow {
    let windows = window_counts(hourly);
    let mut best = windows[0];
    for window in &windows[1..] {
        if window.count > best.count {
            best = *window;
        }
    }
    best
}

/// Returns the month with the most messages, or `None` for an empty histogram.
///
/// Keys that are not `YYYY-MM` are ignored.
pub fn most_active_month(monthly: &BTreeMap<String, u64>) -> Option<MonthStat> {
    let mut best: Option<MonthStat> = None;
    for (key, &count) in monthly {
        let Some(date) = parse_month_key(key) else {
            continue;
        };
        if best.is_none_or(|b| count > b.count) {
            best = Some(MonthStat {
                year: date.year(),
                month: date.month(),
                count,
            });
        }
    }
    best
}

fn parse_month_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d").ok()
}

/// Users ordered by message count descending, then by name.
pub fn sorted_users(by_user: &BTreeMap<String, u64>) -> Vec<UserCount> {
    let mut users: Vec<UserCount> = by_user
        .iter()
        .map(|(name, &count)| UserCount {
            name: name.clone(),
            count,
        })
        .collect();
    // BTreeMap iteration is already name-ordered, a stable sort keeps it
    users.sort_by(|a, b| b.count.cmp(&a.count));
    users
}

/// Users significant enough to list individually.
///
/// The first [`MIN_LISTED_USERS`] users are always kept; after that a user
/// must have at least `max(total / 100, 10)` messages.
pub fn main_users(by_user: &BTreeMap<String, u64>, total: u64) -> Vec<UserCount> {
    let threshold = (total / 100).max(10);
    sorted_users(by_user)
        .into_iter()
        .enumerate()
        .take_while(|(i, user)| *i < MIN_LISTED_USERS || user.count >= threshold)
        .map(|(_, user)| user)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
        pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn test_top_words_order_and_bound() {
        let f = freq(&[("мир", 3), ("привет", 3), ("кот", 1), ("дом", 2)]);
        let top = top_words(&f, 3);
        let got: Vec<(&str, u64)> = top.iter().map(|w| (w.word.as_str(), w.count)).collect();
        assert_eq!(got, vec![("мир", 3), ("привет", 3), ("дом", 2)]);
    }

    #[test]
    fn test_top_words_fewer_than_n() {
        let f = freq(&[("a1", 1)]);
        assert_eq!(top_words(&f, 20).len(), 1);
        assert!(top_words(&HashMap::new(), 20).is_empty());
        assert!(top_words(&f, 0).is_empty());
    }

    #[test]
    fn test_window_counts() {
        let mut hourly = [0u64; 24];
        hourly[0] = 1;
        hourly[1] = 2;
        hourly[23] = 4;
        let windows = window_counts(&hourly);
        assert_eq!(windows[0].count, 3);
        assert_eq!(windows[11].start_hour, 22);
        assert_eq!(windows[11].end_hour, 24);
        assert_eq!(windows[11].count, 4);
        assert_eq!(windows.iter().map(|w| w.count).sum::<u64>(), 7);
    }

    #[test]
    fn test_most_active_window() {
        let mut hourly = [0u64; 24];
        hourly[14] = 5;
        hourly[15] = 1;
        hourly[20] = 3;
        let w = most_active_window(&hourly);
        assert_eq!((w.start_hour, w.end_hour, w.count), (14, 16, 6));
    }

    #[test]
    fn test_most_active_window_tie_prefers_earliest() {
        let mut hourly = [0u64; 24];
        hourly[9] = 2;
        hourly[17] = 2;
        let w = most_active_window(&hourly);
        assert_eq!(w.start_hour, 8);
    }

    #[test]
    fn test_most_active_window_empty() {
        let w = most_active_window(&[0; 24]);
        assert_eq!((w.start_hour, w.end_hour, w.count), (0, 2, 0));
    }

    #[test]
    fn test_most_active_month() {
        let monthly: BTreeMap<String, u64> = [("2021-12", 4), ("2022-01", 7), ("2022-02", 7)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let m = most_active_month(&monthly).unwrap();
        assert_eq!((m.year, m.month, m.count), (2022, 1, 7));
    }

    #[test]
    fn test_most_active_month_empty_and_bad_keys() {
        assert!(most_active_month(&BTreeMap::new()).is_none());
        let monthly: BTreeMap<String, u64> = [("junk".to_string(), 9)].into_iter().collect();
        assert!(most_active_month(&monthly).is_none());
    }

    #[test]
    fn test_sorted_users() {
        let by_user: BTreeMap<String, u64> = [("Carol", 5), ("Alice", 5), ("Bob", 9)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let names: Vec<String> = sorted_users(&by_user).into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["Bob", "Alice", "Carol"]);
    }

    #[test]
    fn test_main_users_keeps_first_ten() {
        let by_user: BTreeMap<String, u64> = (0..15)
            .map(|i| (format!("user{i:02}"), 1))
            .collect();
        let main = main_users(&by_user, 15);
        assert_eq!(main.len(), MIN_LISTED_USERS);
    }

    #[test]
    fn test_main_users_threshold() {
        // total 5000 -> threshold 50
        let mut by_user: BTreeMap<String, u64> = (0..10)
            .map(|i| (format!("top{i}"), 400))
            .collect();
        by_user.insert("regular".into(), 60);
        by_user.insert("rare".into(), 49);
        let main = main_users(&by_user, 5000);
        let names: Vec<&str> = main.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names.len(), 11);
        assert!(names.contains(&"regular"));
        assert!(!names.contains(&"rare"));
    }
}
