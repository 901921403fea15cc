//! Property-based tests for tgstats.
//!
//! These tests generate random message streams and check the aggregation
//! invariants.

use proptest::prelude::*;

use chrono::{NaiveDate, NaiveDateTime};
use tgstats::Message;
use tgstats::core::stopwords::RUSSIAN;
use tgstats::core::{Analyzer, Stats, StopWords, Tokenizer, YearStats, main_users, sorted_users};
use tgstats::parser::ParseResult;

fn arb_timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (2018i32..2024, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60).prop_map(|(y, mo, d, h, mi)| {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    })
}

/// Generate a random Message using fast strategies (no regex!)
fn arb_message() -> impl Strategy<Value = Message> {
    (
        arb_timestamp(),
        prop::sample::select(vec!["Alice", "Bob", "Charlie", "Иван", "🔥"]),
        prop::sample::select(vec![
            "Привет, как дела?",
            "это был отличный день и я рад",
            "hello world hello",
            "смотри https://example.com/a?b=c тут",
            "2024 год 1 и 22 а",
            "Кот КОТ кот котик",
            "🎉🔥 emoji only words",
            "ну да ок",
        ]),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(ts, sender, text, reply, fwd)| {
            Message::new(ts, sender, text)
                .with_reply(reply)
                .with_forwarded(fwd)
        })
}

fn arb_messages(max_len: usize) -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec(arb_message(), 0..max_len)
}

fn analyze(messages: Vec<Message>, top_n: usize) -> Stats {
    let analyzer = Analyzer::with_config(tgstats::config::AnalyzerConfig::new().with_top_n(top_n));
    analyzer.analyze(&ParseResult::from_messages("Chat", messages))
}

fn all_accumulators(stats: &Stats) -> impl Iterator<Item = &YearStats> {
    stats.by_year.values().chain(std::iter::once(&stats.overall))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // CONSERVATION
    // ============================================

    /// Users, hours and months all add up to the message total
    #[test]
    fn counts_are_conserved(messages in arb_messages(60)) {
        let stats = analyze(messages, 20);
        for ys in all_accumulators(&stats) {
            prop_assert_eq!(ys.messages_by_user.values().sum::<u64>(), ys.total_messages);
            prop_assert_eq!(ys.hourly_activity.iter().sum::<u64>(), ys.total_messages);
            prop_assert_eq!(ys.monthly_activity.values().sum::<u64>(), ys.total_messages);
            let windows: u64 = ys.window_counts().iter().map(|w| w.count).sum();
            prop_assert_eq!(windows, ys.total_messages);
        }
    }

    /// Year totals partition the overall total
    #[test]
    fn years_partition_overall(messages in arb_messages(60)) {
        let total = messages.len() as u64;
        let stats = analyze(messages, 20);
        let sum: u64 = stats.by_year.values().map(|y| y.total_messages).sum();
        prop_assert_eq!(sum, stats.overall.total_messages);
        prop_assert_eq!(stats.overall.total_messages, total);
        prop_assert_eq!(stats.sorted_years().len(), stats.by_year.len());
    }

    /// Reply and forwarded counts partition like totals
    #[test]
    fn flag_counts_partition(messages in arb_messages(60)) {
        let replies = messages.iter().filter(|m| m.is_reply()).count() as u64;
        let forwarded = messages.iter().filter(|m| m.is_forwarded()).count() as u64;
        let stats = analyze(messages, 20);
        prop_assert_eq!(stats.overall.replies_count, replies);
        prop_assert_eq!(stats.overall.forwarded_count, forwarded);
        prop_assert_eq!(stats.by_year.values().map(|y| y.replies_count).sum::<u64>(), replies);
    }

    // ============================================
    // LEADERBOARDS
    // ============================================

    /// Top-N lists are bounded and sorted by count
    #[test]
    fn top_words_bounded_and_sorted(messages in arb_messages(60), top_n in 1usize..25) {
        let stats = analyze(messages, top_n);
        for ys in all_accumulators(&stats) {
            let lists = std::iter::once(&ys.top_words).chain(ys.top_words_by_user.values());
            for list in lists {
                prop_assert!(list.len() <= top_n);
                for pair in list.windows(2) {
                    prop_assert!(pair[0].count >= pair[1].count);
                    if pair[0].count == pair[1].count {
                        prop_assert!(pair[0].word < pair[1].word);
                    }
                }
            }
        }
    }

    /// The most active window is never beaten by another window
    #[test]
    fn most_active_window_is_max(messages in arb_messages(60)) {
        let stats = analyze(messages, 20);
        for ys in all_accumulators(&stats) {
            let best = ys.most_active_window;
            prop_assert_eq!(best.end_hour, best.start_hour + 2);
            for w in ys.window_counts() {
                prop_assert!(w.count <= best.count);
                if w.count == best.count {
                    prop_assert!(w.start_hour >= best.start_hour);
                }
            }
        }
    }

    /// The most active month is a histogram maximum, absent only when empty
    #[test]
    fn most_active_month_is_max(messages in arb_messages(60)) {
        let stats = analyze(messages, 20);
        for ys in all_accumulators(&stats) {
            match ys.most_active_month {
                Some(month) => {
                    prop_assert_eq!(ys.monthly_activity.get(&month.key()).copied(), Some(month.count));
                    prop_assert!(ys.monthly_activity.values().all(|&c| c <= month.count));
                }
                None => prop_assert_eq!(ys.total_messages, 0),
            }
        }
    }

    /// Sorted users are ordered and main users are a prefix of them
    #[test]
    fn main_users_prefix_of_sorted(messages in arb_messages(60)) {
        let stats = analyze(messages, 20);
        let ys = &stats.overall;
        let sorted = sorted_users(&ys.messages_by_user);
        let main = main_users(&ys.messages_by_user, ys.total_messages);
        prop_assert!(main.len() <= sorted.len());
        prop_assert_eq!(&sorted[..main.len()], &main[..]);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }

    // ============================================
    // TOKENIZER
    // ============================================

    /// No stopword, single-letter or all-digit token is ever counted
    #[test]
    fn stopwords_never_counted(messages in arb_messages(60)) {
        let stats = analyze(messages, 20);
        for ys in all_accumulators(&stats) {
            let user_maps = ys.top_words_by_user.values().flatten().map(|w| &w.word);
            for word in ys.word_frequency.keys().chain(user_maps) {
                prop_assert!(!RUSSIAN.contains(&word.as_str()), "stopword counted: {}", word);
                prop_assert!(word.chars().count() > 1);
                prop_assert!(!word.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }

    /// Tokens are lowercase and never contain separators or URLs
    #[test]
    fn tokens_are_normalized(text in "[a-zA-Zа-яА-Я0-9 ,.!?:/]{0,80}") {
        let tokenizer = Tokenizer::new(StopWords::none());
        for token in tokenizer.tokenize(&text) {
            prop_assert_eq!(token.to_lowercase(), token.clone());
            prop_assert!(token.chars().all(char::is_alphanumeric));
        }
    }

    /// Analysis is deterministic
    #[test]
    fn analysis_is_idempotent(messages in arb_messages(40)) {
        let result = ParseResult::from_messages("Chat", messages);
        let analyzer = Analyzer::new();
        prop_assert_eq!(analyzer.analyze(&result), analyzer.analyze(&result));
    }
}
