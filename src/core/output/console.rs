//! Human-readable console summary.

use std::io::{self, Write};

use crate::core::stats::{Stats, YearStats};

use super::month_name;

/// Number of words per user shown in the console summary.
pub const CONSOLE_TOP_WORDS: usize = 10;

fn format_period(stats: &YearStats) -> String {
    let fmt = |ts: Option<chrono::NaiveDateTime>| {
        ts.map(|t| t.format("%d.%m.%Y").to_string())
            .unwrap_or_else(|| "—".to_string())
    };
    format!("{} — {}", fmt(stats.first_message), fmt(stats.last_message))
}

fn write_user_shares<W: Write>(out: &mut W, stats: &YearStats) -> io::Result<()> {
    for user in stats.sorted_users() {
        writeln!(
            out,
            "  {}: {} ({:.1}%)",
            user.name,
            user.count,
            stats.user_share(&user.name)
        )?;
    }
    Ok(())
}

/// Writes the summary to any writer.
pub fn write_summary<W: Write>(out: &mut W, stats: &Stats) -> io::Result<()> {
    let rule = "=".repeat(60);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "АНАЛИЗ ЧАТА: {}", stats.chat_name)?;
    writeln!(out, "{rule}")?;

    writeln!(out)?;
    writeln!(out, "Период: {}", format_period(&stats.overall))?;
    writeln!(out, "Всего сообщений: {}", stats.overall.total_messages)?;

    writeln!(out)?;
    writeln!(out, "--- Сообщения по участникам ---")?;
    write_user_shares(out, &stats.overall)?;

    let dashes = "-".repeat(20);
    for (year, ys) in &stats.by_year {
        writeln!(out)?;
        writeln!(out, "{dashes} {year} ГОД {dashes}")?;
        writeln!(out, "Сообщений: {}", ys.total_messages)?;

        writeln!(out)?;
        writeln!(out, "Сообщения по участникам:")?;
        write_user_shares(out, ys)?;

        writeln!(out)?;
        writeln!(out, "Топ слов по участникам:")?;
        for user in ys.main_users() {
            let Some(words) = ys.top_words_by_user.get(&user.name) else {
                continue;
            };
            if words.is_empty() {
                continue;
            }
            writeln!(out)?;
            writeln!(out, "  [{}]:", user.name)?;
            for (i, wc) in words.iter().take(CONSOLE_TOP_WORDS).enumerate() {
                writeln!(out, "    {:2}. {} ({})", i + 1, wc.word, wc.count)?;
            }
        }

        writeln!(out)?;
        let w = ys.most_active_window;
        writeln!(out, "Самый активный период: {} ({} сообщений)", w.label(), w.count)?;
        if let Some(m) = ys.most_active_month.filter(|m| !m.is_empty()) {
            writeln!(
                out,
                "Самый активный месяц: {} {} ({} сообщений)",
                month_name(m.month),
                m.year,
                m.count
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    Ok(())
}

/// Prints the summary to stdout.
pub fn print_summary(stats: &Stats) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_summary(&mut lock, stats)
}
