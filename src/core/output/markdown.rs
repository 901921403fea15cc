//! Markdown report writer.
//!
//! Produces one `<year>_report.md` per calendar year and an
//! `overall_report.md` summarising the whole chat. Reports are in Russian.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::debug;

use crate::core::ranking::UserCount;
use crate::core::stats::{MonthStat, Stats, WordCount, YearStats};
use crate::error::Result;

use super::month_name;

/// File name of the whole-chat report.
pub const OVERALL_REPORT: &str = "overall_report.md";

fn format_date(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}

fn share(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn push_user_table(out: &mut String, users: &[UserCount], total: u64) {
    out.push_str("| Участник | Сообщений | Доля |\n");
    out.push_str("|----------|-----------|------|\n");
    for user in users {
        out.push_str(&format!(
            "| {} | {} | {:.1}% |\n",
            user.name,
            user.count,
            share(user.count, total)
        ));
    }
    out.push('\n');
}

fn push_word_table(out: &mut String, heading: &str, name: &str, words: &[WordCount]) {
    out.push_str(&format!("{heading} {name}\n\n"));
    out.push_str("| # | Слово | Количество |\n");
    out.push_str("|---|-------|------------|\n");
    for (i, wc) in words.iter().enumerate() {
        out.push_str(&format!("| {} | {} | {} |\n", i + 1, wc.word, wc.count));
    }
    out.push('\n');
}

fn push_main_user_words(out: &mut String, heading: &str, stats: &YearStats) {
    for user in stats.main_users() {
        if let Some(words) = stats.top_words_by_user.get(&user.name) {
            if !words.is_empty() {
                push_word_table(out, heading, &user.name, words);
            }
        }
    }
}

fn month_label(month: &MonthStat) -> String {
    format!("{} {}", month_name(month.month), month.year)
}

fn push_metadata(
    out: &mut String,
    stats: &Stats,
    year: &YearStats,
    replies_label: &str,
    forwarded_label: &str,
) {
    out.push_str("## Метаданные чата\n\n");
    out.push_str(&format!("- **Название чата:** {}\n", stats.chat_name));
    out.push_str(&format!("- **Тип:** {}\n", stats.chat_kind));
    out.push_str(&format!(
        "- **Период:** {} — {}\n",
        format_date(year.first_message),
        format_date(year.last_message)
    ));
    out.push_str(&format!("- **Всего сообщений:** {}\n", year.total_messages));
    out.push_str(&format!("- **{replies_label}:** {}\n", year.replies_count));
    out.push_str(&format!("- **{forwarded_label}:** {}\n", year.forwarded_count));
    out.push_str(&format!(
        "- **Средняя длина сообщения:** {:.1} символов\n\n",
        year.avg_message_length
    ));
}

/// Renders the report for a single year.
pub fn to_year_markdown(stats: &Stats, year: &YearStats) -> String {
    let mut out = String::new();

    match year.year {
        Some(y) => out.push_str(&format!("# Отчет по чату за {y} год\n\n")),
        None => out.push_str("# Отчет по чату\n\n"),
    }

    push_metadata(&mut out, stats, year, "Ответов", "Пересланных");

    out.push_str("## Сообщения по участникам\n\n");
    push_user_table(&mut out, &year.sorted_users(), year.total_messages);

    out.push_str("## Топ популярных слов по участникам\n\n");
    push_main_user_words(&mut out, "###", year);

    out.push_str("## Самый активный период\n\n");
    let window = year.most_active_window;
    out.push_str(&format!(
        "**{:02}:00 — {:02}:00** — {} сообщений\n\n",
        window.start_hour, window.end_hour, window.count
    ));

    out.push_str("### Активность по часам\n\n");
    out.push_str("| Период | Сообщений |\n");
    out.push_str("|--------|----------|\n");
    for w in year.window_counts() {
        out.push_str(&format!("| {} | {} |\n", w.label(), w.count));
    }
    out.push('\n');

    out.push_str("## Самый активный месяц\n\n");
    if let Some(month) = year.most_active_month.filter(|m| !m.is_empty()) {
        out.push_str(&format!(
            "**{}** — {} сообщений\n\n",
            month_label(&month),
            month.count
        ));
    }

    out.push_str("### Активность по месяцам\n\n");
    out.push_str("| Месяц | Сообщений |\n");
    out.push_str("|-------|----------|\n");
    for (key, count) in &year.monthly_activity {
        let label = key
            .split_once('-')
            .and_then(|(y, m)| Some((y.parse::<i32>().ok()?, m.parse::<u32>().ok()?)))
            .map(|(y, m)| format!("{} {}", month_name(m), y))
            .unwrap_or_else(|| key.clone());
        out.push_str(&format!("| {label} | {count} |\n"));
    }
    out.push('\n');

    out
}

/// Renders the whole-chat report.
pub fn to_overall_markdown(stats: &Stats) -> String {
    let mut out = String::new();
    let overall = &stats.overall;

    out.push_str("# Общий отчет по чату\n\n");
    push_metadata(&mut out, stats, overall, "Всего ответов", "Всего пересланных");

    out.push_str("## Статистика по годам\n\n");
    out.push_str("| Год | Сообщений | Ответов | Пересланных |\n");
    out.push_str("|-----|-----------|---------|-------------|\n");
    for (year, ys) in &stats.by_year {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            year, ys.total_messages, ys.replies_count, ys.forwarded_count
        ));
    }
    out.push('\n');

    out.push_str("## Сообщения по участникам (всего)\n\n");
    push_user_table(&mut out, &overall.sorted_users(), overall.total_messages);

    out.push_str("## Сообщения по участникам (по годам)\n\n");
    for (year, ys) in &stats.by_year {
        out.push_str(&format!("### {year} год\n\n"));
        push_user_table(&mut out, &ys.sorted_users(), ys.total_messages);
    }

    out.push_str("## Топ популярных слов по участникам (всего)\n\n");
    push_main_user_words(&mut out, "###", overall);

    out.push_str("## Топ слов по участникам (по годам)\n\n");
    for (year, ys) in &stats.by_year {
        out.push_str(&format!("### {year} год\n\n"));
        push_main_user_words(&mut out, "####", ys);
    }

    out.push_str("## Самый активный период (общий)\n\n");
    let window = overall.most_active_window;
    out.push_str(&format!(
        "**{:02}:00 — {:02}:00** — {} сообщений\n\n",
        window.start_hour, window.end_hour, window.count
    ));

    out.push_str("### Самый активный период по годам\n\n");
    out.push_str("| Год | Период | Сообщений |\n");
    out.push_str("|-----|--------|----------|\n");
    for (year, ys) in &stats.by_year {
        let w = ys.most_active_window;
        out.push_str(&format!("| {} | {} | {} |\n", year, w.label(), w.count));
    }
    out.push('\n');

    out.push_str("## Самый активный месяц (общий)\n\n");
    if let Some(month) = overall.most_active_month.filter(|m| !m.is_empty()) {
        out.push_str(&format!(
            "**{}** — {} сообщений\n\n",
            month_label(&month),
            month.count
        ));
    }

    out.push_str("### Самый активный месяц по годам\n\n");
    out.push_str("| Год | Месяц | Сообщений |\n");
    out.push_str("|-----|-------|----------|\n");
    for (year, ys) in &stats.by_year {
        if let Some(month) = ys.most_active_month.filter(|m| !m.is_empty()) {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                year,
                month_name(month.month),
                month.count
            ));
        }
    }
    out.push('\n');

    out
}

/// Writes all markdown reports into `dir`, creating it if needed.
///
/// Returns the written paths: yearly reports in ascending year order, then
/// the overall report.
pub fn write_markdown(stats: &Stats, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(stats.by_year.len() + 1);

    for (year, ys) in &stats.by_year {
        let path = dir.join(format!("{year}_report.md"));
        fs::write(&path, to_year_markdown(stats, ys))?;
        debug!(path = %path.display(), "wrote year report");
        written.push(path);
    }

    let path = dir.join(OVERALL_REPORT);
    fs::write(&path, to_overall_markdown(stats))?;
    debug!(path = %path.display(), "wrote overall report");
    written.push(path);

    Ok(written)
}
