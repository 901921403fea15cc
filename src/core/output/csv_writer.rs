//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::stats::{Stats, YearStats};
use crate::error::Result;

/// Default file name for the CSV report.
pub const CSV_REPORT: &str = "user_activity.csv";

fn write_rows<W: Write>(writer: &mut csv::Writer<W>, scope: &str, stats: &YearStats) -> Result<()> {
    for user in stats.sorted_users() {
        writer.write_record([
            scope,
            user.name.as_str(),
            user.count.to_string().as_str(),
            format!("{:.1}", stats.user_share(&user.name)).as_str(),
        ])?;
    }
    Ok(())
}

fn write_to<W: Write>(stats: &Stats, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(["scope", "user", "messages", "share"])?;
    for (year, ys) in &stats.by_year {
        write_rows(&mut writer, &year.to_string(), ys)?;
    }
    write_rows(&mut writer, "overall", &stats.overall)?;

    writer.flush()?;
    Ok(())
}

/// Writes per-user activity to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `scope`, `user`, `messages`, `share`
/// - `scope` is a year, or `overall` for the whole chat
/// - `share` is a percentage with one decimal
/// - Encoding: UTF-8
pub fn write_csv(stats: &Stats, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_to(stats, file)
}

/// Same as [`write_csv`], but returns a String.
pub fn to_csv(stats: &Stats) -> Result<String> {
    let mut buf = Vec::new();
    write_to(stats, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
