//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::stats::Stats;
use crate::error::Result;

/// Default file name for the JSON report.
pub const JSON_REPORT: &str = "stats.json";

/// Serializes statistics as pretty-printed JSON.
///
/// Raw word-frequency maps are omitted; leaderboards, histograms and peaks
/// are included.
///
/// # Format
/// ```json
/// {
///   "chat_name": "Chat",
///   "chat_kind": "private",
///   "overall": { "year": null, "total_messages": 3, ... },
///   "by_year": { "2021": { "year": 2021, ... } }
/// }
/// ```
pub fn to_json(stats: &Stats) -> Result<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}

/// Writes the JSON report to `path`.
pub fn write_json(stats: &Stats, path: &Path) -> Result<()> {
    let json = to_json(stats)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}
