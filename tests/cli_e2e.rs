//! End-to-end CLI tests for tgstats.
//!
//! These tests run the actual binary against export directories written to
//! temporary folders and check stdout, stderr, exit codes and report files.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

fn message(id: u32, date: &str, from: Option<&str>, text: &str) -> String {
    let from = from
        .map(|f| format!(r#"<div class="from_name">{f}</div>"#))
        .unwrap_or_default();
    format!(
        r#"<div class="message default clearfix" id="message{id}"><div class="body"><div class="pull_right date details" title="{date}">12:00</div>{from}<div class="text">{text}</div></div></div>"#
    )
}

fn export_page(messages: &[String]) -> String {
    format!(
        r#"<html><body><div class="page_header"><div class="text bold">Test Chat</div></div><div class="history">{}</div></body></html>"#,
        messages.join("\n")
    )
}

/// Creates an export directory with two files spanning two years.
fn setup_export() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    fs::write(
        dir.path().join("messages.html"),
        export_page(&[
            message(1, "10.12.2022 10:00:00 UTC+03:00", Some("Alice"), "Привет всем"),
            message(2, "10.12.2022 10:05:00 UTC+03:00", Some("Bob"), "привет Алиса"),
            message(3, "10.12.2022 10:06:00 UTC+03:00", None, "как погода"),
        ]),
    )
    .unwrap();
    fs::write(
        dir.path().join("messages2.html"),
        export_page(&[
            message(4, "02.01.2023 18:30:00 UTC+03:00", Some("Alice"), "новый год прошёл"),
            message(5, "02.01.2023 18:31:00 UTC+03:00", Some("Bob"), "погода отличная"),
        ]),
    )
    .unwrap();

    dir
}

fn tgstats() -> Command {
    Command::cargo_bin("tgstats").expect("Failed to find binary")
}

fn run_with_format(data: &Path, out: &Path, format: &str) -> assert_cmd::assert::Assert {
    tgstats()
        .arg(data)
        .args(["-o", out.to_str().unwrap(), "-f", format, "--no-console"])
        .assert()
}

// ============================================================================
// Basic Functionality
// ============================================================================

mod basic {
    use super::*;

    #[test]
    fn test_markdown_reports_written() {
        let data = setup_export();
        let out = tempdir().unwrap();

        tgstats()
            .arg(data.path())
            .args(["-o", out.path().to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("АНАЛИЗ ЧАТА: Test Chat"))
            .stdout(predicate::str::contains("Всего сообщений: 5"))
            .stdout(predicate::str::contains("2022 ГОД"))
            .stdout(predicate::str::contains("2023 ГОД"))
            .stdout(predicate::str::contains("overall_report.md"));

        assert!(out.path().join("2022_report.md").exists());
        assert!(out.path().join("2023_report.md").exists());

        let overall = fs::read_to_string(out.path().join("overall_report.md")).unwrap();
        assert!(overall.contains("# Общий отчет по чату"));
        assert!(overall.contains("| 2022 | 3 | 0 | 0 |"));
    }

    #[test]
    fn test_continuation_attributed_in_report() {
        let data = setup_export();
        let out = tempdir().unwrap();

        run_with_format(data.path(), out.path(), "md").success();

        let year = fs::read_to_string(out.path().join("2022_report.md")).unwrap();
        // message 3 has no label and inherits Bob
        assert!(year.contains("| Bob | 2 | 66.7% |"));
        assert!(year.contains("| Alice | 1 | 33.3% |"));
    }

    #[test]
    fn test_pdf_failure_is_not_fatal() {
        let data = setup_export();
        let out = tempdir().unwrap();
        let font = out.path().join("broken.ttf");
        fs::write(&font, "not a font").unwrap();

        tgstats()
            .arg(data.path())
            .args(["-o", out.path().to_str().unwrap(), "--no-console"])
            .arg("--pdf-font")
            .arg(&font)
            .assert()
            .success()
            .stderr(predicate::str::contains("PDF reports skipped"));

        assert!(out.path().join("overall_report.md").exists());
        assert!(!out.path().join("pdf-report").join("overall_report.pdf").exists());
    }

    #[test]
    fn test_no_pdf_flag() {
        let data = setup_export();
        let out = tempdir().unwrap();

        tgstats()
            .arg(data.path())
            .args(["-o", out.path().to_str().unwrap(), "--no-console", "--no-pdf"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Writing PDF reports").not());

        assert!(!out.path().join("pdf-report").exists());
    }

    #[test]
    fn test_output_dir_created() {
        let data = setup_export();
        let out = tempdir().unwrap();
        let nested = out.path().join("a").join("b");

        run_with_format(data.path(), &nested, "markdown").success();
        assert!(nested.join("overall_report.md").exists());
    }
}

// ============================================================================
// Output Formats
// ============================================================================

mod formats {
    use super::*;

    #[test]
    fn test_json_report() {
        let data = setup_export();
        let out = tempdir().unwrap();

        run_with_format(data.path(), out.path(), "json")
            .success()
            .stdout(predicate::str::contains("stats.json"));

        let content = fs::read_to_string(out.path().join("stats.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["chat_name"], "Test Chat");
        assert_eq!(value["overall"]["total_messages"], 5);
        assert_eq!(value["by_year"]["2023"]["total_messages"], 2);
        assert!(value["overall"].get("word_frequency").is_none());
    }

    #[test]
    fn test_csv_report() {
        let data = setup_export();
        let out = tempdir().unwrap();

        run_with_format(data.path(), out.path(), "csv").success();

        let content = fs::read_to_string(out.path().join("user_activity.csv")).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("scope;user;messages;share"));
        assert!(content.contains("2022;Bob;2;66.7"));
        assert!(content.contains("overall;Bob;3;60.0"));
        assert!(content.contains("overall;Alice;2;40.0"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let data = setup_export();

        tgstats()
            .arg(data.path())
            .args(["-f", "xml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("xml"));
    }
}

// ============================================================================
// Flags
// ============================================================================

mod flags {
    use super::*;

    #[test]
    fn test_no_console_hides_summary() {
        let data = setup_export();
        let out = tempdir().unwrap();

        run_with_format(data.path(), out.path(), "markdown")
            .success()
            .stdout(predicate::str::contains("АНАЛИЗ ЧАТА").not());
    }

    #[test]
    fn test_top_limits_words() {
        let data = setup_export();
        let out = tempdir().unwrap();

        tgstats()
            .arg(data.path())
            .args(["-o", out.path().to_str().unwrap(), "-f", "json", "--top", "1"])
            .args(["--no-console"])
            .assert()
            .success();

        let content = fs::read_to_string(out.path().join("stats.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["overall"]["top_words"].as_array().unwrap().len(), 1);
        assert_eq!(value["overall"]["top_words"][0]["word"], "погода");
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        let data = setup_export();

        tgstats().arg(data.path()).args(["-q", "-v"]).assert().failure();
    }

    #[test]
    fn test_help() {
        tgstats()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("DATA_DIR"))
            .stdout(predicate::str::contains("--top"));
    }

    #[test]
    fn test_version() {
        tgstats()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("tgstats"));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_data_dir() {
        let out = tempdir().unwrap();

        tgstats()
            .arg(out.path().join("does-not-exist"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_no_export_files() {
        let data = tempdir().unwrap();
        fs::write(data.path().join("readme.txt"), "nothing here").unwrap();

        tgstats()
            .arg(data.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Error:"))
            .stderr(predicate::str::contains("messages*.html"));
    }

    #[test]
    fn test_malformed_export() {
        let data = tempdir().unwrap();
        fs::write(data.path().join("messages.html"), "<html><body>empty</body></html>").unwrap();

        tgstats()
            .arg(data.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Malformed export document"));
    }

    #[test]
    fn test_no_messages_is_not_an_error() {
        let data = tempdir().unwrap();
        let out = tempdir().unwrap();
        fs::write(data.path().join("messages.html"), export_page(&[])).unwrap();

        tgstats()
            .arg(data.path())
            .args(["-o", out.path().to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("No text messages found"));

        assert!(!out.path().join("overall_report.md").exists());
    }

    #[test]
    fn test_missing_argument() {
        tgstats().assert().failure();
    }
}
