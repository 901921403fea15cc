//! # tgstats CLI
//!
//! Command-line interface for the tgstats library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use tgstats::TgStatsError;
use tgstats::cli::Args;
use tgstats::core::Analyzer;
use tgstats::core::output::print_summary;
use tgstats::format::write_report;
use tgstats::logging::init_logging;
use tgstats::parser::parse_directory_with_progress;
use tgstats::parsers::TelegramHtmlParser;
use tgstats::progress::stderr_progress;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Writes the PDF report set; failures are reported but never fatal.
#[cfg(feature = "pdf-output")]
fn write_pdf_reports(stats: &tgstats::core::Stats, args: &Args) {
    use tgstats::core::output::{PDF_DIR, write_pdf, write_pdf_with_font};

    println!("📄 Writing PDF reports...");
    let dir = args.output.join(PDF_DIR);
    let result = match &args.pdf_font {
        Some(font) => write_pdf_with_font(stats, &dir, font),
        None => write_pdf(stats, &dir),
    };
    match result {
        Ok(written) => {
            for path in &written {
                println!("   {}", path.display());
            }
        }
        Err(e) => eprintln!("Warning: PDF reports skipped: {}", e),
    }
}

fn run() -> Result<(), TgStatsError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    init_logging(args.log_level());

    println!("📊 tgstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.data_dir.display());
    println!("💾 Output:  {}", args.output.display());
    println!("📄 Format:  {}", args.format);
    println!();

    if !args.data_dir.is_dir() {
        return Err(TgStatsError::file_open(
            &args.data_dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "data directory not found"),
        ));
    }

    // Step 1: Extract
    println!("📖 Parsing export files...");
    let extractor = args.extractor_config();
    let parse_start = Instant::now();
    let result = parse_directory_with_progress(
        &TelegramHtmlParser::new(),
        &args.data_dir,
        &extractor,
        &stderr_progress(extractor.progress_every),
    )?;
    println!(
        "   Found {} messages in {} files ({:.2}s)",
        result.messages.len(),
        result.files,
        parse_start.elapsed().as_secs_f64()
    );

    if result.messages.is_empty() {
        println!("⚠️  No text messages found, nothing to report");
        return Ok(());
    }

    // Step 2: Analyze
    println!("🔍 Analyzing...");
    let analyze_start = Instant::now();
    let stats = Analyzer::with_config(args.analyzer_config()).analyze(&result);
    println!(
        "   {} years, {} participants ({:.2}s)",
        stats.by_year.len(),
        stats.overall.messages_by_user.len(),
        analyze_start.elapsed().as_secs_f64()
    );

    // Step 3: Console summary
    if !args.no_console {
        print_summary(&stats)?;
    }

    // Step 4: Reports
    println!("📝 Writing {} report...", args.format);
    let written = write_report(&stats, &args.output, args.format)?;
    for path in &written {
        println!("   {}", path.display());
    }

    #[cfg(feature = "pdf-output")]
    if args.wants_pdf() {
        write_pdf_reports(&stats, &args);
    }

    println!();
    println!(
        "✅ Done in {:.2}s, reports in {}",
        total_start.elapsed().as_secs_f64(),
        args.output.display()
    );

    Ok(())
}
