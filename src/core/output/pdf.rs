//! PDF report writer.
//!
//! Produces the same per-year and overall report set as the Markdown writer,
//! laid out as A4 documents in a `pdf-report` subdirectory. The built-in PDF
//! fonts have no Cyrillic glyphs, so a TrueType font has to be supplied or
//! found in one of the usual system locations.
//!
//! Reports are first described as a list of [`Block`]s and only then
//! rendered, which keeps the content testable without a font.

use std::fs;
use std::path::{Path, PathBuf};

use genpdf::Element as _;
use genpdf::elements::{Break, FrameCellDecorator, Paragraph, StyledElement, TableLayout};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::Style;
use tracing::debug;

use crate::core::stats::{MonthStat, Stats, YearStats};
use crate::error::{Result, TgStatsError};

use super::month_name;

/// Subdirectory of the output directory that receives the PDF reports.
pub const PDF_DIR: &str = "pdf-report";

/// File name of the whole-chat PDF report.
pub const OVERALL_PDF: &str = "overall_report.pdf";

/// TrueType fonts with Cyrillic coverage, probed in order.
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:/Windows/Fonts/arial.ttf",
    "C:/Windows/Fonts/arialuni.ttf",
];

const TITLE_SIZE: u8 = 18;
const HEADER_SIZE: u8 = 14;
const SUBHEADER_SIZE: u8 = 12;
const NORMAL_SIZE: u8 = 10;
const MAX_NAME_CHARS: usize = 30;

/// One layout element of a PDF report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Header(String),
    SubHeader(String),
    Line(String),
    /// Column weights, header row, body rows
    Table {
        weights: Vec<usize>,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Space,
}

/// Returns the first existing path among `candidates`.
pub fn find_font_in<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|p| p.as_ref())
        .find(|p| p.is_file())
        .map(Path::to_path_buf)
}

/// Returns the first installed font from [`FONT_CANDIDATES`].
pub fn find_font() -> Option<PathBuf> {
    find_font_in(FONT_CANDIDATES)
}

fn load_font(path: &Path) -> Result<FontFamily<FontData>> {
    let data = fs::read(path).map_err(|e| TgStatsError::file_open(path, e))?;
    let font = FontData::new(data, None)?;
    Ok(FontFamily {
        regular: font.clone(),
        bold: font.clone(),
        italic: font.clone(),
        bold_italic: font,
    })
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() > MAX_NAME_CHARS {
        let head: String = name.chars().take(MAX_NAME_CHARS - 3).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

fn format_period(stats: &YearStats) -> String {
    let fmt = |ts: Option<chrono::NaiveDateTime>| {
        ts.map(|t| t.format("%d.%m.%Y").to_string())
            .unwrap_or_else(|| "—".to_string())
    };
    format!("{} — {}", fmt(stats.first_message), fmt(stats.last_message))
}

fn metadata_blocks(
    stats: &Stats,
    ys: &YearStats,
    replies_label: &str,
    forwarded_label: &str,
) -> Vec<Block> {
    vec![
        Block::Header("Метаданные чата".into()),
        Block::Line(format!("Название чата: {}", stats.chat_name)),
        Block::Line(format!("Тип: {}", stats.chat_kind)),
        Block::Line(format!("Период: {}", format_period(ys))),
        Block::Line(format!("Всего сообщений: {}", ys.total_messages)),
        Block::Line(format!("{replies_label}: {}", ys.replies_count)),
        Block::Line(format!("{forwarded_label}: {}", ys.forwarded_count)),
        Block::Line(format!(
            "Средняя длина сообщения: {:.1} символов",
            ys.avg_message_length
        )),
        Block::Space,
    ]
}

/// Users with their share; rows below `min_share` percent are left out.
fn user_table(ys: &YearStats, min_share: f64) -> Block {
    let rows = ys
        .sorted_users()
        .into_iter()
        .filter(|u| u.count > 0)
        .filter(|u| ys.user_share(&u.name) >= min_share)
        .map(|u| {
            vec![
                truncate_name(&u.name),
                u.count.to_string(),
                format!("{:.1}%", ys.user_share(&u.name)),
            ]
        })
        .collect();
    Block::Table {
        weights: vec![5, 2, 2],
        header: vec!["Участник".into(), "Сообщений".into(), "Доля".into()],
        rows,
    }
}

fn main_user_word_blocks(ys: &YearStats) -> Vec<Block> {
    let mut blocks = Vec::new();
    for user in ys.main_users() {
        let Some(words) = ys.top_words_by_user.get(&user.name) else {
            continue;
        };
        if words.is_empty() {
            continue;
        }
        blocks.push(Block::SubHeader(user.name.clone()));
        blocks.push(Block::Table {
            weights: vec![1, 5, 3],
            header: vec!["#".into(), "Слово".into(), "Количество".into()],
            rows: words
                .iter()
                .enumerate()
                .map(|(i, wc)| vec![format!("{}.", i + 1), wc.word.clone(), wc.count.to_string()])
                .collect(),
        });
    }
    blocks
}

fn month_line(month: &MonthStat) -> String {
    format!(
        "Самый активный месяц: {} {} ({} сообщений)",
        month_name(month.month),
        month.year,
        month.count
    )
}

fn activity_blocks(ys: &YearStats) -> Vec<Block> {
    let window = ys.most_active_window;
    let mut blocks = vec![
        Block::Header("Активность по времени".into()),
        Block::Line(format!(
            "Самый активный период: {} ({} сообщений)",
            window.label(),
            window.count
        )),
    ];
    if let Some(month) = ys.most_active_month.filter(|m| !m.is_empty()) {
        blocks.push(Block::Line(month_line(&month)));
    }
    blocks
}

/// Lays out the report for a single year.
pub fn year_blocks(stats: &Stats, ys: &YearStats) -> Vec<Block> {
    let title = match ys.year {
        Some(y) => format!("Отчет по чату за {y} год"),
        None => "Отчет по чату".to_string(),
    };
    let mut blocks = vec![Block::Title(title), Block::Space];
    blocks.extend(metadata_blocks(stats, ys, "Ответов", "Пересланных"));

    blocks.push(Block::Header("Сообщения по участникам".into()));
    blocks.push(user_table(ys, 0.0));
    blocks.push(Block::Space);

    blocks.push(Block::Header("Топ слов по участникам".into()));
    blocks.extend(main_user_word_blocks(ys));

    blocks.extend(activity_blocks(ys));
    blocks
}

/// Lays out the whole-chat report.
pub fn overall_blocks(stats: &Stats) -> Vec<Block> {
    let overall = &stats.overall;
    let mut blocks = vec![Block::Title("Общий отчет по чату".into()), Block::Space];
    blocks.extend(metadata_blocks(
        stats,
        overall,
        "Всего ответов",
        "Всего пересланных",
    ));

    blocks.push(Block::Header("Статистика по годам".into()));
    blocks.push(Block::Table {
        weights: vec![2, 3, 3, 3],
        header: vec![
            "Год".into(),
            "Сообщений".into(),
            "Ответов".into(),
            "Пересланных".into(),
        ],
        rows: stats
            .by_year
            .iter()
            .map(|(year, ys)| {
                vec![
                    year.to_string(),
                    ys.total_messages.to_string(),
                    ys.replies_count.to_string(),
                    ys.forwarded_count.to_string(),
                ]
            })
            .collect(),
    });
    blocks.push(Block::Space);

    blocks.push(Block::Header("Сообщения по участникам (всего)".into()));
    blocks.push(user_table(overall, 0.1));
    blocks.push(Block::Space);

    blocks.push(Block::Header("Топ слов по участникам (всего)".into()));
    blocks.extend(main_user_word_blocks(overall));

    blocks.extend(activity_blocks(overall));
    blocks.push(Block::Space);

    blocks.push(Block::Header("Самый активный период по годам".into()));
    for (year, ys) in &stats.by_year {
        let w = ys.most_active_window;
        blocks.push(Block::Line(format!(
            "{year}: {} ({} сообщений)",
            w.label(),
            w.count
        )));
    }
    blocks.push(Block::Space);

    blocks.push(Block::Header("Самый активный месяц по годам".into()));
    for (year, ys) in &stats.by_year {
        if let Some(month) = ys.most_active_month.filter(|m| !m.is_empty()) {
            blocks.push(Block::Line(format!(
                "{year}: {} ({} сообщений)",
                month_name(month.month),
                month.count
            )));
        }
    }
    blocks
}

fn styled(text: &str, size: u8) -> StyledElement<Paragraph> {
    Paragraph::new(text).styled(Style::new().bold().with_font_size(size))
}

fn render(blocks: &[Block], title: &str, font: FontFamily<FontData>, path: &Path) -> Result<()> {
    let mut doc = genpdf::Document::new(font);
    doc.set_title(title);
    doc.set_font_size(NORMAL_SIZE);
    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(14);
    doc.set_page_decorator(decorator);

    for block in blocks {
        match block {
            Block::Title(text) => doc.push(styled(text, TITLE_SIZE)),
            Block::Header(text) => {
                doc.push(Break::new(0.5));
                doc.push(styled(text, HEADER_SIZE));
            }
            Block::SubHeader(text) => doc.push(styled(text, SUBHEADER_SIZE)),
            Block::Line(text) => doc.push(Paragraph::new(text.as_str())),
            Block::Table {
                weights,
                header,
                rows,
            } => {
                let mut table = TableLayout::new(weights.clone());
                table.set_cell_decorator(FrameCellDecorator::new(false, false, false));
                let mut row = table.row();
                for cell in header {
                    row = row.element(Paragraph::new(cell.as_str()).styled(Style::new().bold()));
                }
                row.push()?;
                for cells in rows {
                    let mut row = table.row();
                    for cell in cells {
                        row = row.element(Paragraph::new(cell.as_str()));
                    }
                    row.push()?;
                }
                doc.push(table);
            }
            Block::Space => doc.push(Break::new(1)),
        }
    }

    doc.render_to_file(path)?;
    Ok(())
}

/// Writes all PDF reports into `dir`, using the TrueType font at `font_path`.
///
/// Returns the written paths: yearly reports in ascending year order, then
/// the overall report.
pub fn write_pdf_with_font(stats: &Stats, dir: &Path, font_path: &Path) -> Result<Vec<PathBuf>> {
    let font = load_font(font_path)?;
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(stats.by_year.len() + 1);

    for (year, ys) in &stats.by_year {
        let path = dir.join(format!("{year}_report.pdf"));
        let title = format!("{} {year}", stats.chat_name);
        render(&year_blocks(stats, ys), &title, font.clone(), &path)?;
        debug!(path = %path.display(), "wrote year PDF");
        written.push(path);
    }

    let path = dir.join(OVERALL_PDF);
    render(&overall_blocks(stats), &stats.chat_name, font, &path)?;
    debug!(path = %path.display(), "wrote overall PDF");
    written.push(path);

    Ok(written)
}

/// Writes all PDF reports into `dir` with the first font from [`FONT_CANDIDATES`].
///
/// # Errors
///
/// [`TgStatsError::NoPdfFont`] if none of the candidate fonts is installed.
pub fn write_pdf(stats: &Stats, dir: &Path) -> Result<Vec<PathBuf>> {
    let font = find_font().ok_or(TgStatsError::NoPdfFont)?;
    write_pdf_with_font(stats, dir, &font)
}
