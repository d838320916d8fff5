use crate::error::Result;
use crate::results::{BatchResult, HeadingLevel, HeadingNode, Notice, PageReport};
use crate::tree::render_tree;
use crate::utils::{display_width, pad_left, pad_right, single_line, truncate_to_width};
use serde::Serialize;

/// Fixed columns that precede the per-keyword ones
const FIXED_HEADERS: [&str; 5] = [
    "URL",
    "Title",
    "HTTP Status",
    "Meta Description",
    "Total Headings",
];

const SEPARATOR: &str = " | ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Renders the summary table: one row per page, one column per active keyword.
///
/// Text cells are flattened to one line and cut to `max_cell_width` columns.
pub fn render_table(batch: &BatchResult, max_cell_width: usize) -> String {
    let mut headers: Vec<String> = FIXED_HEADERS.iter().map(|h| h.to_string()).collect();
    headers.extend(HeadingLevel::ALL.iter().map(|l| l.tag().to_string()));
    headers.extend(batch.keyword_columns.iter().map(|k| single_line(k)));

    let mut aligns = vec![Align::Left, Align::Left, Align::Right, Align::Left];
    aligns.resize(headers.len(), Align::Right);

    let rows: Vec<Vec<String>> = batch
        .reports()
        .map(|report| table_row(report, &batch.keyword_columns, max_cell_width))
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad_right(h, *w))
        .collect();
    push_line(&mut out, &header_cells);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .zip(&aligns)
            .map(|((cell, w), align)| match align {
                Align::Left => pad_right(cell, *w),
                Align::Right => pad_left(cell, *w),
            })
            .collect();
        push_line(&mut out, &cells);
    }

    out
}

fn table_row(
    report: &PageReport,
    keyword_columns: &[String],
    max_cell_width: usize,
) -> Vec<String> {
    let text = |s: &str| truncate_to_width(&single_line(s), max_cell_width);

    let mut row = vec![
        text(&report.url),
        text(&report.title),
        report.http_status.to_string(),
        text(&report.meta_description),
        report.total_headings.to_string(),
    ];
    row.extend(HeadingLevel::ALL.iter().map(|l| report.count(*l).to_string()));
    row.extend(
        keyword_columns
            .iter()
            .map(|k| report.keyword_count(k).unwrap_or(0).to_string()),
    );
    row
}

fn push_line(out: &mut String, cells: &[String]) {
    out.push_str(cells.join(SEPARATOR).trim_end());
    out.push('\n');
}

/// Renders every page's heading tree under a header naming its URL
pub fn render_trees(batch: &BatchResult) -> String {
    let mut out = String::new();
    for page in &batch.pages {
        out.push_str(&format!("== Tree for {} ==\n", page.report.url));
        out.push_str(&render_tree(&page.headings));
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct BatchView<'a> {
    keyword_columns: &'a [String],
    pages: Vec<PageView<'a>>,
    notices: &'a [Notice],
}

#[derive(Serialize)]
struct PageView<'a> {
    #[serde(flatten)]
    report: &'a PageReport,
    headings: &'a [HeadingNode],
    tree: String,
}

/// Serializes the whole batch, rendered trees included, as pretty JSON
pub fn render_json(batch: &BatchResult) -> Result<String> {
    let view = BatchView {
        keyword_columns: &batch.keyword_columns,
        pages: batch
            .pages
            .iter()
            .map(|page| PageView {
                report: &page.report,
                headings: &page.headings,
                tree: render_tree(&page.headings),
            })
            .collect(),
        notices: &batch.notices,
    };
    Ok(serde_json::to_string_pretty(&view)?)
}
