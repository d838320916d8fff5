use crate::error::{AnalyzerError, Result};
use crate::parsers::text;
use crate::results::Notice;
use calamine::{Data, Reader, open_workbook_auto};
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Header text that marks the URL column of a spreadsheet
pub const URL_COLUMN_HEADER: &str = "A";

/// Where URLs for a batch come from
#[derive(Debug, Clone, Default)]
pub struct UrlInputs {
    /// Free-text entries, one URL per line
    pub text: Vec<String>,

    /// File with one URL per line, `-` for stdin
    pub url_file: Option<PathBuf>,

    /// Spreadsheet whose column "A" (or first column) holds URLs
    pub spreadsheet: Option<PathBuf>,
}

/// Merged, deduplicated URLs and whatever went wrong gathering them
#[derive(Debug, Clone, Default)]
pub struct CollectedUrls {
    pub urls: Vec<String>,
    pub notices: Vec<Notice>,
}

/// Gathers URLs from every input.
///
/// Unreadable files become error notices; whatever was gathered from the
/// other inputs is still returned.
pub fn collect_urls(inputs: &UrlInputs) -> CollectedUrls {
    let mut notices = Vec::new();
    let mut urls: Vec<String> = inputs.text.iter().flat_map(|t| text::parse_lines(t)).collect();

    if let Some(path) = &inputs.url_file {
        match read_lines(path) {
            Ok(lines) => urls.extend(lines),
            Err(e) => {
                ::log::error!("Error reading URL file {}: {}", path.display(), e);
                notices.push(Notice::error(format!(
                    "Error reading URL file {}: {}",
                    path.display(),
                    e
                )));
            }
        }
    }

    if let Some(path) = &inputs.spreadsheet {
        match read_spreadsheet(path) {
            Ok(column) => {
                if column.used_first_column {
                    notices.push(Notice::warning(format!(
                        "No column '{}' found in {}. Using the first column instead.",
                        URL_COLUMN_HEADER,
                        path.display()
                    )));
                }
                urls.extend(column.urls);
            }
            Err(e) => {
                ::log::error!("Error reading spreadsheet {}: {}", path.display(), e);
                notices.push(Notice::error(format!(
                    "Error reading spreadsheet {}: {}",
                    path.display(),
                    e
                )));
            }
        }
    }

    let urls = dedupe(urls);
    ::log::debug!("Collected {} unique URLs", urls.len());

    CollectedUrls { urls, notices }
}

/// Drops repeated entries, keeping the first occurrence of each
pub fn dedupe<I: IntoIterator<Item = String>>(urls: I) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

/// Reads non-blank, trimmed lines from a file, or stdin for `-`
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let mut contents = String::new();
    if path == Path::new("-") {
        std::io::stdin().read_to_string(&mut contents)?;
    } else {
        contents = std::fs::read_to_string(path)?;
    }
    Ok(text::parse_lines(&contents))
}

/// URLs taken from one spreadsheet column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpreadsheetColumn {
    pub urls: Vec<String>,

    /// No header was labelled "A", so the first column was used
    pub used_first_column: bool,
}

/// Reads URLs from the first worksheet of an xlsx/xls/ods file
pub fn read_spreadsheet(path: &Path) -> Result<SpreadsheetColumn> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AnalyzerError::Spreadsheet("workbook has no worksheets".to_string()))??;

    let rows: Vec<Vec<Option<String>>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    column_from_rows(&rows)
}

/// Picks the URL column out of already-read rows; the first row is the header
pub fn column_from_rows(rows: &[Vec<Option<String>>]) -> Result<SpreadsheetColumn> {
    let (header, data) = rows
        .split_first()
        .ok_or_else(|| AnalyzerError::Spreadsheet("worksheet is empty".to_string()))?;

    let labelled = header
        .iter()
        .position(|cell| cell.as_deref() == Some(URL_COLUMN_HEADER));
    let index = labelled.unwrap_or(0);

    let urls = data
        .iter()
        .filter_map(|row| row.get(index).cloned().flatten())
        .collect();

    Ok(SpreadsheetColumn {
        urls,
        used_first_column: labelled.is_none(),
    })
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        other => {
            let text = other.to_string().trim().to_string();
            (!text.is_empty()).then_some(text)
        }
    }
}
