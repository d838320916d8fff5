use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Title used when a page has no `<title>` element
pub const NO_TITLE: &str = "No Title";

/// Meta description used when a page has no usable description tag
pub const NO_META_DESCRIPTION: &str = "No Meta Description";

/// Sentinel used for title and description of a degraded report
pub const ERROR_SENTINEL: &str = "Error";

/// Heading depth, H1 through H6
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Numeric depth, 1 for H1 up to 6 for H6
    pub fn number(self) -> usize {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    /// Upper-case tag text ("H1".."H6")
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
            HeadingLevel::H4 => "H4",
            HeadingLevel::H5 => "H5",
            HeadingLevel::H6 => "H6",
        }
    }

    /// Maps an element name such as `h2` or `H2` to its level
    pub fn from_tag_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "h1" => Some(HeadingLevel::H1),
            "h2" => Some(HeadingLevel::H2),
            "h3" => Some(HeadingLevel::H3),
            "h4" => Some(HeadingLevel::H4),
            "h5" => Some(HeadingLevel::H5),
            "h6" => Some(HeadingLevel::H6),
            _ => None,
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for HeadingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeadingLevel::from_tag_name(s).ok_or_else(|| format!("not a heading level: {}", s))
    }
}

/// One heading in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingNode {
    pub level: HeadingLevel,
    pub text: String,
}

impl HeadingNode {
    pub fn new(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Occurrence count of one keyword on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    /// Keyword exactly as the user supplied it
    pub keyword: String,
    pub count: usize,
}

/// Summary row for one fetched URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReport {
    pub url: String,
    pub title: String,
    pub http_status: u16,
    pub meta_description: String,
    pub total_headings: usize,

    /// Always holds all six levels, zero when absent
    pub counts_by_level: BTreeMap<HeadingLevel, usize>,

    /// Empty unless keyword search was enabled and the fetch succeeded
    pub keyword_counts: Vec<KeywordCount>,
}

impl PageReport {
    /// Builds a report whose heading counts are derived from `headings`
    pub fn new(
        url: String,
        title: String,
        http_status: u16,
        meta_description: String,
        headings: &[HeadingNode],
        keyword_counts: Vec<KeywordCount>,
    ) -> Self {
        let mut counts_by_level = zero_counts();
        for node in headings {
            *counts_by_level.entry(node.level).or_insert(0) += 1;
        }

        Self {
            url,
            title,
            http_status,
            meta_description,
            total_headings: headings.len(),
            counts_by_level,
            keyword_counts,
        }
    }

    /// Report for a page that could not be fetched
    pub fn degraded(url: String, http_status: u16) -> Self {
        Self {
            url,
            title: ERROR_SENTINEL.to_string(),
            http_status,
            meta_description: ERROR_SENTINEL.to_string(),
            total_headings: 0,
            counts_by_level: zero_counts(),
            keyword_counts: Vec::new(),
        }
    }

    pub fn count(&self, level: HeadingLevel) -> usize {
        self.counts_by_level.get(&level).copied().unwrap_or(0)
    }

    pub fn keyword_count(&self, keyword: &str) -> Option<usize> {
        self.keyword_counts
            .iter()
            .find(|k| k.keyword == keyword)
            .map(|k| k.count)
    }
}

fn zero_counts() -> BTreeMap<HeadingLevel, usize> {
    HeadingLevel::ALL.iter().map(|level| (*level, 0)).collect()
}

/// Everything extracted from one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageAnalysis {
    pub report: PageReport,
    pub headings: Vec<HeadingNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Message meant for the person running the batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Warning => write!(f, "warning: {}", self.message),
            Severity::Error => write!(f, "error: {}", self.message),
        }
    }
}

/// Outcome of one batch submission; replaced wholesale by the next one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Active keyword columns, in the order the user gave them
    pub keyword_columns: Vec<String>,

    /// One entry per unique URL, in fetch order
    pub pages: Vec<PageAnalysis>,

    pub notices: Vec<Notice>,
}

impl BatchResult {
    pub fn reports(&self) -> impl Iterator<Item = &PageReport> {
        self.pages.iter().map(|p| &p.report)
    }

    pub fn headings_for(&self, url: &str) -> Option<&[HeadingNode]> {
        self.pages
            .iter()
            .find(|p| p.report.url == url)
            .map(|p| p.headings.as_slice())
    }

    /// Renders the heading tree of `url` on demand
    pub fn tree_for(&self, url: &str) -> Option<String> {
        self.headings_for(url).map(crate::tree::render_tree)
    }
}
