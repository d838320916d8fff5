use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("Keyword pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl AnalyzerError {
    /// HTTP status associated with the failure, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AnalyzerError::Status { status, .. } => Some(*status),
            AnalyzerError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<calamine::Error> for AnalyzerError {
    fn from(e: calamine::Error) -> Self {
        AnalyzerError::Spreadsheet(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
