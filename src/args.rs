use clap::{Parser, ValueEnum};
use heading_analyzer::sources::UrlInputs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "heading-analyzer")]
#[command(about = "Audits headings, title, status and meta description across a batch of pages")]
#[command(version)]
pub struct Args {
    /// URLs to analyze
    pub urls: Vec<String>,

    /// File with one URL per line ("-" reads stdin)
    #[arg(short = 'f', long)]
    pub url_file: Option<PathBuf>,

    /// Spreadsheet (.xlsx, .xls, .ods) with URLs in column "A" or the first column
    #[arg(short, long)]
    pub spreadsheet: Option<PathBuf>,

    /// Keyword to count on every page (repeatable, at most 5)
    #[arg(short = 'k', long = "keyword")]
    pub keywords: Vec<String>,

    /// File with one keyword per line
    #[arg(long)]
    pub keyword_file: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Do not print heading trees after the table
    #[arg(long)]
    pub no_trees: bool,

    /// Copy the heading tree of this URL to the clipboard
    #[arg(long, value_name = "URL")]
    pub copy: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Args {
    /// Where this run takes its URLs from
    pub fn url_inputs(&self) -> UrlInputs {
        UrlInputs {
            text: self.urls.clone(),
            url_file: self.url_file.clone(),
            spreadsheet: self.spreadsheet.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["heading-analyzer", "https://a.example"]).unwrap();
        assert_eq!(args.urls, vec!["https://a.example"]);
        assert_eq!(args.format, OutputFormat::Table);
        assert!(args.keywords.is_empty());
        assert!(args.timeout.is_none());
        assert!(!args.no_trees);
    }

    #[test]
    fn test_all_inputs() {
        let args = Args::try_parse_from([
            "heading-analyzer",
            "-f",
            "urls.txt",
            "--spreadsheet",
            "urls.xlsx",
            "-k",
            "seo",
            "--keyword",
            "web analytics",
            "--timeout",
            "5",
            "--format",
            "json",
            "--copy",
            "https://a.example",
        ])
        .unwrap();

        assert_eq!(args.keywords, vec!["seo", "web analytics"]);
        assert_eq!(args.timeout, Some(5));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.copy.as_deref(), Some("https://a.example"));

        let inputs = args.url_inputs();
        assert!(inputs.text.is_empty());
        assert_eq!(inputs.url_file, Some(PathBuf::from("urls.txt")));
        assert_eq!(inputs.spreadsheet, Some(PathBuf::from("urls.xlsx")));
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Args::try_parse_from(["heading-analyzer", "--format", "xml"]).is_err());
    }
}
