use crate::fetchers::Fetcher;
use crate::parsers::html;
use crate::parsers::keywords::KeywordMatcher;
use crate::results::{NO_META_DESCRIPTION, NO_TITLE, Notice, PageAnalysis, PageReport};

/// Fetches `url` once and extracts its heading report.
///
/// A failed fetch is never propagated: it is logged, turned into an error
/// [`Notice`], and the page gets a degraded report carrying the response
/// status when one is known (0 otherwise).
pub async fn extract<F: Fetcher>(
    fetcher: &F,
    url: &str,
    keywords: &KeywordMatcher,
) -> (PageAnalysis, Option<Notice>) {
    match fetcher.fetch(url).await {
        Ok(page) => (analyze_html(url, page.status, &page.body, keywords), None),
        Err(e) => {
            ::log::error!("Error fetching {}: {}", url, e);
            let status = e.status_code().unwrap_or(0);
            let analysis = PageAnalysis {
                report: PageReport::degraded(url.to_string(), status),
                headings: Vec::new(),
            };
            (analysis, Some(Notice::error(format!("Error fetching {}: {}", url, e))))
        }
    }
}

/// Builds the report for an already fetched document
pub fn analyze_html(
    url: &str,
    status: u16,
    body: &str,
    keywords: &KeywordMatcher,
) -> PageAnalysis {
    let parsed = html::parse(body);

    let keyword_counts = keywords.count(&parsed.visible_text);

    let report = PageReport::new(
        url.to_string(),
        parsed.title.unwrap_or_else(|| NO_TITLE.to_string()),
        status,
        parsed
            .meta_description
            .unwrap_or_else(|| NO_META_DESCRIPTION.to_string()),
        &parsed.headings,
        keyword_counts,
    );

    ::log::info!(
        "{} -> {} headings, status {}",
        url,
        report.total_headings,
        status
    );

    PageAnalysis {
        report,
        headings: parsed.headings,
    }
}
