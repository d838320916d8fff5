use crate::error::Result;
use std::future::Future;

/// Body of a successful (2xx) response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }
}

// Base trait for anything that can retrieve a page by URL
pub trait Fetcher {
    /// Performs exactly one request for `url`.
    ///
    /// Transport failures and non-2xx responses are both errors; the latter
    /// carry the status through [`crate::AnalyzerError::status_code`].
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage>> + Send;
}
