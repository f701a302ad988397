use crate::domain::results::{SearchParams, SearchResults};
use crate::fetcher::{FetchError, FetchResult, ResultFetcher};

/// Stand-in fetcher: echoes the requested URL and returns no listings.
#[derive(Clone, Debug, Default)]
pub struct PlaceholderFetcher;

impl PlaceholderFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl ResultFetcher for PlaceholderFetcher {
    fn fetch_results(&self, params: &SearchParams) -> FetchResult<SearchResults> {
        let url = params
            .url
            .as_deref()
            .ok_or(FetchError::MissingParameter("url"))?;

        log::info!("Results requested for {url}");

        Ok(SearchResults {
            source_url: url.to_string(),
            listings: Vec::new(),
        })
    }
}
