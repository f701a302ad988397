use crate::domain::results::{SearchParams, SearchResults};

/// Data required to render the results page.
#[derive(Debug)]
pub struct SearchPageData {
    pub params: SearchParams,
    pub results: SearchResults,
}
