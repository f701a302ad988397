//! Mock fetcher for isolating services in tests.

use mockall::mock;

use crate::domain::results::{SearchParams, SearchResults};
use crate::fetcher::{FetchResult, ResultFetcher};

mock! {
    pub Fetcher {}

    impl ResultFetcher for Fetcher {
        fn fetch_results(&self, params: &SearchParams) -> FetchResult<SearchResults>;
    }
}
