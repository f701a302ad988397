//! Result fetch collaborator used by the results page.

use crate::domain::results::{SearchParams, SearchResults};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod placeholder;

pub use errors::{FetchError, FetchResult};
pub use placeholder::PlaceholderFetcher;

/// Retrieves results for the parameters of a results page request.
pub trait ResultFetcher {
    fn fetch_results(&self, params: &SearchParams) -> FetchResult<SearchResults>;
}
