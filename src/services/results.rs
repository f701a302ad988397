use crate::domain::results::SearchParams;
use crate::dto::search::SearchPageData;
use crate::fetcher::ResultFetcher;
use crate::services::{ServiceError, ServiceResult};

/// Loads the results page, or `NotFound` when the request carries no `url`.
///
/// The fetcher is called once per request; failures are not retried. Links
/// in the fetched results that are not `http`/`https` come back blank.
pub fn load_search_page<F>(params: SearchParams, fetcher: &F) -> ServiceResult<SearchPageData>
where
    F: ResultFetcher + ?Sized,
{
    if params.url.is_none() {
        return Err(ServiceError::NotFound);
    }

    let params = params.backfilled_from_url();

    let results = fetcher.fetch_results(&params).map_err(|err| {
        log::error!("Failed to fetch results: {err}");
        err
    })?;

    Ok(SearchPageData {
        params,
        results: results.with_web_links_only(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::results::SearchResults;
    use crate::fetcher::FetchError;
    use crate::fetcher::mock::MockFetcher;

    const OUTBOUND: &str = "https://www.booking.com/searchresults.html?ss=Rome&group_adults=2&group_children=1&checkin=2024-3-5&checkout=2024-3-9&no_room=1";

    #[test]
    fn missing_url_is_not_found_and_skips_fetch() {
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch_results().times(0);

        let params = SearchParams {
            group_adults: Some("2".to_string()),
            ..SearchParams::default()
        };
        let result = load_search_page(params, &fetcher);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn present_url_fetches_once_with_full_parameter_set() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch_results()
            .withf(|params| {
                params.url.as_deref() == Some(OUTBOUND)
                    && params.group_adults.as_deref() == Some("2")
                    && params.group_children.as_deref() == Some("1")
                    && params.checkin.as_deref() == Some("2024-3-5")
                    && params.checkout.as_deref() == Some("2024-3-9")
                    && params.no_room.as_deref() == Some("1")
            })
            .times(1)
            .returning(|params| {
                Ok(SearchResults {
                    source_url: params.url.clone().unwrap_or_default(),
                    listings: Vec::new(),
                })
            });

        let params = SearchParams {
            url: Some(OUTBOUND.to_string()),
            ..SearchParams::default()
        };
        let data = load_search_page(params, &fetcher).expect("should load results");

        assert_eq!(data.results.source_url, OUTBOUND);
        assert_eq!(data.params.no_room.as_deref(), Some("1"));
    }

    #[test]
    fn fetch_failure_is_propagated() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch_results()
            .times(1)
            .returning(|_| Err(FetchError::Upstream("timeout".to_string())));

        let params = SearchParams {
            url: Some(OUTBOUND.to_string()),
            ..SearchParams::default()
        };
        let result = load_search_page(params, &fetcher);

        assert!(matches!(
            result,
            Err(ServiceError::Fetch(FetchError::Upstream(_)))
        ));
    }
}
