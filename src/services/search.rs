use serde::Serialize;

use crate::domain::navigation::Navigation;
use crate::domain::search::{DateStyle, SearchQuery, format_check_date};
use crate::forms::search::SearchForm;
use crate::services::{ServiceError, ServiceResult};

/// Path of the results page.
pub const RESULTS_PATH: &str = "/search";

/// Query parameters understood by the outbound search endpoint, in order.
#[derive(Serialize)]
struct OutboundQuery<'a> {
    ss: &'a str,
    group_adults: &'a str,
    group_children: &'a str,
    checkin: String,
    checkout: String,
    no_room: &'a str,
}

#[derive(Serialize)]
struct ResultsQuery<'a> {
    url: &'a str,
}

fn encode<T: Serialize>(value: T) -> ServiceResult<String> {
    serde_html_form::to_string(value).map_err(|err| ServiceError::Internal(err.to_string()))
}

/// Builds the outbound search URL for a validated query. Pure.
pub fn build_search_url(
    query: &SearchQuery,
    endpoint: &str,
    date_style: DateStyle,
) -> ServiceResult<String> {
    let params = encode(OutboundQuery {
        ss: query.location.as_str(),
        group_adults: query.adults.as_str(),
        group_children: query.children.as_str(),
        checkin: format_check_date(query.dates.from, date_style),
        checkout: format_check_date(query.dates.to, date_style),
        no_room: query.rooms.as_str(),
    })?;

    let separator = match endpoint.find('?') {
        None => "?",
        Some(idx) if idx + 1 == endpoint.len() || endpoint.ends_with('&') => "",
        Some(_) => "&",
    };

    Ok(format!("{endpoint}{separator}{params}"))
}

/// Results page location carrying the percent-encoded outbound URL.
pub fn results_location(outbound_url: &str) -> ServiceResult<String> {
    let query = encode(ResultsQuery { url: outbound_url })?;
    Ok(format!("{RESULTS_PATH}?{query}"))
}

/// Validates the submitted form and returns where the browser should go next.
pub fn submit_search(
    form: &SearchForm,
    endpoint: &str,
    date_style: DateStyle,
) -> ServiceResult<Navigation> {
    let query = SearchQuery::try_from(form).map_err(|err| {
        log::info!("Rejected search form: {err}");
        ServiceError::from(err)
    })?;

    let outbound = build_search_url(&query, endpoint, date_style)?;
    log::info!("Search for {} -> {outbound}", query.location);

    Ok(Navigation::push(results_location(&outbound)?))
}
