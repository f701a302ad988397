use serde::{Deserialize, Serialize};
use validator::ValidateUrl;

/// Parameters read from the results page query string.
///
/// Only `url` is required; the rest are passed through unvalidated.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchParams {
    pub url: Option<String>,
    pub group_adults: Option<String>,
    pub group_children: Option<String>,
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    pub no_room: Option<String>,
}

/// Query keys as they arrive, repeated keys included.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawParams {
    url: Vec<String>,
    group_adults: Vec<String>,
    group_children: Vec<String>,
    checkin: Vec<String>,
    checkout: Vec<String>,
    no_room: Vec<String>,
}

/// The last non-empty value of a key.
fn last_non_empty(values: Vec<String>) -> Option<String> {
    values.into_iter().rev().find(|v| !v.is_empty())
}

impl From<RawParams> for SearchParams {
    fn from(raw: RawParams) -> Self {
        Self {
            url: last_non_empty(raw.url),
            group_adults: last_non_empty(raw.group_adults),
            group_children: last_non_empty(raw.group_children),
            checkin: last_non_empty(raw.checkin),
            checkout: last_non_empty(raw.checkout),
            no_room: last_non_empty(raw.no_room),
        }
    }
}

fn parse_raw(query: &str) -> Option<RawParams> {
    match serde_html_form::from_str(query) {
        Ok(raw) => Some(raw),
        Err(err) => {
            log::warn!("Ignoring undecodable search query: {err}");
            None
        }
    }
}

impl SearchParams {
    /// Parses a raw query string.
    ///
    /// Empty values count as absent and a repeated key keeps its last
    /// non-empty value. An undecodable query yields no parameters at all.
    pub fn from_query(query: &str) -> Self {
        parse_raw(query).map(Self::from).unwrap_or_default()
    }

    /// Fills keys missing from the request with the ones embedded in `url`.
    ///
    /// Keys present on the request win. An unparsable embedded query leaves
    /// the params untouched.
    #[must_use]
    pub fn backfilled_from_url(self) -> Self {
        let Some(embedded) = self
            .url
            .as_deref()
            .and_then(|url| url.split_once('?'))
            .map(|(_, query)| query.split('#').next().unwrap_or_default())
        else {
            return self;
        };
        let Some(keys) = parse_raw(embedded).map(Self::from) else {
            return self;
        };

        Self {
            group_adults: self.group_adults.or(keys.group_adults),
            group_children: self.group_children.or(keys.group_children),
            checkin: self.checkin.or(keys.checkin),
            checkout: self.checkout.or(keys.checkout),
            no_room: self.no_room.or(keys.no_room),
            url: self.url,
        }
    }
}

/// Whether `link` is an absolute `http` or `https` URL safe to put in `href`.
pub fn is_web_link(link: &str) -> bool {
    let scheme = link
        .split_once(':')
        .map(|(scheme, _)| scheme.to_ascii_lowercase());
    matches!(scheme.as_deref(), Some("http" | "https")) && link.validate_url()
}

/// A single listing returned by the result fetcher.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub price: Option<String>,
    pub rating: Option<String>,
}

/// Outcome of a results fetch.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResults {
    /// The outbound URL the results were requested for.
    pub source_url: String,
    pub listings: Vec<Listing>,
}

impl SearchResults {
    /// Blanks every link that is not a web link, so only `http`/`https`
    /// targets are ever rendered as anchors.
    #[must_use]
    pub fn with_web_links_only(self) -> Self {
        let keep = |link: String| if is_web_link(&link) { link } else { String::new() };
        Self {
            source_url: keep(self.source_url),
            listings: self
                .listings
                .into_iter()
                .map(|listing| Listing {
                    link: keep(listing.link),
                    ..listing
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTBOUND: &str = "https://www.booking.com/searchresults.html?ss=Rome&group_adults=2&group_children=0&checkin=2024-3-5&checkout=2024-3-9&no_room=1";

    #[test]
    fn from_query_decodes_url_and_drops_empty_values() {
        let params = SearchParams::from_query(
            "url=https%3A%2F%2Fexample.com%2Fs%3Fss%3DRome&group_adults=&no_room=2",
        );

        assert_eq!(params.url.as_deref(), Some("https://example.com/s?ss=Rome"));
        assert_eq!(params.group_adults, None);
        assert_eq!(params.no_room.as_deref(), Some("2"));
    }

    #[test]
    fn empty_url_counts_as_missing() {
        let params = SearchParams::from_query("url=");
        assert_eq!(params.url, None);
    }

    #[test]
    fn repeated_keys_keep_the_last_non_empty_value() {
        let params = SearchParams::from_query(
            "url=https%3A%2F%2Fa.com&group_adults=1&group_adults=2&no_room=3&no_room=",
        );

        assert_eq!(params.url.as_deref(), Some("https://a.com"));
        assert_eq!(params.group_adults.as_deref(), Some("2"));
        assert_eq!(params.no_room.as_deref(), Some("3"));
    }

    #[test]
    fn backfill_tolerates_repeated_embedded_keys() {
        let params = SearchParams {
            url: Some("https://a.com/s?no_room=1&no_room=2".to_string()),
            ..SearchParams::default()
        }
        .backfilled_from_url();

        assert_eq!(params.no_room.as_deref(), Some("2"));
    }

    #[test]
    fn only_http_and_https_urls_are_web_links() {
        assert!(is_web_link(OUTBOUND));
        assert!(is_web_link("http://example.com/"));
        assert!(is_web_link("HTTPS://example.com/"));
        assert!(!is_web_link("javascript:alert(document.cookie)"));
        assert!(!is_web_link("JavaScript:alert(1)"));
        assert!(!is_web_link("data:text/html,<script>alert(1)</script>"));
        assert!(!is_web_link("/search?url=x"));
        assert!(!is_web_link(""));
    }

    #[test]
    fn non_web_links_are_blanked() {
        let results = SearchResults {
            source_url: "javascript:alert(document.cookie)".to_string(),
            listings: vec![
                Listing {
                    title: "Safe".to_string(),
                    link: "https://example.com/hotel".to_string(),
                    description: None,
                    price: None,
                    rating: None,
                },
                Listing {
                    title: "Unsafe".to_string(),
                    link: "javascript:alert(1)".to_string(),
                    description: None,
                    price: None,
                    rating: None,
                },
            ],
        }
        .with_web_links_only();

        assert_eq!(results.source_url, "");
        assert_eq!(results.listings[0].link, "https://example.com/hotel");
        assert_eq!(results.listings[1].link, "");
        assert_eq!(results.listings[1].title, "Unsafe");
    }

    #[test]
    fn backfill_copies_keys_from_embedded_query() {
        let params = SearchParams {
            url: Some(OUTBOUND.to_string()),
            ..SearchParams::default()
        }
        .backfilled_from_url();

        assert_eq!(params.group_adults.as_deref(), Some("2"));
        assert_eq!(params.group_children.as_deref(), Some("0"));
        assert_eq!(params.checkin.as_deref(), Some("2024-3-5"));
        assert_eq!(params.checkout.as_deref(), Some("2024-3-9"));
        assert_eq!(params.no_room.as_deref(), Some("1"));
        assert_eq!(params.url.as_deref(), Some(OUTBOUND));
    }

    #[test]
    fn backfill_keeps_values_sent_on_the_request() {
        let params = SearchParams {
            url: Some(OUTBOUND.to_string()),
            group_adults: Some("4".to_string()),
            ..SearchParams::default()
        }
        .backfilled_from_url();

        assert_eq!(params.group_adults.as_deref(), Some("4"));
        assert_eq!(params.no_room.as_deref(), Some("1"));
    }

    #[test]
    fn backfill_without_embedded_query_is_a_no_op() {
        let params = SearchParams {
            url: Some("https://example.com/".to_string()),
            ..SearchParams::default()
        };
        assert_eq!(params.clone().backfilled_from_url(), params);
    }
}
