use std::collections::BTreeMap;

use crate::forms::search::SearchForm;

/// Data required to render the search form page.
#[derive(Debug)]
pub struct IndexPageData {
    /// Values echoed back into the inputs.
    pub form: SearchForm,
    /// Validation messages keyed by input name.
    pub errors: BTreeMap<&'static str, String>,
    /// Earliest selectable date (`YYYY-MM-DD`).
    pub min_date: String,
}
