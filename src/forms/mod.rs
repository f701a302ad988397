//! Form definitions backing the search routes.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::domain::types::SearchFieldError;

pub mod search;

/// Inputs of the search form, used to key validation messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SearchField {
    Location,
    Dates,
    Adults,
    Children,
    Rooms,
}

impl SearchField {
    pub const fn as_str(self) -> &'static str {
        match self {
            SearchField::Location => "location",
            SearchField::Dates => "dates",
            SearchField::Adults => "adults",
            SearchField::Children => "children",
            SearchField::Rooms => "rooms",
        }
    }
}

/// Per-field validation failures; one message per offending input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<SearchField, SearchFieldError>);

impl FieldErrors {
    pub fn insert(&mut self, field: SearchField, error: SearchFieldError) {
        self.0.entry(field).or_insert(error);
    }

    pub fn get(&self, field: SearchField) -> Option<SearchFieldError> {
        self.0.get(&field).copied()
    }

    /// Messages keyed by input name, as rendered next to each input.
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.0
            .iter()
            .map(|(field, error)| (field.as_str(), error.to_string()))
            .collect()
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, error)| format!("{}: {error}", field.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{joined}")
    }
}

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(FieldErrors),
}
