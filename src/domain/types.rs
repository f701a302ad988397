//! Strongly-typed value objects used by the search query.
//!
//! Each wrapper checks its bounds once in `new`, so a value that reaches the
//! URL builder can be treated as trusted. Occupancy counts are text-encoded
//! and bounded by string length, not by numeric value.
use std::fmt::{Display, Formatter};

use serde::Serialize;
use thiserror::Error;
use validator::ValidateLength;

/// Errors produced when a search field fails its constraints.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchFieldError {
    #[error("must be 2 characters or more")]
    LocationTooShort,
    #[error("must be 50 characters or fewer")]
    LocationTooLong,
    #[error("please pick a check-in and check-out date")]
    DatesMissing,
    #[error("invalid date")]
    DatesInvalid,
    #[error("please select at least one adult")]
    AdultsMissing,
    #[error("Maximum is 12 person occupancies")]
    AdultsTooMany,
    #[error("Maximum is 12 child occupancies")]
    ChildrenTooMany,
    #[error("please select at least 1 room")]
    RoomsMissing,
}

const LOCATION_MIN_CHARS: u64 = 2;
const LOCATION_MAX_CHARS: u64 = 50;
const OCCUPANCY_MAX_CHARS: u64 = 12;

/// Macro to generate text newtypes shared by the search fields.
macro_rules! text_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Borrow the value as a `&str`.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

text_newtype!(Location, "Free-text destination, 2 to 50 characters.");
text_newtype!(AdultCount, "Text-encoded adult count, 1 to 12 characters long.");
text_newtype!(ChildCount, "Text-encoded children count, at most 12 characters long.");
text_newtype!(RoomCount, "Text-encoded room count, at least 1 character long.");

impl Location {
    /// Checks the character length. Surrounding whitespace is kept as typed.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, SearchFieldError> {
        let value = value.into();
        if !value.validate_length(Some(LOCATION_MIN_CHARS), None, None) {
            return Err(SearchFieldError::LocationTooShort);
        }
        if !value.validate_length(None, Some(LOCATION_MAX_CHARS), None) {
            return Err(SearchFieldError::LocationTooLong);
        }
        Ok(Self(value))
    }
}

impl AdultCount {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, SearchFieldError> {
        let value = value.into();
        if value.is_empty() {
            return Err(SearchFieldError::AdultsMissing);
        }
        if !value.validate_length(None, Some(OCCUPANCY_MAX_CHARS), None) {
            return Err(SearchFieldError::AdultsTooMany);
        }
        Ok(Self(value))
    }
}

impl ChildCount {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, SearchFieldError> {
        let value = value.into();
        if value.validate_length(None, Some(OCCUPANCY_MAX_CHARS), None) {
            Ok(Self(value))
        } else {
            Err(SearchFieldError::ChildrenTooMany)
        }
    }
}

impl RoomCount {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, SearchFieldError> {
        let value = value.into();
        if value.validate_length(Some(1_u64), None, None) {
            Ok(Self(value))
        } else {
            Err(SearchFieldError::RoomsMissing)
        }
    }
}
