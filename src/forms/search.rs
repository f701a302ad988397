//! The stays search form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::search::{DateRange, SearchQuery};
use crate::domain::types::{AdultCount, ChildCount, Location, RoomCount, SearchFieldError};
use crate::forms::{FieldErrors, FormError, SearchField};

/// Format of `<input type="date">` values.
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
/// Raw form data as posted by the browser.
pub struct SearchForm {
    /// Free-text destination.
    pub location: String,
    /// Start of the date range (`YYYY-MM-DD`).
    pub checkin: String,
    /// End of the date range (`YYYY-MM-DD`).
    pub checkout: String,
    pub adults: String,
    pub children: String,
    pub rooms: String,
}

impl SearchForm {
    /// Values shown on a fresh form: one adult, one room, dates set to `today`.
    pub fn with_defaults(today: NaiveDate) -> Self {
        let today = today.format(FORM_DATE_FORMAT).to_string();
        Self {
            location: String::new(),
            checkin: today.clone(),
            checkout: today,
            adults: "1".to_string(),
            children: "0".to_string(),
            rooms: "1".to_string(),
        }
    }

    fn parse_dates(&self) -> Result<DateRange, SearchFieldError> {
        let checkin = self.checkin.trim();
        let checkout = self.checkout.trim();
        if checkin.is_empty() || checkout.is_empty() {
            return Err(SearchFieldError::DatesMissing);
        }
        let from = NaiveDate::parse_from_str(checkin, FORM_DATE_FORMAT)
            .map_err(|_| SearchFieldError::DatesInvalid)?;
        let to = NaiveDate::parse_from_str(checkout, FORM_DATE_FORMAT)
            .map_err(|_| SearchFieldError::DatesInvalid)?;
        Ok(DateRange::new(from, to))
    }
}

/// Records the error of a failed field and keeps the value of a valid one.
fn collect<T>(
    errors: &mut FieldErrors,
    field: SearchField,
    result: Result<T, SearchFieldError>,
) -> Option<T> {
    result.map_err(|err| errors.insert(field, err)).ok()
}

impl TryFrom<&SearchForm> for SearchQuery {
    type Error = FormError;

    /// Validates every field independently, so all failures are reported at once.
    fn try_from(form: &SearchForm) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();

        let location = collect(
            &mut errors,
            SearchField::Location,
            Location::new(form.location.as_str()),
        );
        let dates = collect(&mut errors, SearchField::Dates, form.parse_dates());
        let adults = collect(
            &mut errors,
            SearchField::Adults,
            AdultCount::new(form.adults.as_str()),
        );
        let children = collect(
            &mut errors,
            SearchField::Children,
            ChildCount::new(form.children.as_str()),
        );
        let rooms = collect(
            &mut errors,
            SearchField::Rooms,
            RoomCount::new(form.rooms.as_str()),
        );

        match (location, dates, adults, children, rooms) {
            (Some(location), Some(dates), Some(adults), Some(children), Some(rooms)) => {
                Ok(SearchQuery {
                    location,
                    dates,
                    adults,
                    children,
                    rooms,
                })
            }
            _ => Err(FormError::Validation(errors)),
        }
    }
}
