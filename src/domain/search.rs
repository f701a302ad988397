use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::types::{AdultCount, ChildCount, Location, RoomCount};

/// Check-in and check-out dates picked on the form.
///
/// Neither a past `from` nor `to < from` is rejected here; the date inputs
/// only offer today onwards.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }
}

/// A fully validated search, ready to be turned into an outbound URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub location: Location,
    pub dates: DateRange,
    pub adults: AdultCount,
    pub children: ChildCount,
    pub rooms: RoomCount,
}

/// How `checkin`/`checkout` are written into the outbound URL.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `YYYY-M-D`, month and day without zero-padding.
    #[default]
    Unpadded,
    /// `YYYY-MM-DD`.
    Iso,
}

/// Formats a check date for the outbound search endpoint.
pub fn format_check_date(date: NaiveDate, style: DateStyle) -> String {
    match style {
        DateStyle::Unpadded => format!("{}-{}-{}", date.year(), date.month(), date.day()),
        DateStyle::Iso => date.format("%Y-%m-%d").to_string(),
    }
}
