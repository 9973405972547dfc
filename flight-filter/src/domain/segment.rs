//! Flight segment type.
//!
//! A `Segment` is a single leg of an itinerary: one take-off and one
//! landing.

use std::fmt;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp format used when displaying segments.
const DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// One leg of a flight.
///
/// Arrival is expected to be after departure, but this is not checked
/// at construction: source data can be inconsistent, and that is what
/// [`Filterable::filter_incorrect_dates`](crate::filter::Filterable::filter_incorrect_dates)
/// exists to catch.
///
/// # Examples
///
/// ```
/// use flight_filter::domain::Segment;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let segment = Segment::new(
///     date.and_hms_opt(10, 0, 0).unwrap(),
///     date.and_hms_opt(12, 0, 0).unwrap(),
/// );
/// assert_eq!(segment.to_string(), "[2024-01-01T10:00|2024-01-01T12:00]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    departure_date: NaiveDateTime,
    arrival_date: NaiveDateTime,
}

impl Segment {
    /// Create a segment from its departure and arrival timestamps.
    pub fn new(departure_date: NaiveDateTime, arrival_date: NaiveDateTime) -> Self {
        Self {
            departure_date,
            arrival_date,
        }
    }

    /// Returns the departure timestamp.
    pub fn departure_date(&self) -> NaiveDateTime {
        self.departure_date
    }

    /// Returns the arrival timestamp.
    pub fn arrival_date(&self) -> NaiveDateTime {
        self.arrival_date
    }

    /// Returns true if the segment lands strictly after it takes off.
    pub fn is_chronological(&self) -> bool {
        self.arrival_date > self.departure_date
    }

    /// Returns the time in the air. Negative for inverted segments.
    pub fn duration(&self) -> Duration {
        self.arrival_date.signed_duration_since(self.departure_date)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}|{}]",
            self.departure_date.format(DISPLAY_FORMAT),
            self.arrival_date.format(DISPLAY_FORMAT)
        )
    }
}
