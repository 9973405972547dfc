//! The flight filter engine.

use chrono::{NaiveDateTime, NaiveTime};
use rayon::prelude::*;
use tracing::{debug, trace};

use super::error::FilterError;
use super::ground;
use super::time_arrow::TimeArrow;
use crate::domain::{Flight, Segment};

/// Filtering operations over a fixed collection.
///
/// Every operation returns a fresh collection and leaves the held one
/// untouched, so calls can be repeated or made concurrently.
pub trait Filterable {
    /// The kind of record being filtered.
    type Item;

    /// Keep segments on the side of `reference` selected by `direction`.
    fn filter_for(
        &self,
        direction: TimeArrow,
        reference: NaiveDateTime,
    ) -> Result<Vec<Self::Item>, FilterError>;

    /// Keep segments that land after they take off.
    fn filter_incorrect_dates(&self) -> Result<Vec<Self::Item>, FilterError>;

    /// Keep records whose total ground time is below `threshold`.
    fn filter_summary_time_more_than(
        &self,
        threshold: NaiveTime,
    ) -> Result<Vec<Self::Item>, FilterError>;
}

/// Filters a snapshot of flights.
///
/// The snapshot may be absent (`None`), which is reported as
/// [`FilterError::NullData`] when an operation runs, not at construction.
/// A present but empty snapshot always yields empty results.
///
/// # Examples
///
/// ```
/// use flight_filter::domain::{Flight, Segment};
/// use flight_filter::filter::{Filterable, FlightFilter, TimeArrow};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let at = |h| date.and_hms_opt(h, 0, 0).unwrap();
///
/// let flights = vec![Flight::new(vec![Segment::new(at(10), at(12))])];
/// let filter = FlightFilter::new(flights.clone());
///
/// assert_eq!(filter.filter_for(TimeArrow::EarlierDepDate, at(9)).unwrap(), flights);
/// assert!(filter.filter_for(TimeArrow::EarlierDepDate, at(11)).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlightFilter {
    flights: Option<Vec<Flight>>,
}

impl FlightFilter {
    /// Create a filter over the given flights.
    pub fn new(flights: Vec<Flight>) -> Self {
        Self {
            flights: Some(flights),
        }
    }

    /// Create a filter over flights that may be absent.
    pub fn from_optional(flights: Option<Vec<Flight>>) -> Self {
        Self { flights }
    }

    /// Returns the held flights, if any.
    pub fn flights(&self) -> Option<&[Flight]> {
        self.flights.as_deref()
    }

    fn held(&self) -> Result<&[Flight], FilterError> {
        self.flights.as_deref().ok_or_else(FilterError::null_data)
    }

    /// Rebuild every flight from the segments matching `keep`, dropping
    /// flights left with none.
    fn retain_segments<F>(flights: &[Flight], keep: F) -> Vec<Flight>
    where
        F: Fn(&Segment) -> bool,
    {
        flights
            .iter()
            .filter_map(|flight| flight.retain_segments(&keep))
            .collect()
    }
}

impl Filterable for FlightFilter {
    type Item = Flight;

    fn filter_for(
        &self,
        direction: TimeArrow,
        reference: NaiveDateTime,
    ) -> Result<Vec<Flight>, FilterError> {
        let flights = self.held()?;
        if flights.is_empty() {
            return Ok(Vec::new());
        }

        let result = Self::retain_segments(flights, |s| direction.keeps(s, reference));

        debug!(
            ?direction,
            %reference,
            flights = flights.len(),
            retained = result.len(),
            "Filtered by time arrow"
        );
        Ok(result)
    }

    fn filter_incorrect_dates(&self) -> Result<Vec<Flight>, FilterError> {
        let flights = self.held()?;
        if flights.is_empty() {
            return Ok(Vec::new());
        }

        let result = Self::retain_segments(flights, Segment::is_chronological);

        debug!(
            flights = flights.len(),
            retained = result.len(),
            "Filtered inconsistent segment dates"
        );
        Ok(result)
    }

    fn filter_summary_time_more_than(
        &self,
        threshold: NaiveTime,
    ) -> Result<Vec<Flight>, FilterError> {
        let flights = self.held()?;
        if flights.is_empty() {
            return Ok(Vec::new());
        }

        // rayon's collect keeps input order
        let result: Vec<Flight> = flights
            .par_iter()
            .filter(|flight| {
                if flight.is_empty() {
                    return false;
                }
                let keep = ground::is_under(flight, threshold);
                trace!(
                    ground_secs = ground::ground_time(flight).num_seconds(),
                    keep, "Evaluated ground time"
                );
                keep
            })
            .cloned()
            .collect();

        debug!(
            %threshold,
            flights = flights.len(),
            retained = result.len(),
            "Filtered by ground time"
        );
        Ok(result)
    }
}
