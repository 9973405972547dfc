//! Built-in sample flights.

use chrono::{Duration, NaiveDateTime};

use super::SourceError;
use crate::domain::{Flight, Segment};

/// Builds flights from flat lists of timestamps.
pub struct FlightBuilder;

impl FlightBuilder {
    /// Build a flight from dates given as departure, arrival, departure,
    /// arrival, and so on.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the number of dates is odd.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_filter::source::FlightBuilder;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let at = |h| date.and_hms_opt(h, 0, 0).unwrap();
    ///
    /// let flight = FlightBuilder::create_flight(&[at(8), at(10), at(11), at(13)]).unwrap();
    /// assert_eq!(flight.segment_count(), 2);
    ///
    /// assert!(FlightBuilder::create_flight(&[at(8), at(10), at(11)]).is_err());
    /// ```
    pub fn create_flight(dates: &[NaiveDateTime]) -> Result<Flight, SourceError> {
        if dates.len() % 2 != 0 {
            return Err(SourceError::OddDateCount(dates.len()));
        }

        let segments = dates
            .chunks_exact(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect();

        Ok(Flight::new(segments))
    }
}

/// Build the sample itineraries, anchored three days after `now`.
///
/// Each flight is shaped so that one of the filters has something to
/// drop:
///
/// 1. a normal two-hour flight
/// 2. a normal multi-segment flight
/// 3. a flight departing in the past
/// 4. a flight that departs after it arrives
/// 5. a flight with more than two hours on the ground
/// 6. another flight with more than two hours on the ground
pub fn sample_flights(now: NaiveDateTime) -> Vec<Flight> {
    let t = now + Duration::days(3);
    let h = Duration::hours;

    vec![
        pair_flight(&[(t, t + h(2))]),
        pair_flight(&[(t, t + h(2)), (t + h(3), t + h(5))]),
        pair_flight(&[(t - Duration::days(6), t)]),
        pair_flight(&[(t, t - h(6))]),
        pair_flight(&[(t, t + h(2)), (t + h(5), t + h(6))]),
        pair_flight(&[(t, t + h(2)), (t + h(3), t + h(4)), (t + h(6), t + h(7))]),
    ]
}

fn pair_flight(legs: &[(NaiveDateTime, NaiveDateTime)]) -> Flight {
    Flight::new(
        legs.iter()
            .map(|&(dep, arr)| Segment::new(dep, arr))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ground_time;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn builder_pairs_dates() {
        let t = now();
        let flight = FlightBuilder::create_flight(&[
            t,
            t + Duration::hours(1),
            t + Duration::hours(2),
            t + Duration::hours(4),
        ])
        .unwrap();

        assert_eq!(
            flight.segments(),
            &[
                Segment::new(t, t + Duration::hours(1)),
                Segment::new(t + Duration::hours(2), t + Duration::hours(4)),
            ]
        );
    }

    #[test]
    fn builder_rejects_odd_count() {
        let t = now();
        let result = FlightBuilder::create_flight(&[t]);

        assert!(matches!(result, Err(SourceError::OddDateCount(1))));
    }

    #[test]
    fn builder_empty_dates() {
        let flight = FlightBuilder::create_flight(&[]).unwrap();
        assert!(flight.is_empty());
    }

    #[test]
    fn sample_shapes() {
        let flights = sample_flights(now());
        let t = now() + Duration::days(3);

        assert_eq!(flights.len(), 6);
        assert_eq!(
            flights.iter().map(Flight::segment_count).collect::<Vec<_>>(),
            vec![1, 2, 1, 1, 2, 3]
        );

        // Departs in the past
        assert!(flights[2].segments()[0].departure_date() < now());
        // Arrives before it departs
        assert!(!flights[3].segments()[0].is_chronological());
        assert_eq!(flights[3].segments()[0].departure_date(), t);
    }

    #[test]
    fn sample_ground_times() {
        let flights = sample_flights(now());
        let ground: Vec<_> = flights.iter().map(ground_time).collect();

        assert_eq!(ground[1], Duration::hours(1));
        assert_eq!(ground[4], Duration::hours(3));
        assert_eq!(ground[5], Duration::hours(3));
    }
}
