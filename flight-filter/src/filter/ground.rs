//! Ground (connection) time computation.
//!
//! Ground time is measured between each segment's arrival and the next
//! segment's departure, in list order. Segments are never re-sorted, so
//! an out-of-order itinerary gets the ground time its list order implies.

use chrono::{Duration, NaiveTime, Timelike};

use crate::domain::Flight;

/// Returns the total time spent on the ground between consecutive segments.
///
/// Each connection contributes its absolute length in whole seconds, so a
/// next leg departing before the previous one lands adds to the total
/// rather than cancelling other connections. Flights with fewer than two
/// segments have zero ground time.
pub fn ground_time(flight: &Flight) -> Duration {
    let seconds: i64 = flight
        .segments()
        .windows(2)
        .map(|pair| {
            pair[1]
                .departure_date()
                .signed_duration_since(pair[0].arrival_date())
                .abs()
                .num_seconds()
        })
        .sum();

    Duration::seconds(seconds)
}

/// Returns true if the flight's ground time is strictly below `threshold`,
/// read as seconds since midnight.
pub fn is_under(flight: &Flight, threshold: NaiveTime) -> bool {
    ground_time(flight).num_seconds() < i64::from(threshold.num_seconds_from_midnight())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Segment;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn hhmm(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn single_segment_has_no_ground_time() {
        let flight = Flight::new(vec![Segment::new(at(10, 0), at(12, 0))]);
        assert_eq!(ground_time(&flight), Duration::zero());
    }

    #[test]
    fn empty_flight_has_no_ground_time() {
        assert_eq!(ground_time(&Flight::default()), Duration::zero());
    }

    #[test]
    fn sums_adjacent_connections() {
        // 1h + 2h on the ground
        let flight = Flight::new(vec![
            Segment::new(at(8, 0), at(10, 0)),
            Segment::new(at(11, 0), at(12, 0)),
            Segment::new(at(14, 0), at(15, 0)),
        ]);

        assert_eq!(ground_time(&flight), Duration::hours(3));
    }

    #[test]
    fn negative_connection_counts_its_magnitude() {
        // Second leg departs 30 minutes before the first lands
        let flight = Flight::new(vec![
            Segment::new(at(8, 0), at(10, 0)),
            Segment::new(at(9, 30), at(11, 0)),
            Segment::new(at(12, 0), at(13, 0)),
        ]);

        assert_eq!(ground_time(&flight), Duration::minutes(90));
    }

    #[test]
    fn list_order_is_used_as_is() {
        // Legs listed backwards: 12:00 arrival, then a 08:00 departure
        let flight = Flight::new(vec![
            Segment::new(at(11, 0), at(12, 0)),
            Segment::new(at(8, 0), at(9, 0)),
        ]);

        assert_eq!(ground_time(&flight), Duration::hours(4));
    }

    #[test]
    fn under_is_strict() {
        let flight = Flight::new(vec![
            Segment::new(at(8, 0), at(10, 0)),
            Segment::new(at(12, 0), at(13, 0)),
        ]);

        assert!(!is_under(&flight, hhmm(2, 0)));
        assert!(is_under(&flight, hhmm(2, 1)));
    }

    #[test]
    fn zero_threshold_excludes_direct_flights() {
        let flight = Flight::new(vec![Segment::new(at(10, 0), at(12, 0))]);

        assert!(!is_under(&flight, hhmm(0, 0)));
        assert!(is_under(&flight, hhmm(0, 1)));
    }
}
