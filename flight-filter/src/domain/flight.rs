//! Flight itinerary type.
//!
//! A `Flight` is an ordered list of segments, outbound legs first and
//! connections after, in the order the source provided them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Segment;

/// A flight itinerary.
///
/// Unlike a validated journey, a flight accepts any list of segments,
/// including an empty one. Filters treat malformed flights by leaving
/// them out of their results.
///
/// # Examples
///
/// ```
/// use flight_filter::domain::{Flight, Segment};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let flight = Flight::new(vec![
///     Segment::new(date.and_hms_opt(10, 0, 0).unwrap(), date.and_hms_opt(12, 0, 0).unwrap()),
///     Segment::new(date.and_hms_opt(13, 0, 0).unwrap(), date.and_hms_opt(15, 0, 0).unwrap()),
/// ]);
///
/// assert_eq!(flight.segment_count(), 2);
/// assert_eq!(flight.connection_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Flight {
    segments: Vec<Segment>,
}

impl Flight {
    /// Creates a flight that owns the given segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Returns all segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the number of connections (segments - 1, or 0).
    pub fn connection_count(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// Returns true if the flight has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns a new flight made of the segments matching `keep`, in order.
    ///
    /// Returns `None` when no segment survives, so callers can drop the
    /// flight entirely.
    pub fn retain_segments<F>(&self, mut keep: F) -> Option<Flight>
    where
        F: FnMut(&Segment) -> bool,
    {
        let segments: Vec<Segment> = self.segments.iter().copied().filter(|s| keep(s)).collect();

        if segments.is_empty() {
            None
        } else {
            Some(Flight::new(segments))
        }
    }
}

impl From<Vec<Segment>> for Flight {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
