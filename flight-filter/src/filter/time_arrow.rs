//! Direction selector for the reference-time filter.

use chrono::NaiveDateTime;

use crate::domain::Segment;

/// Which segment timestamp to compare against a reference time, and which
/// side of it to keep.
///
/// The variant names describe what gets *excluded*, not what is kept:
/// `EarlierDepDate` drops segments departing at or before the reference,
/// leaving only later departures. Comparisons are strict, so a segment
/// exactly at the reference time is dropped by every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeArrow {
    /// Keep segments departing strictly after the reference.
    EarlierDepDate,
    /// Keep segments departing strictly before the reference.
    LaterDepDate,
    /// Keep segments arriving strictly after the reference.
    EarlierArrDate,
    /// Keep segments arriving strictly before the reference.
    LaterArrDate,
}

impl TimeArrow {
    /// All directions, in declaration order.
    pub const ALL: [TimeArrow; 4] = [
        TimeArrow::EarlierDepDate,
        TimeArrow::LaterDepDate,
        TimeArrow::EarlierArrDate,
        TimeArrow::LaterArrDate,
    ];

    /// Returns true if `segment` survives this direction at `reference`.
    pub fn keeps(self, segment: &Segment, reference: NaiveDateTime) -> bool {
        match self {
            TimeArrow::EarlierDepDate => segment.departure_date() > reference,
            TimeArrow::LaterDepDate => segment.departure_date() < reference,
            TimeArrow::EarlierArrDate => segment.arrival_date() > reference,
            TimeArrow::LaterArrDate => segment.arrival_date() < reference,
        }
    }
}
