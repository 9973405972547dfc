//! Flight filtering.
//!
//! [`FlightFilter`] holds a snapshot of flights and answers three
//! questions about it:
//!
//! - which segments lie on one side of a reference time ([`TimeArrow`]),
//! - which segments have consistent departure and arrival dates,
//! - which flights spend less than a given time on the ground.
//!
//! Segment-level filters rebuild each flight from its surviving segments
//! and drop flights left with none.

mod engine;
mod error;
mod ground;
mod time_arrow;

pub use engine::{Filterable, FlightFilter};
pub use error::{FilterError, NULL_DATA_MESSAGE};
pub use ground::{ground_time, is_under};
pub use time_arrow::TimeArrow;
