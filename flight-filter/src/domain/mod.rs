//! Domain types for flight filtering.
//!
//! These are plain value types. Nothing here validates timing: flights
//! and segments carry whatever the data source produced, and the filters
//! decide what to keep.

mod flight;
mod segment;

pub use flight::Flight;
pub use segment::Segment;
