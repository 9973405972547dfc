//! Flight data sources.
//!
//! Filters only need a `Vec<Flight>`. This module provides two ways to
//! get one: a built-in sample set and a JSON file loader.

mod error;
mod json;
mod sample;

pub use error::SourceError;
pub use json::{load_flights, parse_flights};
pub use sample::{FlightBuilder, sample_flights};
