//! Flight itinerary filtering.
//!
//! Takes a fixed collection of flights and drops the ones that have
//! already departed, the ones whose segment dates are inconsistent, and
//! the ones that spend too long on the ground between connections.

pub mod config;
pub mod domain;
pub mod filter;
pub mod logging;
pub mod source;
