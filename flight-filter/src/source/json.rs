//! JSON flight data.
//!
//! The file holds an array of flights:
//!
//! ```json
//! [
//!   {"segments": [{"departure_date": "2024-01-01T10:00:00", "arrival_date": "2024-01-01T12:00:00"}]}
//! ]
//! ```

use std::path::Path;

use tracing::debug;

use super::SourceError;
use crate::domain::Flight;

/// Parse a JSON array of flights.
pub fn parse_flights(json: &str) -> Result<Vec<Flight>, SourceError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON flight file.
pub fn load_flights(path: impl AsRef<Path>) -> Result<Vec<Flight>, SourceError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let flights = parse_flights(&json)?;
    debug!(path = %path.display(), flights = flights.len(), "Loaded flight data");
    Ok(flights)
}
