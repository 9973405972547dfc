//! Data source error types.

use std::path::PathBuf;

/// Errors from building or loading flight data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Segment dates must come in departure/arrival pairs
    #[error("flight needs an even number of dates, got {0}")]
    OddDateCount(usize),

    /// Reading the data file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data is not a JSON array of flights
    #[error("invalid flight data: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SourceError::OddDateCount(3);
        assert_eq!(err.to_string(), "flight needs an even number of dates, got 3");

        let err = SourceError::Io {
            path: PathBuf::from("flights.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "failed to read flights.json: missing");
    }
}
