//! Filter error types.

/// Message carried when a filter runs without a flight collection.
pub const NULL_DATA_MESSAGE: &str = "Input collection is null. Recheck your type.";

/// Errors raised by filter operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// The filter holds no flight collection at all.
    ///
    /// An empty collection is not an error; only an absent one is.
    #[error("{0}")]
    NullData(String),
}

impl FilterError {
    pub(crate) fn null_data() -> Self {
        FilterError::NullData(NULL_DATA_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FilterError::null_data();
        assert_eq!(err.to_string(), "Input collection is null. Recheck your type.");
    }
}
