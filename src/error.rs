//! Dashboard error types
//!
//! Errors raised by the formatting, chart and page layers. None of them are
//! fatal to the page: callers log and carry on with the next chart or run.

use thiserror::Error;

/// Errors that can occur in the dashboard core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// Progress was requested against a zero target
    #[error("Invalid target: progress target must be non-zero")]
    InvalidTarget,

    /// A display element the page expected is not present
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// Requested chart does not exist
    #[error("Chart not found: {0}")]
    UnknownChart(String),

    /// Chart configuration could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::MissingElement("portfolioChart".to_string());
        assert_eq!(err.to_string(), "Element not found: portfolioChart");

        let err = DashboardError::InvalidTarget;
        assert_eq!(
            err.to_string(),
            "Invalid target: progress target must be non-zero"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::Serialization(_)));
    }
}
