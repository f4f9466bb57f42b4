//! Dashboard error types
//!
//! Defines all errors that can occur while loading dashboard data.

use thiserror::Error;

/// Errors that can occur while fetching or decoding dashboard data
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Transport-level failure
    #[cfg(feature = "client")]
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint did not answer in time
    #[error("Request timeout")]
    Timeout,

    /// The endpoint could not be reached
    #[error("Endpoint unavailable: {0}")]
    Unavailable(String),

    /// The endpoint answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// Body was not valid JSON or had the wrong shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Decode(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
