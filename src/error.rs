//! Error types for the client and the driver.

use thiserror::Error;

/// Errors raised while talking to the graph API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured endpoint does not form a valid URL.
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection, protocol, or body read failure.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// A successful body did not match the expected JSON shape.
    #[error("failed to decode response for {operation}: {source}")]
    Decode {
        operation: String,
        source: serde_json::Error,
    },
}

/// Errors that stop a driver run.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Transport failures are always fatal.
    #[error("request {operation} failed: {source}")]
    Transport {
        operation: String,
        source: ClientError,
    },

    /// Non-200 status under the `abort` failure policy.
    #[error("request {operation} rejected with HTTP {status}")]
    Rejected { operation: String, status: u16 },

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
