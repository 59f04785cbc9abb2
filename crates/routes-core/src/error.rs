// crates/routes-core/src/error.rs

use thiserror::Error;

/// Error types for the Routes sample clients.
///
/// Every variant is fatal to the sample programs; the distinction exists so
/// the diagnostic says which stage failed.
#[derive(Debug, Error)]
pub enum RoutesError {
    /// Invalid configuration (endpoint, config file, header values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// TLS or transport setup failed.
    #[error("Failed to connect: {0}")]
    Connect(String),

    /// A unary call, or the opening of a stream, was rejected.
    #[error("Failed to call {method}: {status}")]
    Call {
        method: &'static str,
        status: tonic::Status,
    },

    /// A stream failed after delivering `received` elements.
    #[error("Received error in {method} stream after {received} elements: {status}")]
    Stream {
        method: &'static str,
        received: usize,
        status: tonic::Status,
    },

    /// The call context's deadline passed before the call completed.
    #[error("Deadline exceeded while calling {method}")]
    DeadlineExceeded { method: &'static str },

    /// Operation attempted in a state that does not allow it.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl RoutesError {
    /// The gRPC status behind this error, when the server produced one.
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            RoutesError::Call { status, .. } | RoutesError::Stream { status, .. } => Some(status),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for RoutesError {
    fn from(e: toml::de::Error) -> Self {
        RoutesError::Config(e.to_string())
    }
}

impl From<tonic::metadata::errors::InvalidMetadataValue> for RoutesError {
    fn from(e: tonic::metadata::errors::InvalidMetadataValue) -> Self {
        RoutesError::Config(format!("invalid header value: {}", e))
    }
}
