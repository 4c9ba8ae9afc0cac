//! Error types for rtdb.
//!
//! [`ProviderError`] is what callers of a [`DatabaseProvider`](crate::DatabaseProvider)
//! see: either the store had no value, or the value did not decode.
//! [`StoreError`] describes faults inside a [`Store`](crate::Store) backend.

use std::fmt;
use thiserror::Error;

/// Outcome of a failed provider request.
///
/// There are exactly two kinds. Store faults are reported as
/// [`ProviderError::NoData`] with the fault attached as the source.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The store returned no value at the resolved path.
    #[error("no data at '{path}'")]
    NoData {
        path: String,
        #[source]
        source: Option<StoreError>,
    },

    /// A value was returned but could not be decoded into the record type.
    #[error("failed to decode value at '{path}'")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ProviderError {
    /// The path the failed request was issued against.
    pub fn path(&self) -> &str {
        match self {
            ProviderError::NoData { path, .. } | ProviderError::Decode { path, .. } => path,
        }
    }

    /// Returns true if the store had no value (or failed to produce one).
    pub fn is_no_data(&self) -> bool {
        matches!(self, ProviderError::NoData { .. })
    }

    /// Returns true if the value could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, ProviderError::Decode { .. })
    }

    /// The store fault behind a `NoData` error, if there was one.
    pub fn store_error(&self) -> Option<&StoreError> {
        match self {
            ProviderError::NoData { source, .. } => source.as_ref(),
            ProviderError::Decode { .. } => None,
        }
    }
}

/// Errors raised by store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network or filesystem transport errors.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The database answered with an error status.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (bad URL, bad path).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error, including unreadable response bodies.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// Local file could not be read.
    #[error("IO error on '{path}': {message}")]
    Io { path: String, message: String },
}

/// An error status returned by the database.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// The `error` field of the response body, if present.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Check if the database rejected the request's credentials.
    pub fn is_permission_denied(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid database URL.
    #[error("invalid database URL '{value}': {reason}")]
    DatabaseUrl { value: String, reason: String },

    /// Invalid database path.
    #[error("invalid path '{value}': {reason}")]
    Path { value: String, reason: String },

    /// Malformed local database export.
    #[error("invalid export '{path}': {reason}")]
    Export { path: String, reason: String },
}
