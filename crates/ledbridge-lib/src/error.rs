//! Unified error type for the ledbridge-lib crate.
//!
//! [`LedbridgeError`] wraps the sink-level error (`SinkError`) and
//! domain-specific error kinds (`Mapper`, `Encode`). `From` impls allow `?`
//! to propagate across module boundaries seamlessly.

use std::fmt;

use crate::sink::SinkError;

/// Unified error type for ledbridge-lib operations.
#[derive(Debug)]
pub enum LedbridgeError {
    /// Hardware sink error (construction, pixel write).
    Sink(SinkError),
    /// Standard I/O error (dump file creation).
    Io(std::io::Error),
    /// Pixel-mapper chain parsing error.
    Mapper(String),
    /// Output encoding error (PNG dump, JSON serialization).
    Encode(String),
}

impl fmt::Display for LedbridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedbridgeError::Sink(e) => write!(f, "{e}"),
            LedbridgeError::Io(e) => write!(f, "I/O error: {e}"),
            LedbridgeError::Mapper(e) => write!(f, "Pixel mapper error: {e}"),
            LedbridgeError::Encode(e) => write!(f, "Encode error: {e}"),
        }
    }
}

impl std::error::Error for LedbridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LedbridgeError::Sink(e) => Some(e),
            LedbridgeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SinkError> for LedbridgeError {
    fn from(e: SinkError) -> Self {
        LedbridgeError::Sink(e)
    }
}

impl From<std::io::Error> for LedbridgeError {
    fn from(e: std::io::Error) -> Self {
        LedbridgeError::Io(e)
    }
}

/// Crate-level Result alias using [`LedbridgeError`].
pub type Result<T> = std::result::Result<T, LedbridgeError>;
