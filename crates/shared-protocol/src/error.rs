//! Error types for the protocol

use thiserror::Error;

/// Protocol error
#[derive(Debug, Error, PartialEq)]
pub enum ProtocolError {
    #[error("Unsupported rotation step: {0} degrees")]
    UnsupportedRotateStep(i32),
}

/// Result type alias for protocol operations
pub type ProtocolResult<T> = Result<T, ProtocolError>;
