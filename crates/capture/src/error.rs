//! Capture error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Screen capture not available: {0}")]
    NotAvailable(String),

    #[error("Capture aborted: {0}")]
    Aborted(String),

    #[error("Capture request was cancelled")]
    Cancelled,

    #[error("Capture failed: {0}")]
    Failed(String),

    #[error("Invalid stream: {0}")]
    InvalidStream(String),

    #[error("Platform error: {0}")]
    Platform(String),
}

impl CaptureError {
    /// Map a DOM exception (`name`, `message`) raised by `getDisplayMedia`
    pub fn from_dom_exception(name: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match name {
            "NotAllowedError" | "SecurityError" => CaptureError::PermissionDenied(message),
            "NotSupportedError" | "NotFoundError" | "NotReadableError" => {
                CaptureError::NotAvailable(message)
            }
            "AbortError" => CaptureError::Aborted(message),
            "InvalidStateError" | "TypeError" | "OverconstrainedError" => {
                CaptureError::Platform(message)
            }
            _ => CaptureError::Failed(message),
        }
    }
}

pub type CaptureResult<T> = Result<T, CaptureError>;
