//! Viewer error types

use capture::CaptureError;
use thiserror::Error;

use crate::HostError;

/// Failure of a single viewer operation
///
/// The `Display` text is what the user sees in the error notice.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("Could not capture the screen")]
    NoStream,

    #[error("The captured source has no video track")]
    NoVideoTrack,

    #[error("The screen has stopped")]
    StreamStopped,

    #[error(transparent)]
    Host(#[from] HostError),
}

pub type ViewerResult<T> = Result<T, ViewerError>;
