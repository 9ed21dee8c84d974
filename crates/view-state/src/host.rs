//! Host window abstraction
//!
//! The window system is an external collaborator reached through opaque
//! commands. Implementations must be cheap to call from the UI thread.

use std::fmt;
use std::num::NonZeroU32;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Failed to resize the window: {0}")]
    Resize(String),

    #[error("Failed to change always-on-top: {0}")]
    AlwaysOnTop(String),

    #[error("Failed to close the application: {0}")]
    Terminate(String),
}

pub type HostResult<T> = Result<T, HostError>;

/// Window size in physical pixels; both sides are positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowSize {
    pub width: NonZeroU32,
    pub height: NonZeroU32,
}

impl WindowSize {
    /// `None` when either side is zero
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            width: NonZeroU32::new(width)?,
            height: NonZeroU32::new(height)?,
        })
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Commands issued to the host window/process
pub trait HostWindow {
    /// `SetWindowSize`
    fn set_size(&self, size: WindowSize) -> HostResult<()>;

    /// `SetAlwaysOnTop`
    fn set_always_on_top(&self, enabled: bool) -> HostResult<()>;

    /// `Terminate`; on success the process exits
    fn terminate(&self) -> HostResult<()>;
}
