//! Window geometry coordination
//!
//! Keeps the host window sized to the captured source's native resolution,
//! but only while the view is axis-aligned: once rotated off-axis the
//! intrinsic width and height no longer match the occupied footprint.

use shared_protocol::VideoOffset;
use tracing::{debug, info};

use crate::{HostWindow, Rotation, ViewerResult, WindowSize};

/// Host window size policy plus the video element's on-screen position
#[derive(Debug, Clone, Default)]
pub struct WindowGeometry {
    video_offset: VideoOffset,
}

impl WindowGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn video_offset(&self) -> VideoOffset {
        self.video_offset
    }

    /// Move the video by a pointer drag
    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.video_offset = self.video_offset.translated(dx, dy);
    }

    /// React to the capture pipeline reporting the source's native size.
    ///
    /// Returns `Ok(true)` if a resize command was issued. Off-axis rotation
    /// makes this a no-op; the geometry is not revisited on later rotations.
    pub fn on_capture_ready<H: HostWindow>(
        &mut self,
        rotation: Rotation,
        native: WindowSize,
        host: &H,
    ) -> ViewerResult<bool> {
        if !rotation.is_axis_aligned() {
            debug!("Skipping window resize to {}: rotated {}", native, rotation);
            return Ok(false);
        }

        self.video_offset = VideoOffset::ORIGIN;
        host.set_size(native)?;
        info!("Window resized to {}", native);
        Ok(true)
    }
}
