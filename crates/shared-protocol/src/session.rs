//! Capture status and view snapshots

use serde::{Deserialize, Serialize};

/// Capture lifecycle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureStatus {
    /// No capture, no outstanding request
    #[default]
    Idle,
    /// Waiting for the capture subsystem to grant a stream
    Requesting,
    /// A stream is attached
    Active,
    /// The last capture attempt failed or the stream ended externally
    Error,
}

/// On-screen position of the video element relative to the window origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoOffset {
    pub x: f64,
    pub y: f64,
}

impl VideoOffset {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Shift by a pointer movement
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Everything the webview needs to render the current view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    /// Increases with every published change; older snapshots are stale
    pub revision: u64,
    /// CSS transform, `rotate(<d>deg) scale(<z>)`
    pub transform: String,
    pub rotation_degrees: u16,
    pub zoom_factor: f64,
    pub edit_mode: bool,
    pub pinned: bool,
    pub menu_visible: bool,
    /// Error message; empty when there is none
    pub message: String,
    pub capture: CaptureStatus,
    /// Id of the stream the video element should play
    pub stream_id: Option<String>,
    pub video_offset: VideoOffset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_camel_case() {
        let snapshot = ViewSnapshot {
            revision: 7,
            transform: "rotate(90deg) scale(1)".to_string(),
            rotation_degrees: 90,
            zoom_factor: 1.0,
            edit_mode: false,
            pinned: true,
            menu_visible: true,
            message: String::new(),
            capture: CaptureStatus::Active,
            stream_id: Some("s-1".to_string()),
            video_offset: VideoOffset::ORIGIN,
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["rotationDegrees"], 90);
        assert_eq!(value["capture"], "active");
        assert_eq!(value["streamId"], "s-1");
        assert_eq!(value["revision"], 7);
        assert_eq!(value["message"], "");
    }

    #[test]
    fn offset_translation() {
        let moved = VideoOffset::ORIGIN.translated(3.0, -2.0).translated(1.0, 1.0);
        assert_eq!(moved, VideoOffset { x: 4.0, y: -1.0 });
    }
}
