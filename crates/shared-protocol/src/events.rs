//! Event names and payloads pushed from the core to the webview

use serde::{Deserialize, Serialize};

/// Updated [`crate::ViewSnapshot`] after any state change
pub const EVENT_VIEW_CHANGED: &str = "view-changed";
/// Ask the webview to call `getDisplayMedia`
pub const EVENT_CAPTURE_REQUEST: &str = "capture-request";
/// Ask the webview to stop a track it holds
pub const EVENT_STOP_TRACK: &str = "stop-track";

/// Payload of [`EVENT_STOP_TRACK`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTrack {
    pub track_id: String,
}

