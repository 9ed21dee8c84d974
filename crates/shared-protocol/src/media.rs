//! Media stream descriptors reported by the webview

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a media track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Video,
    Audio,
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackKind::Video => f.write_str("video"),
            TrackKind::Audio => f.write_str("audio"),
        }
    }
}

/// A single track of a granted stream (`MediaStreamTrack`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDescriptor {
    pub id: String,
    pub kind: TrackKind,
    /// Human readable label, e.g. the shared window title
    #[serde(default)]
    pub label: String,
}

/// A granted display stream (`MediaStream`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    pub id: String,
    pub tracks: Vec<TrackDescriptor>,
}

/// The webview's answer to a capture request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CaptureResponse {
    /// `getDisplayMedia` resolved with a stream
    Granted { stream: StreamDescriptor },
    /// `getDisplayMedia` rejected with a DOM exception
    Denied { name: String, message: String },
    /// `getDisplayMedia` resolved without a stream
    Empty,
}
