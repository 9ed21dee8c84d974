//! Capture request options
//!
//! These mirror the `getDisplayMedia` options dictionary and are forwarded
//! verbatim; nothing in the core interprets them.

use serde::{Deserialize, Serialize};

/// Preferred kind of surface offered first in the picker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplaySurface {
    #[default]
    Browser,
    Window,
    Monitor,
}

/// Include/exclude switch used by several capture options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Inclusion {
    Include,
    Exclude,
}

/// Video constraints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoConstraints {
    pub display_surface: DisplaySurface,
}

/// Audio constraints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioConstraints {
    pub suppress_local_audio_playback: bool,
}

/// Capture configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptureOptions {
    pub video: VideoConstraints,
    pub audio: AudioConstraints,
    /// Offer the current tab as the default choice
    pub prefer_current_tab: bool,
    /// Whether this application's own surface may be picked
    pub self_browser_surface: Inclusion,
    pub system_audio: Inclusion,
    /// Allow switching the shared surface without restarting capture
    pub surface_switching: Inclusion,
    pub monitor_type_surfaces: Inclusion,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            video: VideoConstraints::default(),
            audio: AudioConstraints::default(),
            prefer_current_tab: false,
            self_browser_surface: Inclusion::Exclude,
            system_audio: Inclusion::Include,
            surface_switching: Inclusion::Include,
            monitor_type_surfaces: Inclusion::Include,
        }
    }
}
