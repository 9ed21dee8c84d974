//! Viewer configuration

use serde::{Deserialize, Serialize};
use shared_protocol::MENU_REVEAL_HEIGHT;

use crate::{DEFAULT_ZOOM_STEP, MIN_ZOOM};

/// Tunables for the view state machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Zoom change per wheel notch; must be positive
    pub zoom_step: f64,
    /// Lowest zoom factor; never below [`MIN_ZOOM`]
    pub min_zoom: f64,
    /// Pointer positions above this Y coordinate reveal the menu
    pub menu_reveal_height: f64,
}

impl ViewerConfig {
    /// Effective zoom floor
    pub fn zoom_floor(&self) -> f64 {
        if self.min_zoom.is_finite() {
            self.min_zoom.max(MIN_ZOOM)
        } else {
            MIN_ZOOM
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_step: DEFAULT_ZOOM_STEP,
            min_zoom: MIN_ZOOM,
            menu_reveal_height: MENU_REVEAL_HEIGHT,
        }
    }
}
