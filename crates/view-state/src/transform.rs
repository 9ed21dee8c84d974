//! Rotation and zoom of the captured view
//!
//! Rotation is kept in `[0, 360)`. The coarse 90 degree action snaps to the
//! next axis-aligned checkpoint so window auto-sizing stays valid; fine
//! steps rotate freely and leave the view off-axis until the next coarse
//! rotation.

use std::fmt;

use shared_protocol::WheelDirection;
use tracing::{debug, warn};

/// Delta of the coarse rotate action, in degrees
pub const QUARTER_TURN: i32 = 90;

/// Hard zoom floor; the zoom factor never reaches zero
pub const MIN_ZOOM: f64 = 0.1;

/// Zoom change per wheel notch unless configured otherwise
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;

const FULL_TURN: i32 = 360;

/// Checkpoints for coarse rotation, highest first
const CHECKPOINTS: [i32; 4] = [360, 270, 180, 90];

/// Rotation angle in whole degrees, normalized to `[0, 360)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rotation(u16);

impl Rotation {
    pub const ZERO: Self = Self(0);

    /// Normalize any angle into `[0, 360)`
    pub fn new(degrees: i32) -> Self {
        // rem_euclid keeps the result in 0..360 for negative input too
        Self(degrees.rem_euclid(FULL_TURN) as u16)
    }

    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Whether the angle is a multiple of 90 degrees
    pub fn is_axis_aligned(self) -> bool {
        i32::from(self.0) % QUARTER_TURN == 0
    }

    /// Rotate by `delta` degrees.
    ///
    /// A delta of exactly [`QUARTER_TURN`] snaps the proposed angle down onto
    /// the highest checkpoint it reached (360, 270, 180, 90). Starting from
    /// any angle in `[0, 360)` that is the next axis-aligned angle above the
    /// current one, so repeated coarse presses cycle 90, 180, 270, 0.
    #[must_use]
    pub fn rotated(self, delta: i32) -> Self {
        // reduce first so any i32 delta is safe to add
        let mut proposed = i32::from(self.0) + delta.rem_euclid(FULL_TURN);
        if delta == QUARTER_TURN {
            proposed = snap_to_checkpoint(proposed);
        }
        Self::new(proposed)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}deg", self.0)
    }
}

fn snap_to_checkpoint(proposed: i32) -> i32 {
    CHECKPOINTS
        .into_iter()
        .find(|&checkpoint| proposed >= checkpoint)
        .unwrap_or(proposed)
}

/// Zoom factor, never below [`MIN_ZOOM`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f64);

impl ZoomFactor {
    pub const ONE: Self = Self(1.0);

    /// Clamp `factor` to at least `floor` (itself at least [`MIN_ZOOM`])
    pub fn new(factor: f64, floor: f64) -> Self {
        let floor = floor.max(MIN_ZOOM);
        if factor.is_nan() {
            return Self(floor);
        }
        Self(factor.max(floor))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// One wheel step in `direction`. There is no ceiling.
    #[must_use]
    pub fn stepped(self, direction: WheelDirection, step: f64, floor: f64) -> Self {
        match direction {
            WheelDirection::Up => Self::new(self.0 + step, floor),
            WheelDirection::Down => Self::new(self.0 - step, floor),
        }
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self::ONE
    }
}

/// The transform applied to the video, `rotate(d) scale(z)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTransform {
    pub rotation: Rotation,
    pub zoom: ZoomFactor,
}

impl RenderTransform {
    /// CSS `transform` value
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RenderTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotate({}) scale({})", self.rotation, self.zoom.value())
    }
}

/// Rotation and zoom state machine
#[derive(Debug, Clone)]
pub struct Transform {
    rotation: Rotation,
    zoom: ZoomFactor,
    zoom_step: f64,
    zoom_floor: f64,
}

impl Transform {
    /// A `zoom_step` that is not a positive finite number falls back to
    /// [`DEFAULT_ZOOM_STEP`]
    pub fn new(zoom_step: f64, zoom_floor: f64) -> Self {
        let zoom_step = if zoom_step.is_finite() && zoom_step > 0.0 {
            zoom_step
        } else {
            warn!("Ignoring invalid zoom step {}, using {}", zoom_step, DEFAULT_ZOOM_STEP);
            DEFAULT_ZOOM_STEP
        };
        Self {
            rotation: Rotation::ZERO,
            zoom: ZoomFactor::ONE,
            zoom_step,
            zoom_floor: zoom_floor.max(MIN_ZOOM),
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn zoom(&self) -> ZoomFactor {
        self.zoom
    }

    /// Derived from the current rotation and zoom on every call
    pub fn render(&self) -> RenderTransform {
        RenderTransform {
            rotation: self.rotation,
            zoom: self.zoom,
        }
    }

    /// Rotate by `delta` degrees; zoom is unchanged
    pub fn rotate(&mut self, delta: i32) -> Rotation {
        let next = self.rotation.rotated(delta);
        debug!(from = self.rotation.degrees(), delta, to = next.degrees(), "rotate");
        self.rotation = next;
        next
    }

    /// Apply one wheel step; rotation is unchanged
    pub fn zoom_by(&mut self, direction: WheelDirection) -> ZoomFactor {
        self.zoom = self.zoom.stepped(direction, self.zoom_step, self.zoom_floor);
        debug!(?direction, zoom = self.zoom.value(), "zoom");
        self.zoom
    }

    /// Back to unrotated and unscaled
    pub fn reset(&mut self) {
        self.rotation = Rotation::ZERO;
        self.zoom = ZoomFactor::ONE;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_STEP, MIN_ZOOM)
    }
}
