//! User input definitions for rotation, zoom and pointer handling

use serde::{Deserialize, Serialize};

use crate::{ProtocolError, ProtocolResult};

/// Rotation actions offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum RotateStep {
    /// Coarse rotation; always lands on an axis-aligned orientation
    Quarter,
    Thirty,
    Ten,
    Five,
}

impl RotateStep {
    /// All steps in menu order
    pub const ALL: [RotateStep; 4] = [Self::Quarter, Self::Thirty, Self::Ten, Self::Five];

    /// Rotation delta in degrees
    pub fn degrees(self) -> i32 {
        match self {
            RotateStep::Quarter => 90,
            RotateStep::Thirty => 30,
            RotateStep::Ten => 10,
            RotateStep::Five => 5,
        }
    }
}

impl TryFrom<i32> for RotateStep {
    type Error = ProtocolError;

    fn try_from(degrees: i32) -> ProtocolResult<Self> {
        Self::ALL
            .into_iter()
            .find(|step| step.degrees() == degrees)
            .ok_or(ProtocolError::UnsupportedRotateStep(degrees))
    }
}

impl From<RotateStep> for i32 {
    fn from(step: RotateStep) -> Self {
        step.degrees()
    }
}

/// Direction of a wheel event over the video surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WheelDirection {
    /// Wheel moved away from the user (zoom in)
    Up,
    /// Wheel moved toward the user, or no vertical movement (zoom out)
    Down,
}

impl WheelDirection {
    /// Classify a DOM `WheelEvent.deltaY`
    pub fn from_delta_y(delta_y: f64) -> Self {
        if delta_y < 0.0 {
            WheelDirection::Up
        } else {
            WheelDirection::Down
        }
    }
}

/// Pointer movement reported by the webview
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerMove {
    /// Viewport-relative Y coordinate (`clientY`)
    pub client_y: f64,
    /// Horizontal movement since the last event (`movementX`)
    pub movement_x: f64,
    /// Vertical movement since the last event (`movementY`)
    pub movement_y: f64,
    /// Whether any pointer button is held
    pub buttons_pressed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_step_from_degrees() {
        assert_eq!(RotateStep::try_from(90), Ok(RotateStep::Quarter));
        assert_eq!(RotateStep::try_from(5), Ok(RotateStep::Five));
        assert_eq!(
            RotateStep::try_from(45),
            Err(ProtocolError::UnsupportedRotateStep(45))
        );
    }

    #[test]
    fn rotate_step_deserializes_from_number() {
        let step: RotateStep = serde_json::from_str("30").unwrap();
        assert_eq!(step, RotateStep::Thirty);
        assert!(serde_json::from_str::<RotateStep>("7").is_err());
    }

    #[test]
    fn wheel_direction_follows_delta_sign() {
        assert_eq!(WheelDirection::from_delta_y(-120.0), WheelDirection::Up);
        assert_eq!(WheelDirection::from_delta_y(120.0), WheelDirection::Down);
        assert_eq!(WheelDirection::from_delta_y(0.0), WheelDirection::Down);
    }
}
