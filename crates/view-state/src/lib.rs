//! View State - the capture/transform state machine behind Rotaview
//!
//! A single [`Viewer`] owns all mutable view state and reacts to user
//! actions and capture notifications:
//! - [`Transform`]: rotation with the 90 degree snap policy, and zoom
//! - [`CaptureController`]: request/attach/teardown of the capture session
//! - [`WindowGeometry`]: host window auto-sizing and video placement
//!
//! The host window and the capture subsystem are reached only through
//! [`HostWindow`] and [`capture::DisplayCapture`].

mod config;
mod controller;
mod error;
mod geometry;
mod host;
mod notice;
mod session;
mod transform;
mod viewer;

#[cfg(test)]
mod testing;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use geometry::*;
pub use host::*;
pub use notice::*;
pub use session::*;
pub use transform::*;
pub use viewer::*;
