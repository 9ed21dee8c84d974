//! Display Capture - the capture capability seam for Rotaview
//!
//! The capture subsystem is an external collaborator: it is asked for a
//! display/window/tab stream and either grants one or fails. This crate
//! defines that contract:
//! - [`CaptureOptions`]: pass-through request configuration
//! - [`MediaStream`] / [`MediaTrack`]: a granted stream and its tracks
//! - [`DisplayCapture`]: the async request itself

mod error;
mod options;
mod stream;
mod traits;

pub use error::*;
pub use options::*;
pub use stream::*;
pub use traits::*;

pub use shared_protocol::TrackKind;
