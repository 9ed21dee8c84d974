//! Shared Protocol Definitions for Rotaview
//!
//! Types exchanged between the webview front end and the Rust core:
//! user input, capture descriptors, view snapshots and event names.

mod error;
mod events;
mod input;
mod media;
mod session;

pub use error::*;
pub use events::*;
pub use input::*;
pub use media::*;
pub use session::*;

/// Height (logical pixels) of the strip at the top of the viewport that reveals the menu
pub const MENU_REVEAL_HEIGHT: f64 = 64.0;
