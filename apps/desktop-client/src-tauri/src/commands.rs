//! Tauri command handlers

use std::sync::Arc;

use capture::{DisplayCapture, StreamId, TrackId};
use shared_protocol::{
    CaptureResponse, PointerMove, ProtocolError, RotateStep, ViewSnapshot, WheelDirection,
};
use tauri::State;
use tracing::{debug, info, warn};

use crate::state::AppState;

/// Error type for commands
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error("No capture request {0} is waiting for an answer")]
    UnknownRequest(u64),
}

impl serde::Serialize for CommandError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

type CommandResult<T> = Result<T, CommandError>;

/// Current view, for the page's first render
#[tauri::command]
pub fn get_view(state: State<'_, Arc<AppState>>) -> ViewSnapshot {
    state.snapshot()
}

/// Rotate by one of the menu's steps (90, 30, 10 or 5 degrees)
#[tauri::command]
pub fn rotate(state: State<'_, Arc<AppState>>, degrees: i32) -> CommandResult<ViewSnapshot> {
    let step = RotateStep::try_from(degrees)?;
    Ok(state.update(|viewer| viewer.rotate(step.degrees())))
}

/// Wheel over the video surface
#[tauri::command]
pub fn zoom(state: State<'_, Arc<AppState>>, delta_y: f64) -> ViewSnapshot {
    let direction = WheelDirection::from_delta_y(delta_y);
    state.update(|viewer| viewer.zoom_by(direction))
}

/// Pointer movement anywhere in the window
#[tauri::command]
pub fn pointer_move(state: State<'_, Arc<AppState>>, event: PointerMove) -> ViewSnapshot {
    state.update(|viewer| {
        viewer.pointer_moved(event.client_y);
        if event.buttons_pressed {
            viewer.drag_video(event.movement_x, event.movement_y);
        }
    })
}

#[tauri::command]
pub fn toggle_edit_mode(state: State<'_, Arc<AppState>>) -> ViewSnapshot {
    state.update(|viewer| viewer.toggle_edit_mode())
}

#[tauri::command]
pub fn toggle_pin(state: State<'_, Arc<AppState>>) -> ViewSnapshot {
    state.update(|viewer| viewer.toggle_pin())
}

#[tauri::command]
pub fn dismiss_error(state: State<'_, Arc<AppState>>) -> ViewSnapshot {
    state.update(|viewer| viewer.dismiss_error())
}

/// Ask the user for a screen, window or tab and attach it.
///
/// The viewer stays usable while the picker is open.
#[tauri::command]
pub async fn start_capture(state: State<'_, Arc<AppState>>) -> CommandResult<ViewSnapshot> {
    let state = Arc::clone(&state);

    let (ticket, _) = state.apply(|viewer| viewer.begin_capture());

    let result = state.capture.request(state.capture_options.clone()).await;

    let snapshot = state.update(|viewer| {
        let outcome = viewer.finish_capture(ticket, result);
        info!("Capture request {} finished: {:?}", ticket.generation(), outcome);
    });
    Ok(snapshot)
}

/// The page's answer to a capture request
#[tauri::command]
pub fn capture_response(
    state: State<'_, Arc<AppState>>,
    request_id: u64,
    response: CaptureResponse,
) -> CommandResult<()> {
    debug!("Capture response for request {}", request_id);
    if state.capture.respond(request_id, response) {
        Ok(())
    } else {
        warn!("Capture response for unknown request {}", request_id);
        Err(CommandError::UnknownRequest(request_id))
    }
}

/// The video element can play the attached stream (`canplay`)
#[tauri::command]
pub fn capture_ready(
    state: State<'_, Arc<AppState>>,
    stream_id: String,
    width: u32,
    height: u32,
) -> ViewSnapshot {
    let stream = StreamId::new(stream_id);
    state.update(|viewer| viewer.on_capture_ready(&stream, width, height))
}

/// A track ended outside the app, e.g. sharing revoked from the OS
#[tauri::command]
pub fn track_ended(state: State<'_, Arc<AppState>>, track_id: String) -> ViewSnapshot {
    let track = TrackId::new(track_id);
    state.update(|viewer| viewer.on_track_ended(&track))
}

#[tauri::command]
pub fn stop_capture(state: State<'_, Arc<AppState>>) -> ViewSnapshot {
    state.update(|viewer| viewer.stop_capture())
}

/// Stop capturing and exit
#[tauri::command]
pub fn close_app(state: State<'_, Arc<AppState>>) -> ViewSnapshot {
    state.update(|viewer| viewer.close())
}
