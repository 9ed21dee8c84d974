//! Application state management

use capture::CaptureOptions;
use parking_lot::Mutex;
use shared_protocol::{EVENT_VIEW_CHANGED, ViewSnapshot};
use tauri::{AppHandle, Emitter, WebviewWindow};
use tracing::warn;
use view_state::Viewer;

use crate::bridge::WebviewCapture;
use crate::config::AppConfig;
use crate::host::TauriWindow;

/// Application-wide state
pub struct AppState {
    app: AppHandle,
    /// The view state machine; never held across an await
    pub viewer: Mutex<Viewer<TauriWindow>>,
    /// Capture subsystem reached through the page
    pub capture: WebviewCapture,
    /// Forwarded with every capture request
    pub capture_options: CaptureOptions,
}

impl AppState {
    pub fn new(app: AppHandle, window: WebviewWindow, config: &AppConfig) -> Self {
        Self {
            viewer: Mutex::new(Viewer::new(TauriWindow::new(window), config.viewer.clone())),
            capture: WebviewCapture::new(app.clone()),
            capture_options: config.capture.clone(),
            app,
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.viewer.lock().snapshot()
    }

    /// Run `action` against the viewer and push the new snapshot to the page
    /// if anything visible changed.
    ///
    /// The push happens before the lock is released, so snapshots reach the
    /// page in revision order even when a capture finishes on a worker thread.
    pub fn update<F>(&self, action: F) -> ViewSnapshot
    where
        F: FnOnce(&mut Viewer<TauriWindow>),
    {
        self.apply(action).1
    }

    /// Like [`AppState::update`], also returning what `action` returned
    pub fn apply<R, F>(&self, action: F) -> (R, ViewSnapshot)
    where
        F: FnOnce(&mut Viewer<TauriWindow>) -> R,
    {
        let mut viewer = self.viewer.lock();
        let before = viewer.snapshot();
        let output = action(&mut viewer);
        match viewer.commit(&before) {
            Some(after) => {
                self.publish(&after);
                (output, after)
            }
            None => (output, before),
        }
    }

    fn publish(&self, snapshot: &ViewSnapshot) {
        if let Err(e) = self.app.emit(EVENT_VIEW_CHANGED, snapshot) {
            warn!("Failed to publish view snapshot: {}", e);
        }
    }
}
