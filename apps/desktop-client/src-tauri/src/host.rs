//! Host window commands backed by the Tauri main window

use tauri::{Manager, PhysicalSize, WebviewWindow};
use tracing::debug;
use view_state::{HostError, HostResult, HostWindow, WindowSize};

/// Label of the borderless viewer window in `tauri.conf.json`
pub const MAIN_WINDOW: &str = "main";

pub struct TauriWindow {
    window: WebviewWindow,
}

impl TauriWindow {
    pub fn new(window: WebviewWindow) -> Self {
        Self { window }
    }
}

impl HostWindow for TauriWindow {
    fn set_size(&self, size: WindowSize) -> HostResult<()> {
        debug!("SetWindowSize {}", size);
        self.window
            .set_size(PhysicalSize::new(size.width.get(), size.height.get()))
            .map_err(|e| HostError::Resize(e.to_string()))
    }

    fn set_always_on_top(&self, enabled: bool) -> HostResult<()> {
        debug!("SetAlwaysOnTop {}", enabled);
        self.window
            .set_always_on_top(enabled)
            .map_err(|e| HostError::AlwaysOnTop(e.to_string()))
    }

    fn terminate(&self) -> HostResult<()> {
        debug!("Terminate");
        self.window.app_handle().exit(0);
        Ok(())
    }
}
