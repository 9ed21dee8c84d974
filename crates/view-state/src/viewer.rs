//! The view state aggregate and its action handlers

use capture::{CaptureResult, MediaStream, StreamId, TrackId};
use shared_protocol::{CaptureStatus, ViewSnapshot, WheelDirection};
use tracing::{debug, error, info, warn};

use crate::{
    Admission, CaptureController, CaptureTicket, HostWindow, Notice, Rotation, Transform,
    ViewerConfig, ViewerError, WindowGeometry, WindowSize, ZoomFactor,
};

/// How a capture response was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Attached(StreamId),
    Failed,
    Superseded,
}

/// All mutable view state, owned by the UI thread
///
/// Every handler converts its own failures into the single error notice;
/// none of them return errors to the caller.
pub struct Viewer<H> {
    host: H,
    config: ViewerConfig,
    transform: Transform,
    capture: CaptureController,
    geometry: WindowGeometry,
    edit_mode: bool,
    pinned: bool,
    menu_visible: bool,
    notice: Notice,
    revision: u64,
}

impl<H: HostWindow> Viewer<H> {
    pub fn new(host: H, config: ViewerConfig) -> Self {
        Self {
            host,
            transform: Transform::new(config.zoom_step, config.zoom_floor()),
            config,
            capture: CaptureController::new(),
            geometry: WindowGeometry::new(),
            edit_mode: false,
            pinned: false,
            menu_visible: true,
            notice: Notice::default(),
            revision: 0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn rotation(&self) -> Rotation {
        self.transform.rotation()
    }

    pub fn zoom(&self) -> ZoomFactor {
        self.transform.zoom()
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn pinned(&self) -> bool {
        self.pinned
    }

    pub fn menu_visible(&self) -> bool {
        self.menu_visible
    }

    pub fn message(&self) -> &str {
        self.notice.message()
    }

    pub fn capture_status(&self) -> CaptureStatus {
        self.capture.status()
    }

    pub fn active_stream(&self) -> Option<&StreamId> {
        self.capture.session().map(|s| s.stream_id())
    }

    pub fn rotate(&mut self, delta: i32) {
        self.transform.rotate(delta);
    }

    pub fn zoom_by(&mut self, direction: WheelDirection) {
        self.transform.zoom_by(direction);
    }

    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
        debug!("Edit mode {}", self.edit_mode);
    }

    /// Drag the video; only while in edit mode
    pub fn drag_video(&mut self, dx: f64, dy: f64) {
        if self.edit_mode {
            self.geometry.drag(dx, dy);
        }
    }

    /// Show the menu while the pointer is in the top strip of the viewport
    pub fn pointer_moved(&mut self, client_y: f64) {
        self.menu_visible = client_y < self.config.menu_reveal_height;
    }

    /// Flip always-on-top. `pinned` only changes once the host accepted it.
    pub fn toggle_pin(&mut self) {
        let next = !self.pinned;
        match self.host.set_always_on_top(next) {
            Ok(()) => {
                self.pinned = next;
                info!("Always on top {}", next);
            }
            Err(e) => self.fail(e.into()),
        }
    }

    /// `startCapture`, first half: hand out the ticket for a new request.
    /// Rotate and zoom keep working while the request is outstanding.
    pub fn begin_capture(&mut self) -> CaptureTicket {
        self.capture.begin()
    }

    /// `startCapture`, second half: apply the capture subsystem's answer.
    ///
    /// On success the previous session is torn down before the transform is
    /// reset and the new stream attached.
    pub fn finish_capture(
        &mut self,
        ticket: CaptureTicket,
        result: CaptureResult<Option<MediaStream>>,
    ) -> CaptureOutcome {
        match self.capture.admit(ticket, result) {
            Ok(Admission::Granted(session)) => {
                let stream = session.stream_id().clone();
                self.capture.teardown();
                self.transform.reset();
                self.capture.attach(session);
                CaptureOutcome::Attached(stream)
            }
            Ok(Admission::Superseded) => CaptureOutcome::Superseded,
            Err(e) => {
                self.fail(e);
                CaptureOutcome::Failed
            }
        }
    }

    /// The attached stream can play; `width`/`height` are its intrinsic size.
    ///
    /// Honoured once per attach and only for the current stream.
    pub fn on_capture_ready(&mut self, stream: &StreamId, width: u32, height: u32) {
        let rotation = self.transform.rotation();
        let Some(session) = self
            .capture
            .session_mut()
            .filter(|session| session.stream_id() == stream)
        else {
            warn!("Ignoring readiness of stream {} which is not attached", stream);
            return;
        };

        let Some(native) = WindowSize::new(width, height) else {
            warn!("Ignoring readiness of stream {} without dimensions", stream);
            return;
        };

        if !session.take_ready() {
            debug!("Stream {} already reported ready", stream);
            return;
        }

        if let Err(e) = self.geometry.on_capture_ready(rotation, native, &self.host) {
            self.fail(e);
        }
    }

    /// Track-ended notification from the capture subsystem
    pub fn on_track_ended(&mut self, track: &TrackId) {
        if self.capture.track_ended(track) {
            self.fail(ViewerError::StreamStopped);
        }
    }

    /// `stopCapture`; safe to call repeatedly
    pub fn stop_capture(&mut self) {
        self.capture.stop();
    }

    /// Stop capturing, then ask the host to exit
    pub fn close(&mut self) {
        self.stop_capture();
        match self.host.terminate() {
            Ok(()) => info!("Terminate requested"),
            Err(e) => self.fail(e.into()),
        }
    }

    pub fn dismiss_error(&mut self) {
        self.notice.dismiss();
    }

    /// Everything the webview renders
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            revision: self.revision,
            transform: self.transform.render().to_css(),
            rotation_degrees: self.transform.rotation().degrees(),
            zoom_factor: self.transform.zoom().value(),
            edit_mode: self.edit_mode,
            pinned: self.pinned,
            menu_visible: self.menu_visible,
            message: self.notice.message().to_string(),
            capture: self.capture.status(),
            stream_id: self.active_stream().map(|id| id.to_string()),
            video_offset: self.geometry.video_offset(),
        }
    }

    /// Compare against `before` and, if anything visible changed, stamp the
    /// next revision and return the snapshot to publish
    pub fn commit(&mut self, before: &ViewSnapshot) -> Option<ViewSnapshot> {
        let after = self.snapshot();
        if after == *before {
            return None;
        }
        self.revision += 1;
        Some(ViewSnapshot {
            revision: self.revision,
            ..after
        })
    }

    fn fail(&mut self, e: ViewerError) {
        error!("{}", e);
        self.notice.raise(e.to_string());
        self.edit_mode = false;
    }
}
