//! Capture lifecycle: `Idle -> Requesting -> Active -> (Idle | Error)`

use capture::{CaptureResult, MediaStream, TrackId};
use shared_protocol::CaptureStatus;
use tracing::{info, warn};

use crate::{CaptureSession, ViewerError, ViewerResult};

/// Proof of a started capture request
///
/// Only the ticket of the most recent request can complete it; results
/// carrying an older ticket are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureTicket {
    generation: u64,
}

impl CaptureTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of admitting a capture response
#[derive(Debug)]
pub enum Admission {
    /// Ready to be attached
    Granted(CaptureSession),
    /// A newer request was started; the response was released
    Superseded,
}

/// Owns the capture session and its lifecycle state
#[derive(Debug, Default)]
pub struct CaptureController {
    status: CaptureStatus,
    generation: u64,
    session: Option<CaptureSession>,
}

impl CaptureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> CaptureStatus {
        self.status
    }

    pub fn session(&self) -> Option<&CaptureSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut CaptureSession> {
        self.session.as_mut()
    }

    /// Start a request; any earlier outstanding request becomes stale
    pub fn begin(&mut self) -> CaptureTicket {
        self.generation += 1;
        self.status = CaptureStatus::Requesting;
        info!("Capture requested (generation {})", self.generation);
        CaptureTicket {
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: CaptureTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Validate the capture subsystem's answer to `ticket`.
    ///
    /// Failures move the controller to `Error` and leave any existing
    /// session running.
    pub fn admit(
        &mut self,
        ticket: CaptureTicket,
        result: CaptureResult<Option<MediaStream>>,
    ) -> ViewerResult<Admission> {
        if !self.is_current(ticket) {
            warn!(
                "Discarding capture result for generation {} (current {})",
                ticket.generation, self.generation
            );
            if let Ok(Some(mut stream)) = result {
                stream.stop_all();
            }
            return Ok(Admission::Superseded);
        }

        let admitted = match result {
            Ok(Some(stream)) => CaptureSession::new(stream),
            Ok(None) => Err(ViewerError::NoStream),
            Err(e) => Err(e.into()),
        };

        match admitted {
            Ok(session) => Ok(Admission::Granted(session)),
            Err(e) => {
                self.status = CaptureStatus::Error;
                Err(e)
            }
        }
    }

    /// Stop the current session's tracks and clear the handle.
    /// The lifecycle state is left as is.
    pub fn teardown(&mut self) -> Option<usize> {
        self.session.take().map(CaptureSession::release)
    }

    /// Make `session` the active session, releasing any previous one first
    pub fn attach(&mut self, session: CaptureSession) {
        self.teardown();
        info!("Capture attached: stream {}", session.stream_id());
        self.session = Some(session);
        self.status = CaptureStatus::Active;
    }

    /// `stopCapture`: no-op without a session, otherwise release it and go idle
    pub fn stop(&mut self) -> bool {
        if self.teardown().is_none() {
            return false;
        }
        self.status = CaptureStatus::Idle;
        true
    }

    /// Termination observer for the watched track.
    ///
    /// Returns `true` if the active session ended; it fires at most once
    /// per session since the session is cleared.
    pub fn track_ended(&mut self, track: &TrackId) -> bool {
        let watched = self
            .session
            .as_ref()
            .is_some_and(|session| session.watches(track));
        if !watched {
            warn!("Ignoring end of unobserved track {}", track);
            return false;
        }

        info!("Capture track {} ended externally", track);
        self.teardown();
        self.status = CaptureStatus::Error;
        true
    }
}
