//! The active capture session

use capture::{MediaStream, StreamId, TrackId};
use tracing::info;

use crate::{ViewerError, ViewerResult};

/// The one live capture: a granted stream plus its observers
///
/// The stream's tracks are stopped when the session is released or
/// dropped, whichever comes first.
#[derive(Debug)]
pub struct CaptureSession {
    stream: MediaStream,
    /// Primary video track whose end terminates the session
    watched: TrackId,
    ready_reported: bool,
}

impl CaptureSession {
    /// Take ownership of a granted stream and watch its primary video track.
    ///
    /// A stream without a video track is rejected; it is dropped, which
    /// stops whatever tracks it had.
    pub fn new(stream: MediaStream) -> ViewerResult<Self> {
        let watched = stream
            .primary_video_track()
            .map(|track| track.id().clone())
            .ok_or(ViewerError::NoVideoTrack)?;

        Ok(Self {
            stream,
            watched,
            ready_reported: false,
        })
    }

    pub fn stream_id(&self) -> &StreamId {
        self.stream.id()
    }

    /// Whether `track` is the observed primary video track
    pub fn watches(&self, track: &TrackId) -> bool {
        self.watched == *track
    }

    /// Consume the once-per-attach readiness signal.
    ///
    /// Returns `false` if it was already consumed.
    pub fn take_ready(&mut self) -> bool {
        !std::mem::replace(&mut self.ready_reported, true)
    }

    /// Stop every track and drop the handle
    pub fn release(mut self) -> usize {
        let stopped = self.stream.stop_all();
        info!("Released capture session {} ({} tracks stopped)", self.stream.id(), stopped);
        stopped
    }
}
