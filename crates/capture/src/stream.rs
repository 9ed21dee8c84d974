//! Granted media streams

use std::fmt;

use tracing::debug;

use crate::{MediaTrack, TrackKind};

/// Identifier of a media track
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackId(String);

impl TrackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identifier of a media stream
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StreamId(String);

impl StreamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StreamId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A granted display stream and the tracks it owns
///
/// Dropping a stream stops every track that is still live, so a stream can
/// never outlive its handle as a running capture.
pub struct MediaStream {
    id: StreamId,
    tracks: Vec<Box<dyn MediaTrack>>,
}

impl MediaStream {
    pub fn new(id: StreamId, tracks: Vec<Box<dyn MediaTrack>>) -> Self {
        Self { id, tracks }
    }

    pub fn id(&self) -> &StreamId {
        &self.id
    }

    /// All tracks in the order the subsystem reported them
    pub fn tracks(&self) -> impl Iterator<Item = &dyn MediaTrack> {
        self.tracks.iter().map(|t| t.as_ref())
    }

    pub fn video_tracks(&self) -> impl Iterator<Item = &dyn MediaTrack> {
        self.tracks().filter(|t| t.kind() == TrackKind::Video)
    }

    /// The first video track; it carries the termination observer
    pub fn primary_video_track(&self) -> Option<&dyn MediaTrack> {
        self.video_tracks().next()
    }

    /// Stop every live track, returning how many were stopped
    pub fn stop_all(&mut self) -> usize {
        let mut stopped = 0;
        for track in self.tracks.iter_mut().filter(|t| t.is_live()) {
            debug!("Stopping {} track {}", track.kind(), track.id());
            track.stop();
            stopped += 1;
        }
        stopped
    }
}

impl fmt::Debug for MediaStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaStream")
            .field("id", &self.id)
            .field(
                "tracks",
                &self.tracks.iter().map(|t| t.id()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Drop for MediaStream {
    fn drop(&mut self) {
        self.stop_all();
    }
}
