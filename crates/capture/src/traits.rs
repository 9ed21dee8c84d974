//! Display capture trait abstraction

use futures::future::BoxFuture;

use crate::{CaptureOptions, CaptureResult, MediaStream, TrackId, TrackKind};

/// One track of a granted stream
pub trait MediaTrack: Send {
    /// Track identifier, unique for the lifetime of the application
    fn id(&self) -> &TrackId;

    /// Video or audio
    fn kind(&self) -> TrackKind;

    /// Stop delivering media. Stopping an already stopped track does nothing.
    fn stop(&mut self);

    /// Whether the track is still delivering media
    fn is_live(&self) -> bool;
}

/// The capture subsystem
///
/// A request may wait on user consent for an unbounded amount of time.
/// It resolves to a stream, to `None` when the subsystem returned nothing,
/// or to an error when the request was rejected.
pub trait DisplayCapture: Send + Sync {
    fn request(&self, options: CaptureOptions) -> BoxFuture<'_, CaptureResult<Option<MediaStream>>>;
}
