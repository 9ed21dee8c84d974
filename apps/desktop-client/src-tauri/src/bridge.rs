//! Capture bridge to the webview
//!
//! `getDisplayMedia` only exists inside the webview, so a capture request is
//! an event out to the page and a `capture_response` command back. Tracks
//! stay in the page; stopping one here asks the page to stop it there.

use std::sync::atomic::{AtomicU64, Ordering};

use capture::{
    CaptureError, CaptureOptions, CaptureResult, DisplayCapture, MediaStream, MediaTrack,
    StreamId, TrackId, TrackKind,
};
use dashmap::DashMap;
use futures::FutureExt;
use futures::future::BoxFuture;
use serde::Serialize;
use shared_protocol::{
    CaptureResponse, EVENT_CAPTURE_REQUEST, EVENT_STOP_TRACK, StopTrack, TrackDescriptor,
};
use tauri::{AppHandle, Emitter};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

/// Payload of [`EVENT_CAPTURE_REQUEST`]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureRequest {
    pub request_id: u64,
    pub options: CaptureOptions,
}

/// Outstanding requests waiting for the page to answer
pub struct PendingRequests<T> {
    next_id: AtomicU64,
    waiting: DashMap<u64, oneshot::Sender<T>>,
}

impl<T> PendingRequests<T> {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            waiting: DashMap::new(),
        }
    }

    /// Allocate a request id and the receiver its answer arrives on
    pub fn register(&self) -> (u64, oneshot::Receiver<T>) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let (tx, rx) = oneshot::channel();
        self.waiting.insert(id, tx);
        (id, rx)
    }

    /// Deliver the answer for `id`; `false` if nobody is waiting for it
    pub fn resolve(&self, id: u64, value: T) -> bool {
        match self.waiting.remove(&id) {
            Some((_, tx)) => tx.send(value).is_ok(),
            None => false,
        }
    }

    pub fn cancel(&self, id: u64) {
        self.waiting.remove(&id);
    }
}

impl<T> Default for PendingRequests<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A track held by the page
pub struct WebviewTrack {
    id: TrackId,
    kind: TrackKind,
    live: bool,
    app: AppHandle,
}

impl MediaTrack for WebviewTrack {
    fn id(&self) -> &TrackId {
        &self.id
    }

    fn kind(&self) -> TrackKind {
        self.kind
    }

    fn stop(&mut self) {
        if !self.live {
            return;
        }
        self.live = false;
        let payload = StopTrack {
            track_id: self.id.to_string(),
        };
        if let Err(e) = self.app.emit(EVENT_STOP_TRACK, payload) {
            warn!("Failed to ask the page to stop track {}: {}", self.id, e);
        }
    }

    fn is_live(&self) -> bool {
        self.live
    }
}

/// Turn the page's answer into a stream, building each track with `track`
pub fn stream_from_response<F>(
    response: CaptureResponse,
    mut track: F,
) -> CaptureResult<Option<MediaStream>>
where
    F: FnMut(TrackDescriptor) -> Box<dyn MediaTrack>,
{
    match response {
        CaptureResponse::Granted { stream } => {
            if stream.tracks.is_empty() {
                return Err(CaptureError::InvalidStream(format!(
                    "stream {} has no tracks",
                    stream.id
                )));
            }
            for t in &stream.tracks {
                debug!("Granted {} track {} ({})", t.kind, t.id, t.label);
            }
            let tracks = stream.tracks.into_iter().map(&mut track).collect();
            Ok(Some(MediaStream::new(StreamId::new(stream.id), tracks)))
        }
        CaptureResponse::Denied { name, message } => {
            Err(CaptureError::from_dom_exception(&name, message))
        }
        CaptureResponse::Empty => Ok(None),
    }
}

/// [`DisplayCapture`] implemented by the page's `getDisplayMedia`
pub struct WebviewCapture {
    app: AppHandle,
    pending: PendingRequests<CaptureResponse>,
}

impl WebviewCapture {
    pub fn new(app: AppHandle) -> Self {
        Self {
            app,
            pending: PendingRequests::new(),
        }
    }

    /// Route the page's answer to the waiting request
    pub fn respond(&self, request_id: u64, response: CaptureResponse) -> bool {
        self.pending.resolve(request_id, response)
    }

    async fn request_inner(&self, options: CaptureOptions) -> CaptureResult<Option<MediaStream>> {
        let (request_id, answer) = self.pending.register();
        let request = CaptureRequest {
            request_id,
            options,
        };

        if let Err(e) = self.app.emit(EVENT_CAPTURE_REQUEST, request) {
            self.pending.cancel(request_id);
            return Err(CaptureError::Platform(e.to_string()));
        }
        info!("Capture request {} sent to the page", request_id);

        let response = answer.await.map_err(|_| CaptureError::Cancelled)?;
        stream_from_response(response, |descriptor| -> Box<dyn MediaTrack> {
            Box::new(WebviewTrack {
                id: TrackId::new(descriptor.id),
                kind: descriptor.kind,
                live: true,
                app: self.app.clone(),
            })
        })
    }
}

impl DisplayCapture for WebviewCapture {
    fn request(&self, options: CaptureOptions) -> BoxFuture<'_, CaptureResult<Option<MediaStream>>> {
        self.request_inner(options).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_protocol::StreamDescriptor;

    struct InertTrack {
        id: TrackId,
        kind: TrackKind,
    }

    impl MediaTrack for InertTrack {
        fn id(&self) -> &TrackId {
            &self.id
        }

        fn kind(&self) -> TrackKind {
            self.kind
        }

        fn stop(&mut self) {}

        fn is_live(&self) -> bool {
            false
        }
    }

    fn inert(descriptor: TrackDescriptor) -> Box<dyn MediaTrack> {
        Box::new(InertTrack {
            id: TrackId::new(descriptor.id),
            kind: descriptor.kind,
        })
    }

    fn descriptor(id: &str, kind: TrackKind) -> TrackDescriptor {
        TrackDescriptor {
            id: id.to_string(),
            kind,
            label: String::new(),
        }
    }

    #[tokio::test]
    async fn resolved_request_reaches_waiter() {
        let pending = PendingRequests::<u32>::new();
        let (id, rx) = pending.register();

        assert!(pending.resolve(id, 7));
        assert_eq!(rx.await.unwrap(), 7);
        assert!(!pending.resolve(id, 8));
    }

    #[tokio::test]
    async fn unknown_or_repeated_answers_are_rejected() {
        let pending = PendingRequests::<u32>::new();
        let (id, _rx) = pending.register();

        assert!(!pending.resolve(id + 100, 1));
        assert!(pending.resolve(id, 1));
        assert!(!pending.resolve(id, 2));
    }

    #[tokio::test]
    async fn cancelled_request_closes_receiver() {
        let pending = PendingRequests::<u32>::new();
        let (id, rx) = pending.register();
        pending.cancel(id);
        assert!(rx.await.is_err());
    }

    #[test]
    fn request_ids_are_unique() {
        let pending = PendingRequests::<()>::new();
        let (a, _ra) = pending.register();
        let (b, _rb) = pending.register();
        assert_ne!(a, b);
    }

    #[test]
    fn granted_response_builds_stream() {
        let response = CaptureResponse::Granted {
            stream: StreamDescriptor {
                id: "s-1".into(),
                tracks: vec![
                    descriptor("v-1", TrackKind::Video),
                    descriptor("a-1", TrackKind::Audio),
                ],
            },
        };

        let stream = stream_from_response(response, inert).unwrap().unwrap();
        assert_eq!(stream.id().as_str(), "s-1");
        assert_eq!(stream.primary_video_track().unwrap().id().as_str(), "v-1");
    }

    #[test]
    fn denied_response_maps_dom_exception() {
        let response = CaptureResponse::Denied {
            name: "NotAllowedError".into(),
            message: "Permission denied".into(),
        };
        assert!(matches!(
            stream_from_response(response, inert),
            Err(CaptureError::PermissionDenied(_))
        ));
    }

    #[test]
    fn empty_response_is_no_stream() {
        assert!(matches!(
            stream_from_response(CaptureResponse::Empty, inert),
            Ok(None)
        ));
    }

    #[test]
    fn granted_stream_without_tracks_is_invalid() {
        let response = CaptureResponse::Granted {
            stream: StreamDescriptor {
                id: "s-0".into(),
                tracks: vec![],
            },
        };
        assert!(matches!(
            stream_from_response(response, inert),
            Err(CaptureError::InvalidStream(_))
        ));
    }
}
