//! Test doubles sharing one ordered call log

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use capture::{MediaStream, MediaTrack, StreamId, TrackId, TrackKind};
use parking_lot::Mutex;

use crate::{HostError, HostResult, HostWindow, WindowSize};

/// Observable side effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SetSize(u32, u32),
    AlwaysOnTop(bool),
    Terminate,
    StopTrack(String),
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub struct RecordingHost {
    pub log: CallLog,
    pub fail_resize: AtomicBool,
    pub fail_pin: AtomicBool,
    pub fail_terminate: AtomicBool,
}

impl RecordingHost {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: Arc::clone(log),
            fail_resize: AtomicBool::new(false),
            fail_pin: AtomicBool::new(false),
            fail_terminate: AtomicBool::new(false),
        }
    }
}

impl HostWindow for RecordingHost {
    fn set_size(&self, size: WindowSize) -> HostResult<()> {
        if self.fail_resize.load(Ordering::SeqCst) {
            return Err(HostError::Resize("window is gone".into()));
        }
        self.log
            .lock()
            .push(Call::SetSize(size.width.get(), size.height.get()));
        Ok(())
    }

    fn set_always_on_top(&self, enabled: bool) -> HostResult<()> {
        if self.fail_pin.load(Ordering::SeqCst) {
            return Err(HostError::AlwaysOnTop("not supported".into()));
        }
        self.log.lock().push(Call::AlwaysOnTop(enabled));
        Ok(())
    }

    fn terminate(&self) -> HostResult<()> {
        if self.fail_terminate.load(Ordering::SeqCst) {
            return Err(HostError::Terminate("busy".into()));
        }
        self.log.lock().push(Call::Terminate);
        Ok(())
    }
}

pub struct FakeTrack {
    id: TrackId,
    kind: TrackKind,
    live: bool,
    log: CallLog,
}

impl MediaTrack for FakeTrack {
    fn id(&self) -> &TrackId {
        &self.id
    }

    fn kind(&self) -> TrackKind {
        self.kind
    }

    fn stop(&mut self) {
        if self.live {
            self.live = false;
            self.log.lock().push(Call::StopTrack(self.id.to_string()));
        }
    }

    fn is_live(&self) -> bool {
        self.live
    }
}

/// A stream with the given tracks, all live
pub fn stream_with(id: &str, tracks: &[(&str, TrackKind)], log: &CallLog) -> MediaStream {
    let tracks = tracks
        .iter()
        .map(|&(track_id, kind)| -> Box<dyn MediaTrack> {
            Box::new(FakeTrack {
                id: TrackId::new(track_id),
                kind,
                live: true,
                log: Arc::clone(log),
            })
        })
        .collect();
    MediaStream::new(StreamId::new(id), tracks)
}

/// Stream `id` with video track `{id}-v` and audio track `{id}-a`
pub fn screen_stream(id: &str, log: &CallLog) -> MediaStream {
    let video = format!("{id}-v");
    let audio = format!("{id}-a");
    stream_with(
        id,
        &[(video.as_str(), TrackKind::Video), (audio.as_str(), TrackKind::Audio)],
        log,
    )
}

pub fn stops(log: &CallLog) -> Vec<String> {
    log.lock()
        .iter()
        .filter_map(|call| match call {
            Call::StopTrack(id) => Some(id.clone()),
            _ => None,
        })
        .collect()
}
