//! Boundary to the live video session.
//!
//! The session runs its own capture loop somewhere else. The driver only hands it two actions to
//! run around stream start and receives frames and errors back through handlers, which may be
//! called from the session's own thread at any time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, error, warn};

use super::control::ModeController;
use crate::{
    proto::PrimaryMode,
    util::chan::{unbounded, Rx, Tx},
};

pub type Action = Box<dyn Fn() + Send + Sync + 'static>;
pub type FrameHandler<F> = Box<dyn Fn(F) + Send + Sync + 'static>;
pub type ErrorHandler = Box<dyn Fn(String) + Send + Sync + 'static>;

pub trait StreamSession {
    type Frame: Send + 'static;

    fn set_pre_capture(&mut self, action: Action);

    fn set_post_capture(&mut self, action: Action);

    fn register_frame_handler(&mut self, hdl: FrameHandler<Self::Frame>);

    fn register_error_handler(&mut self, hdl: ErrorHandler);

    fn start(&mut self);

    fn set_paused(&mut self, paused: bool);
}

pub fn attach<S: StreamSession>(session: &mut S, control: Arc<ModeController>) {
    let pre = control.clone();
    session.set_pre_capture(Box::new(move || pre.set_mode(PrimaryMode::Video)));

    let post = control;
    session.set_post_capture(Box::new(move || {
        if !post.stream_start() {
            warn!("stream start command failed");
        }
    }));
}

pub struct StreamEvents<F> {
    pub frames: Rx<F>,
    pub errors: Rx<String>,
}

/// They never block, so a consumer draining [`StreamEvents`] may freely call back into the
/// control path without deadlocking the session thread.
pub fn channel_handlers<F: Send + 'static>() -> (FrameHandler<F>, ErrorHandler, StreamEvents<F>) {
    let (frame_tx, frames) = unbounded();
    let (err_tx, errors) = unbounded();

    let frame_sink = Sink::new(frame_tx, "frame");
    let on_frame: FrameHandler<F> = Box::new(move |frame| {
        frame_sink.push(frame);
    });

    let err_sink = Sink::new(err_tx, "error");
    let on_error: ErrorHandler = Box::new(move |msg| {
        error!("stream: {}", msg);
        err_sink.push(msg);
    });

    (on_frame, on_error, StreamEvents { frames, errors })
}

struct Sink<T> {
    tx: Tx<T>,
    kind: &'static str,
    gone: AtomicBool,
}

impl<T> Sink<T> {
    fn new(tx: Tx<T>, kind: &'static str) -> Self {
        Sink {
            tx,
            kind,
            gone: AtomicBool::new(false),
        }
    }

    fn push(&self, v: T) -> bool {
        if self.tx.send(v).is_ok() {
            return true;
        }

        if !self.gone.swap(true, Ordering::Relaxed) {
            debug!(kind = self.kind, "stream consumer gone, dropping events");
        }

        false
    }
}

pub struct StreamToggle<S: StreamSession> {
    session: S,
    control: Arc<ModeController>,
    started: bool,
}

impl<S: StreamSession> StreamToggle<S> {
    pub fn new(session: S, control: Arc<ModeController>) -> Self {
        StreamToggle {
            session,
            control,
            started: false,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn toggle(&mut self, on: bool) {
        if on {
            self.control.set_mode(PrimaryMode::Video);
            if !self.started {
                self.started = true;
                self.session.start();
            }
        }

        self.session.set_paused(!on);
    }
}
