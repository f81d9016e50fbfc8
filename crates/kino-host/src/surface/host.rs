use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::engine::Engine;
use crate::input::{TouchEvent, TouchPhase};
use crate::source::{self, SourceReceiver, SourceSender};

use super::config::SurfaceConfig;
use super::driver::RenderDriver;

/// Flags shared between the UI-thread host and the render-thread driver.
///
/// All cross-thread state besides the pending source lives here, as plain
/// atomics. `destroyed` is set exactly once and never cleared.
#[derive(Debug, Default)]
pub(crate) struct Shared {
    pub(crate) paused: AtomicBool,
    pub(crate) surface_ready: AtomicBool,
    pub(crate) destroyed: AtomicBool,
}

impl Shared {
    pub(crate) fn destroyed(&self) -> bool {
        self.destroyed.load(Ordering::Acquire)
    }
}

/// UI-thread face of the surface.
///
/// Owns the graphics configuration, the pending-source channel, and the
/// lifecycle entry points. All actual drawing is delegated to the
/// [`RenderDriver`] obtained from [`renderer`](SurfaceHost::renderer), which
/// the platform invokes on its render thread.
///
/// Construction performs no engine calls; engine initialization is deferred
/// to the first surface-creation callback.
pub struct SurfaceHost<E: Engine> {
    engine: Arc<E>,
    config: SurfaceConfig,
    source_tx: SourceSender,
    source_rx: SourceReceiver,
    shared: Arc<Shared>,
}

impl<E: Engine> SurfaceHost<E> {
    pub fn new(engine: E, config: SurfaceConfig) -> Self {
        let (source_tx, source_rx) = source::slot();
        Self {
            engine: Arc::new(engine),
            config,
            source_tx,
            source_rx,
            shared: Arc::new(Shared::default()),
        }
    }

    /// Returns the configuration this surface was requested with.
    pub fn config(&self) -> SurfaceConfig {
        self.config
    }

    /// Builds the render-thread driver for this host.
    ///
    /// The driver holds back-references only; the host remains the owner of
    /// the surface lifecycle. Register exactly one driver per host.
    pub fn renderer(&self) -> RenderDriver<E> {
        RenderDriver::new(
            self.engine.clone(),
            self.source_rx.clone(),
            self.shared.clone(),
        )
    }

    /// Pauses the render loop, then pauses playback.
    ///
    /// The render-loop flag is a plain store; this never blocks waiting on
    /// the render thread.
    pub fn on_pause(&self) {
        if self.shared.destroyed() {
            return;
        }
        self.shared.paused.store(true, Ordering::Release);
        self.engine.pause();
    }

    /// Resumes the render loop, then resumes playback.
    pub fn on_resume(&self) {
        if self.shared.destroyed() {
            return;
        }
        self.shared.paused.store(false, Ordering::Release);
        self.engine.play();
    }

    /// Tears the engine down. Terminal: exactly one `destroy` command is
    /// ever issued, and every later call into this host or its driver
    /// becomes a no-op.
    pub fn on_destroy(&self) {
        if self.shared.destroyed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.engine.destroy();
    }

    /// Queues `path` as the media source.
    ///
    /// Before the surface exists this only updates the pending-source slot
    /// (last write wins); the load command itself is issued by the driver at
    /// surface creation. Once the surface is up, the load is additionally
    /// forwarded right away, so later calls switch the playing file.
    ///
    /// Non-blocking and callable from any thread.
    pub fn load_file(&self, path: &str) {
        if self.shared.destroyed() {
            return;
        }
        self.source_tx.send(path);
        if self.shared.surface_ready.load(Ordering::Acquire) {
            self.engine.command(&["loadfile", path]);
        }
    }

    /// Forwards a primary-pointer contact to the engine.
    ///
    /// Returns `true` when the event was consumed (down/move/up); any other
    /// phase returns `false` so the caller can fall back to the platform's
    /// default handling.
    pub fn handle_touch(&self, event: TouchEvent) -> bool {
        if self.shared.destroyed() {
            return false;
        }
        match event.phase {
            TouchPhase::Down => self.engine.touch_down(event.x, event.y),
            TouchPhase::Move => self.engine.touch_move(event.x, event.y),
            TouchPhase::Up => self.engine.touch_up(event.x, event.y),
            TouchPhase::Cancel => return false,
        }
        true
    }
}
