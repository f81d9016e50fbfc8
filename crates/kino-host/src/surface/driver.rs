use std::sync::Arc;
use std::sync::atomic::Ordering;

use crate::engine::Engine;
use crate::source::SourceReceiver;

use super::host::Shared;

/// Render-thread callback contract.
///
/// The platform invokes these on its dedicated render thread, in lifecycle
/// order: `on_surface_created`, then `on_surface_changed` with the initial
/// dimensions, then `on_draw_frame` once per render pass. Creation may recur
/// if the platform discards the graphics context across a suspend.
pub trait RenderCallbacks {
    /// A graphics context and surface exist; engine setup may proceed.
    fn on_surface_created(&mut self);

    /// The drawable's pixel dimensions changed (including the first time,
    /// immediately after creation).
    fn on_surface_changed(&mut self, width: i32, height: i32);

    /// One render pass. Must not block beyond the budget of a single frame.
    fn on_draw_frame(&mut self);
}

/// Maps the render-callback contract onto engine commands.
///
/// Holds back-references into its [`SurfaceHost`](super::SurfaceHost) only;
/// the host owns the lifecycle and outlives the rendering relationship.
pub struct RenderDriver<E: Engine> {
    engine: Arc<E>,
    source: SourceReceiver,
    shared: Arc<Shared>,
}

impl<E: Engine> RenderDriver<E> {
    pub(crate) fn new(engine: Arc<E>, source: SourceReceiver, shared: Arc<Shared>) -> Self {
        Self {
            engine,
            source,
            shared,
        }
    }

    /// Whether the host has flagged the render loop paused.
    pub fn paused(&self) -> bool {
        self.shared.paused.load(Ordering::Acquire)
    }

    /// Whether the host has been destroyed. No callback has any effect
    /// afterwards, and the driving loop should stop.
    pub fn destroyed(&self) -> bool {
        self.shared.destroyed()
    }
}

impl<E: Engine> RenderCallbacks for RenderDriver<E> {
    fn on_surface_created(&mut self) {
        if self.destroyed() {
            return;
        }

        // Full re-init on every creation: context preservation across pause
        // is only a hint, so recreation must be self-sufficient.
        self.engine.init();

        // Ready is published before the slot is read: a load racing this
        // callback then forwards itself, and the worst case is a duplicate
        // load with an identical payload. The other order can drop a load
        // that lands between the read and the store.
        self.shared.surface_ready.store(true, Ordering::Release);

        // Receive-or-default: an empty path is forwarded as-is and is the
        // engine's business to reject.
        let path = self.source.latest().unwrap_or_default();
        log::info!("surface created, loading {path:?}");
        self.engine.command(&["loadfile", &path]);
    }

    fn on_surface_changed(&mut self, width: i32, height: i32) {
        if self.destroyed() {
            return;
        }
        // Not deduplicated: a redundant resize is harmless and cheaper than
        // tracking the last dimensions here.
        log::debug!("surface changed to {width}x{height}");
        self.engine.resize(width, height);
    }

    fn on_draw_frame(&mut self) {
        if self.destroyed() {
            return;
        }
        self.engine.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineCommand;
    use crate::engine::testing::RecordingEngine;
    use crate::surface::{SurfaceConfig, SurfaceHost};

    fn driver() -> (RenderDriver<Arc<RecordingEngine>>, Arc<RecordingEngine>) {
        let engine = Arc::new(RecordingEngine::default());
        let host = SurfaceHost::new(engine.clone(), SurfaceConfig::default());
        (host.renderer(), engine)
    }

    #[test]
    fn creation_inits_then_loads() {
        let (mut driver, engine) = driver();
        driver.on_surface_created();
        assert_eq!(
            engine.taken(),
            vec![
                EngineCommand::Init,
                EngineCommand::Command(vec!["loadfile".into(), String::new()]),
            ]
        );
    }

    #[test]
    fn repeated_identical_resize_issues_identical_commands() {
        let (mut driver, engine) = driver();
        driver.on_surface_changed(1280, 720);
        driver.on_surface_changed(1280, 720);
        assert_eq!(
            engine.taken(),
            vec![
                EngineCommand::Resize { width: 1280, height: 720 },
                EngineCommand::Resize { width: 1280, height: 720 },
            ]
        );
    }

    #[test]
    fn draw_frame_issues_a_single_step() {
        let (mut driver, engine) = driver();
        driver.on_draw_frame();
        assert_eq!(engine.taken(), vec![EngineCommand::Step]);
    }

    #[test]
    fn full_lifecycle_command_order() {
        let engine = Arc::new(RecordingEngine::default());
        let host = SurfaceHost::new(engine.clone(), SurfaceConfig::default());
        let mut driver = host.renderer();

        host.load_file("/media/clip.mkv");
        driver.on_surface_created();
        driver.on_surface_changed(640, 480);
        driver.on_draw_frame();
        driver.on_draw_frame();
        host.on_pause();
        host.on_resume();
        host.on_destroy();

        assert_eq!(
            engine.taken(),
            vec![
                EngineCommand::Init,
                EngineCommand::Command(vec!["loadfile".into(), "/media/clip.mkv".into()]),
                EngineCommand::Resize { width: 640, height: 480 },
                EngineCommand::Step,
                EngineCommand::Step,
                EngineCommand::Pause,
                EngineCommand::Play,
                EngineCommand::Destroy,
            ]
        );
    }

    #[test]
    fn pause_flag_is_visible_to_the_driver() {
        let engine = Arc::new(RecordingEngine::default());
        let host = SurfaceHost::new(engine.clone(), SurfaceConfig::default());
        let driver = host.renderer();

        assert!(!driver.paused());
        host.on_pause();
        assert!(driver.paused());
        host.on_resume();
        assert!(!driver.paused());
    }
}
