//! The media-engine command boundary.
//!
//! Everything the host knows about the engine is this trait: a set of one-way
//! commands with no return values. Playback errors are the engine's problem
//! to surface through its own channel; the host fires and forgets.
//!
//! Implementations must tolerate calls from both the UI/event thread and the
//! render thread. If a real engine's threading contract is unknown, wrap it
//! with [`queue::queue`], which serializes every command through an ordered
//! single-consumer queue.

mod command;
pub mod queue;

pub use command::EngineCommand;

/// One-way command surface of the external media engine.
///
/// `init` is issued on the render thread at surface creation, `step` once per
/// draw callback, `resize` on every surface dimension change. Lifecycle and
/// touch commands arrive from the UI/event thread. After `destroy`, no
/// further calls are made.
pub trait Engine: Send + Sync {
    /// Initializes the engine against the active graphics context.
    fn init(&self);

    /// Resumes playback.
    fn play(&self);

    /// Pauses playback.
    fn pause(&self);

    /// Informs the engine of the drawable size in physical pixels.
    fn resize(&self, width: i32, height: i32);

    /// Renders the current frame into the active graphics context.
    fn step(&self);

    fn touch_down(&self, x: i32, y: i32);
    fn touch_move(&self, x: i32, y: i32);
    fn touch_up(&self, x: i32, y: i32);

    /// Issues an arbitrary string-array command (e.g. `["loadfile", path]`).
    fn command(&self, args: &[&str]);

    /// Releases all engine-owned resources. Terminal.
    fn destroy(&self);
}

impl<E: Engine + ?Sized> Engine for std::sync::Arc<E> {
    fn init(&self) {
        (**self).init();
    }

    fn play(&self) {
        (**self).play();
    }

    fn pause(&self) {
        (**self).pause();
    }

    fn resize(&self, width: i32, height: i32) {
        (**self).resize(width, height);
    }

    fn step(&self) {
        (**self).step();
    }

    fn touch_down(&self, x: i32, y: i32) {
        (**self).touch_down(x, y);
    }

    fn touch_move(&self, x: i32, y: i32) {
        (**self).touch_move(x, y);
    }

    fn touch_up(&self, x: i32, y: i32) {
        (**self).touch_up(x, y);
    }

    fn command(&self, args: &[&str]) {
        (**self).command(args);
    }

    fn destroy(&self) {
        (**self).destroy();
    }
}
