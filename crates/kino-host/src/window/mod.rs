//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, spawns the dedicated render
//! thread, and wires lifecycle and input events into the surface host.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
