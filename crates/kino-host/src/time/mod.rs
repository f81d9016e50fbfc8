//! Frame timing for the render thread.
//!
//! One [`FrameClock`] per render loop; call `tick()` once per frame and
//! `throttle_to()` to hold the loop at its target cadence.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
