//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code translates platform events into [`TouchEvent`]s via
//! `platform::winit`.

pub mod platform;
mod types;

pub use types::{TouchEvent, TouchPhase};
