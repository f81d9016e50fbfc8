//! Pending-source handoff between the UI thread and the render thread.
//!
//! A single-slot, last-write-wins channel: the UI thread publishes the media
//! path to load, the render thread reads the latest value at surface
//! creation. No history is kept; only the newest write matters.

mod slot;

pub use slot::{SourceReceiver, SourceSender, slot};
