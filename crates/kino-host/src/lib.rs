//! Kino host crate.
//!
//! This crate owns the surface + render-loop plumbing that sits between a
//! platform window and an external media engine. The engine itself (decode,
//! A/V sync, playlists) lives behind the [`engine::Engine`] boundary.

pub mod engine;
pub mod surface;
pub mod source;
pub mod input;
pub mod time;
pub mod window;

pub mod logging;
