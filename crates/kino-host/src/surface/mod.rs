//! Surface host + render-loop driver.
//!
//! This module is responsible for:
//! - owning the graphics-context configuration requested for the surface
//! - exposing the UI-thread lifecycle entry points (pause/resume/destroy,
//!   load, touch)
//! - implementing the render-thread callback contract and mapping it onto
//!   engine commands

mod config;
mod driver;
mod host;

pub use config::SurfaceConfig;
pub use driver::{RenderCallbacks, RenderDriver};
pub use host::SurfaceHost;
