//! Demo player binary.
//!
//! Stands in for a real integration: the engine here only logs the commands
//! it receives, routed through the single-consumer command queue so it sees
//! them exactly as a real decoder would — ordered, on one thread.
//!
//! Usage: `kino-player [path-to-media]`

use anyhow::Result;

use kino_host::engine::{Engine, queue};
use kino_host::logging::{LoggingConfig, init_logging};
use kino_host::surface::{SurfaceConfig, SurfaceHost};
use kino_host::window::{Runtime, RuntimeConfig};

/// Engine stand-in that logs every command.
struct LogEngine;

impl Engine for LogEngine {
    fn init(&self) {
        log::info!("engine: init");
    }

    fn play(&self) {
        log::info!("engine: play");
    }

    fn pause(&self) {
        log::info!("engine: pause");
    }

    fn resize(&self, width: i32, height: i32) {
        log::info!("engine: resize {width}x{height}");
    }

    fn step(&self) {
        log::trace!("engine: step");
    }

    fn touch_down(&self, x: i32, y: i32) {
        log::info!("engine: touch_down ({x}, {y})");
    }

    fn touch_move(&self, x: i32, y: i32) {
        log::debug!("engine: touch_move ({x}, {y})");
    }

    fn touch_up(&self, x: i32, y: i32) {
        log::info!("engine: touch_up ({x}, {y})");
    }

    fn command(&self, args: &[&str]) {
        log::info!("engine: command {args:?}");
    }

    fn destroy(&self) {
        log::info!("engine: destroy");
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let (engine, commands) = queue::queue();
    let consumer = std::thread::spawn(move || commands.run(&LogEngine));

    let host = SurfaceHost::new(engine, SurfaceConfig::default());
    if let Some(path) = std::env::args().nth(1) {
        host.load_file(&path);
    }

    let config = RuntimeConfig {
        title: "kino player".to_string(),
        ..Default::default()
    };
    Runtime::run(config, host)?;

    if consumer.join().is_err() {
        log::error!("engine command consumer panicked");
    }
    Ok(())
}
