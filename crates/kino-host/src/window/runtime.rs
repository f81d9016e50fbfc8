use anyhow::{Context, Result};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError, channel};
use std::thread::JoinHandle;
use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::engine::Engine;
use crate::input::platform::winit::{PointerState, translate_window_event};
use crate::surface::{RenderCallbacks, RenderDriver, SurfaceHost};
use crate::time::FrameClock;

/// How long the render thread parks between control-message polls while the
/// loop is paused.
const PAUSE_POLL: Duration = Duration::from_millis(50);

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,

    /// Target time per frame on the render thread.
    pub frame_budget: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "kino".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            frame_budget: Duration::from_micros(16_667), // ~60 Hz
        }
    }
}

/// Entry point for the runtime.
///
/// Owns the UI/event thread (winit's loop) and the dedicated render thread.
/// The host's render driver runs exclusively on the latter; the host's
/// lifecycle and touch methods are called exclusively from the former.
pub struct Runtime;

impl Runtime {
    /// Runs the event loop until the window closes.
    ///
    /// On close, the render thread is stopped and joined *before*
    /// `on_destroy` is issued, so no draw callback is in flight when the
    /// engine releases its resources.
    pub fn run<E>(config: RuntimeConfig, host: SurfaceHost<E>) -> Result<()>
    where
        E: Engine + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = HostState::new(config, host);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

enum RenderMsg {
    Resized(i32, i32),
    Stop,
}

/// Handle to the spawned render thread.
struct RenderThread {
    tx: Sender<RenderMsg>,
    join: Option<JoinHandle<()>>,
}

impl RenderThread {
    fn spawn<E>(driver: RenderDriver<E>, width: i32, height: i32, budget: Duration) -> Self
    where
        E: Engine + 'static,
    {
        let (tx, rx) = channel();
        let join = std::thread::Builder::new()
            .name("kino-render".to_string())
            .spawn(move || render_main(driver, rx, width, height, budget))
            .expect("failed to spawn render thread");

        Self {
            tx,
            join: Some(join),
        }
    }

    fn resized(&self, width: i32, height: i32) {
        let _ = self.tx.send(RenderMsg::Resized(width, height));
    }

    /// Signals the loop to stop and waits for the in-flight frame to finish.
    fn stop(&mut self) {
        let _ = self.tx.send(RenderMsg::Stop);
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                log::error!("render thread panicked");
            }
        }
    }
}

impl Drop for RenderThread {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The render thread's main loop.
///
/// Creation and the initial resize always run back to back, before the first
/// draw. Afterwards: drain control messages, then draw one frame and sleep
/// out the budget, or park if paused.
fn render_main<E: Engine>(
    mut driver: RenderDriver<E>,
    rx: Receiver<RenderMsg>,
    width: i32,
    height: i32,
    budget: Duration,
) {
    driver.on_surface_created();
    driver.on_surface_changed(width, height);

    let mut clock = FrameClock::new();
    let mut was_paused = false;

    loop {
        loop {
            match rx.try_recv() {
                Ok(RenderMsg::Resized(w, h)) => driver.on_surface_changed(w, h),
                Ok(RenderMsg::Stop) | Err(TryRecvError::Disconnected) => return,
                Err(TryRecvError::Empty) => break,
            }
        }

        if driver.destroyed() {
            return;
        }

        if driver.paused() {
            // Parked, but still responsive to resize and stop.
            match rx.recv_timeout(PAUSE_POLL) {
                Ok(RenderMsg::Resized(w, h)) => driver.on_surface_changed(w, h),
                Ok(RenderMsg::Stop) | Err(RecvTimeoutError::Disconnected) => return,
                Err(RecvTimeoutError::Timeout) => {}
            }
            was_paused = true;
            continue;
        }

        if was_paused {
            clock.reset();
            was_paused = false;
        }

        clock.tick();
        driver.on_draw_frame();
        clock.throttle_to(budget);
    }
}

struct HostState<E: Engine + 'static> {
    config: RuntimeConfig,
    host: SurfaceHost<E>,

    window: Option<Window>,
    render: Option<RenderThread>,
    pointer: PointerState,
    resumed_before: bool,
}

impl<E: Engine + 'static> HostState<E> {
    fn new(config: RuntimeConfig, host: SurfaceHost<E>) -> Self {
        Self {
            config,
            host,
            window: None,
            render: None,
            pointer: PointerState::default(),
            resumed_before: false,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;
        log::debug!("surface requested with {:?}", self.host.config());

        let size = window.inner_size();
        self.render = Some(RenderThread::spawn(
            self.host.renderer(),
            size.width as i32,
            size.height as i32,
            self.config.frame_budget,
        ));
        self.window = Some(window);
        Ok(())
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        // Join the render thread first: the in-flight draw must finish
        // before destroy invalidates the engine's resources.
        if let Some(mut render) = self.render.take() {
            render.stop();
        }
        self.host.on_destroy();
        self.window = None;
        event_loop.exit();
    }
}

impl<E: Engine + 'static> ApplicationHandler for HostState<E> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.create_window(event_loop) {
                log::error!("failed to create window: {e:#}");
                event_loop.exit();
                return;
            }
        }

        // The first `resumed` is window creation; playback starts with the
        // engine's own init/load on the render thread, not with a `play`.
        if self.resumed_before {
            self.host.on_resume();
        }
        self.resumed_before = true;
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.host.on_pause();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // The render thread paces itself; the event thread just waits.
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(touch) = translate_window_event(&mut self.pointer, &event) {
            if self.host.handle_touch(touch) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),

            WindowEvent::Resized(size) => {
                if let Some(render) = &self.render {
                    render.resized(size.width as i32, size.height as i32);
                }
            }

            _ => {}
        }
    }
}
