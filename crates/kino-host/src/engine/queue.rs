//! Ordered single-consumer command queue over the engine boundary.
//!
//! Host code issues commands from two threads. A real engine whose calling
//! contract is unknown should not be exposed to that directly; routing
//! through this queue gives it a single-threaded, FIFO view of the world.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

use super::{Engine, EngineCommand};

/// Creates a connected producer/consumer pair.
///
/// The [`QueuedEngine`] side implements [`Engine`] and may be cloned freely
/// across threads; the [`CommandQueue`] side is the single consumer.
pub fn queue() -> (QueuedEngine, CommandQueue) {
    let (tx, rx) = channel();
    (QueuedEngine { tx }, CommandQueue { rx })
}

/// Producer half: an [`Engine`] that enqueues instead of executing.
#[derive(Clone)]
pub struct QueuedEngine {
    tx: Sender<EngineCommand>,
}

impl QueuedEngine {
    fn send(&self, cmd: EngineCommand) {
        // Fire-and-forget: a gone consumer means teardown is underway.
        if self.tx.send(cmd).is_err() {
            log::warn!("engine command dropped: queue consumer is gone");
        }
    }
}

impl Engine for QueuedEngine {
    fn init(&self) {
        self.send(EngineCommand::Init);
    }

    fn play(&self) {
        self.send(EngineCommand::Play);
    }

    fn pause(&self) {
        self.send(EngineCommand::Pause);
    }

    fn resize(&self, width: i32, height: i32) {
        self.send(EngineCommand::Resize { width, height });
    }

    fn step(&self) {
        self.send(EngineCommand::Step);
    }

    fn touch_down(&self, x: i32, y: i32) {
        self.send(EngineCommand::TouchDown { x, y });
    }

    fn touch_move(&self, x: i32, y: i32) {
        self.send(EngineCommand::TouchMove { x, y });
    }

    fn touch_up(&self, x: i32, y: i32) {
        self.send(EngineCommand::TouchUp { x, y });
    }

    fn command(&self, args: &[&str]) {
        self.send(EngineCommand::Command(
            args.iter().map(|s| s.to_string()).collect(),
        ));
    }

    fn destroy(&self) {
        self.send(EngineCommand::Destroy);
    }
}

/// Consumer half. Not cloneable: exactly one thread drains the queue.
pub struct CommandQueue {
    rx: Receiver<EngineCommand>,
}

impl CommandQueue {
    /// Blocks, dispatching commands to `engine` in arrival order.
    ///
    /// Returns when `Destroy` has been dispatched or every producer has been
    /// dropped.
    pub fn run(self, engine: &dyn Engine) {
        while let Ok(cmd) = self.rx.recv() {
            let terminal = cmd.is_terminal();
            cmd.apply(engine);
            if terminal {
                break;
            }
        }
    }

    /// Dispatches every command currently buffered, without blocking.
    ///
    /// Returns the number of commands dispatched.
    pub fn drain_into(&self, engine: &dyn Engine) -> usize {
        let mut n = 0;
        loop {
            match self.rx.try_recv() {
                Ok(cmd) => {
                    cmd.apply(engine);
                    n += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return n,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::RecordingEngine;

    #[test]
    fn commands_arrive_in_fifo_order() {
        let (producer, consumer) = queue();

        producer.init();
        producer.resize(640, 360);
        producer.command(&["loadfile", "/tmp/a.mkv"]);
        producer.step();

        let sink = RecordingEngine::default();
        assert_eq!(consumer.drain_into(&sink), 4);
        assert_eq!(
            sink.taken(),
            vec![
                EngineCommand::Init,
                EngineCommand::Resize { width: 640, height: 360 },
                EngineCommand::Command(vec!["loadfile".into(), "/tmp/a.mkv".into()]),
                EngineCommand::Step,
            ]
        );
    }

    #[test]
    fn run_stops_after_destroy() {
        let (producer, consumer) = queue();

        producer.pause();
        producer.destroy();

        let sink = RecordingEngine::default();
        consumer.run(&sink);
        assert_eq!(
            sink.taken(),
            vec![EngineCommand::Pause, EngineCommand::Destroy]
        );
    }

    #[test]
    fn run_returns_when_producers_drop() {
        let (producer, consumer) = queue();

        producer.play();
        drop(producer);

        let sink = RecordingEngine::default();
        consumer.run(&sink);
        assert_eq!(sink.taken(), vec![EngineCommand::Play]);
    }

    #[test]
    fn producers_interleave_from_multiple_threads() {
        let (producer, consumer) = queue();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let p = producer.clone();
                std::thread::spawn(move || p.resize(i, i))
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        drop(producer);

        let sink = RecordingEngine::default();
        consumer.run(&sink);

        let mut widths: Vec<i32> = sink
            .taken()
            .iter()
            .map(|c| match c {
                EngineCommand::Resize { width, .. } => *width,
                other => panic!("unexpected command {other:?}"),
            })
            .collect();
        widths.sort_unstable();
        assert_eq!(widths, vec![0, 1, 2, 3]);
    }
}
