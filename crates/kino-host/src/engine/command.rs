use super::Engine;

/// A single engine command, reified for queueing and inspection.
///
/// Variants map one-to-one onto the [`Engine`] trait methods; `Command`
/// carries the generic string-array form used for loads and anything else
/// the engine's control channel accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Init,
    Play,
    Pause,
    Resize { width: i32, height: i32 },
    Step,
    TouchDown { x: i32, y: i32 },
    TouchMove { x: i32, y: i32 },
    TouchUp { x: i32, y: i32 },
    Command(Vec<String>),
    Destroy,
}

impl EngineCommand {
    /// Dispatches this command to `engine`.
    pub fn apply(&self, engine: &dyn Engine) {
        match self {
            EngineCommand::Init => engine.init(),
            EngineCommand::Play => engine.play(),
            EngineCommand::Pause => engine.pause(),
            EngineCommand::Resize { width, height } => engine.resize(*width, *height),
            EngineCommand::Step => engine.step(),
            EngineCommand::TouchDown { x, y } => engine.touch_down(*x, *y),
            EngineCommand::TouchMove { x, y } => engine.touch_move(*x, *y),
            EngineCommand::TouchUp { x, y } => engine.touch_up(*x, *y),
            EngineCommand::Command(args) => {
                let refs: Vec<&str> = args.iter().map(String::as_str).collect();
                engine.command(&refs);
            }
            EngineCommand::Destroy => engine.destroy(),
        }
    }

    /// True for `Destroy`, after which no further commands are valid.
    pub fn is_terminal(&self) -> bool {
        matches!(self, EngineCommand::Destroy)
    }
}
