/// Phase of a primary-pointer contact.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    /// Contact aborted by the platform (gesture takeover, focus loss).
    /// Not forwarded to the engine; falls through to default handling.
    Cancel,
}

/// A primary-pointer contact at integer pixel coordinates.
///
/// Only the primary pointer is tracked; multi-touch gestures beyond it are
/// left to the platform's default handling.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub x: i32,
    pub y: i32,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, x: i32, y: i32) -> Self {
        Self { phase, x, y }
    }
}
