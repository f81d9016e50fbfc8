//! winit → platform-agnostic touch translation.
//!
//! The engine only understands a single primary pointer at integer pixel
//! coordinates, so both mouse input (press-drag-release) and native touch
//! (first contact only) collapse into the same [`TouchEvent`] stream.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, Touch, TouchPhase as WinitTouchPhase, WindowEvent};

use crate::input::{TouchEvent, TouchPhase};

/// Cross-event pointer tracking for one window.
///
/// winit delivers button state and cursor position as separate events; this
/// carries the position across to button events, and pins the primary touch
/// contact so extra fingers are ignored.
#[derive(Debug, Default)]
pub struct PointerState {
    cursor: Option<PhysicalPosition<f64>>,
    mouse_down: bool,
    active_touch: Option<u64>,
}

/// Translates a window event into a touch event, if it concerns the
/// primary pointer. Everything else returns `None` and is left to the
/// caller's default handling.
pub fn translate_window_event(
    state: &mut PointerState,
    event: &WindowEvent,
) -> Option<TouchEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => cursor_moved(state, *position),

        WindowEvent::MouseInput {
            state: st, button, ..
        } => mouse_input(state, *st, *button),

        WindowEvent::Touch(Touch {
            id,
            phase,
            location,
            ..
        }) => touch(state, *id, *phase, *location),

        _ => None,
    }
}

fn cursor_moved(state: &mut PointerState, position: PhysicalPosition<f64>) -> Option<TouchEvent> {
    state.cursor = Some(position);
    state.mouse_down.then(|| at(TouchPhase::Move, position))
}

fn mouse_input(
    state: &mut PointerState,
    st: ElementState,
    button: MouseButton,
) -> Option<TouchEvent> {
    if button != MouseButton::Left {
        return None;
    }
    let position = state.cursor.unwrap_or_default();
    match st {
        ElementState::Pressed => {
            state.mouse_down = true;
            Some(at(TouchPhase::Down, position))
        }
        ElementState::Released => {
            state.mouse_down = false;
            Some(at(TouchPhase::Up, position))
        }
    }
}

fn touch(
    state: &mut PointerState,
    id: u64,
    phase: WinitTouchPhase,
    location: PhysicalPosition<f64>,
) -> Option<TouchEvent> {
    match phase {
        WinitTouchPhase::Started => {
            // First contact becomes the primary pointer; later fingers are ignored.
            if state.active_touch.is_some() {
                return None;
            }
            state.active_touch = Some(id);
            Some(at(TouchPhase::Down, location))
        }
        WinitTouchPhase::Moved => {
            (state.active_touch == Some(id)).then(|| at(TouchPhase::Move, location))
        }
        WinitTouchPhase::Ended => {
            if state.active_touch != Some(id) {
                return None;
            }
            state.active_touch = None;
            Some(at(TouchPhase::Up, location))
        }
        WinitTouchPhase::Cancelled => {
            if state.active_touch != Some(id) {
                return None;
            }
            state.active_touch = None;
            Some(at(TouchPhase::Cancel, location))
        }
    }
}

fn at(phase: TouchPhase, pos: PhysicalPosition<f64>) -> TouchEvent {
    TouchEvent::new(phase, pos.x as i32, pos.y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: f64, y: f64) -> PhysicalPosition<f64> {
        PhysicalPosition::new(x, y)
    }

    // ── mouse as primary pointer ─────────────────────────────────────────

    #[test]
    fn mouse_drag_becomes_down_move_up() {
        let mut state = PointerState::default();

        assert_eq!(cursor_moved(&mut state, pos(10.0, 20.0)), None);
        assert_eq!(
            mouse_input(&mut state, ElementState::Pressed, MouseButton::Left),
            Some(TouchEvent::new(TouchPhase::Down, 10, 20))
        );
        assert_eq!(
            cursor_moved(&mut state, pos(15.0, 22.0)),
            Some(TouchEvent::new(TouchPhase::Move, 15, 22))
        );
        assert_eq!(
            mouse_input(&mut state, ElementState::Released, MouseButton::Left),
            Some(TouchEvent::new(TouchPhase::Up, 15, 22))
        );
    }

    #[test]
    fn non_left_buttons_pass_through() {
        let mut state = PointerState::default();
        assert_eq!(
            mouse_input(&mut state, ElementState::Pressed, MouseButton::Right),
            None
        );
    }

    #[test]
    fn press_without_prior_cursor_defaults_to_origin() {
        let mut state = PointerState::default();
        assert_eq!(
            mouse_input(&mut state, ElementState::Pressed, MouseButton::Left),
            Some(TouchEvent::new(TouchPhase::Down, 0, 0))
        );
    }

    // ── native touch ─────────────────────────────────────────────────────

    #[test]
    fn second_finger_is_ignored() {
        let mut state = PointerState::default();

        assert_eq!(
            touch(&mut state, 1, WinitTouchPhase::Started, pos(5.0, 5.0)),
            Some(TouchEvent::new(TouchPhase::Down, 5, 5))
        );
        assert_eq!(
            touch(&mut state, 2, WinitTouchPhase::Started, pos(50.0, 50.0)),
            None
        );
        assert_eq!(
            touch(&mut state, 2, WinitTouchPhase::Moved, pos(55.0, 55.0)),
            None
        );
        assert_eq!(
            touch(&mut state, 1, WinitTouchPhase::Ended, pos(6.0, 6.0)),
            Some(TouchEvent::new(TouchPhase::Up, 6, 6))
        );
    }

    #[test]
    fn cancelled_contact_maps_to_cancel_phase() {
        let mut state = PointerState::default();

        touch(&mut state, 7, WinitTouchPhase::Started, pos(1.0, 1.0));
        assert_eq!(
            touch(&mut state, 7, WinitTouchPhase::Cancelled, pos(1.0, 1.0)),
            Some(TouchEvent::new(TouchPhase::Cancel, 1, 1))
        );

        // The slot frees up for the next contact.
        assert_eq!(
            touch(&mut state, 8, WinitTouchPhase::Started, pos(2.0, 3.0)),
            Some(TouchEvent::new(TouchPhase::Down, 2, 3))
        );
    }
}
