use macroquad::logging::{debug, warn};
use macroquad::prelude::*;

use crate::application::{Session, Viewport};
use crate::domain::Pattern;

/// Number keys stamp the preset with the same index
const PRESET_KEYS: [KeyCode; 6] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
];

/// Handle click-to-toggle and drag-to-paint on the board
pub fn handle_mouse_paint(session: &mut Session, viewport: &Viewport, mouse_pos: (f32, f32)) {
    let Some((x, y)) = viewport.screen_to_grid(mouse_pos.0, mouse_pos.1) else {
        return;
    };

    if is_mouse_button_pressed(MouseButton::Left) {
        match session.press(x, y) {
            Ok(cell) => {
                debug!("toggled ({}, {}) to {:?}", x, y, cell);
            }
            Err(err) => {
                warn!("paint rejected: {}", err);
            }
        }
    } else if is_mouse_button_down(MouseButton::Left) {
        if let Err(err) = session.drag(x, y) {
            warn!("paint rejected: {}", err);
        }
    }
}

/// Stamp a preset under the cursor when its number key is pressed
pub fn handle_pattern_keys(
    session: &mut Session,
    viewport: &Viewport,
    patterns: &[Pattern],
    mouse_pos: (f32, f32),
) {
    let Some(pattern) = PRESET_KEYS
        .iter()
        .zip(patterns)
        .find(|(key, _)| is_key_pressed(**key))
        .map(|(_, pattern)| pattern)
    else {
        return;
    };
    let Some((x, y)) = viewport.screen_to_grid(mouse_pos.0, mouse_pos.1) else {
        return;
    };

    match session.stamp(pattern, x, y) {
        Ok(()) => {
            debug!("stamped {} at ({}, {})", pattern.name, x, y);
        }
        Err(err) => {
            warn!("{} does not fit here: {}", pattern.name, err);
        }
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(session: Session) -> Session {
    type KeyAction = (KeyCode, fn(Session) -> Session);

    let actions: [KeyAction; 8] = [
        (KeyCode::Space, Session::toggle_animation),
        (KeyCode::Right, Session::request_step),
        (KeyCode::Up, Session::request_step),
        (KeyCode::Down, Session::request_step),
        (KeyCode::Left, Session::rewind),
        (KeyCode::Backspace, Session::rewind),
        (KeyCode::C, Session::clear),
        (KeyCode::R, Session::randomize),
    ];

    actions.iter().fold(session, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
