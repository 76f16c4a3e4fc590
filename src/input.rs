//! Keyboard input polling
//!
//! The game reads input once per frame into a plain struct of signals.
//! Movement keys are level-triggered (held = keep moving); jump and quit
//! use macroquad's event-based press detection so a tap is never missed.

use macroquad::prelude::*;

/// Discrete input signals for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    pub move_left: bool,
    pub move_right: bool,
    /// Pressed this frame (edge trigger)
    pub jump: bool,
    pub quit: bool,
}

/// Sample the keyboard for this frame
pub fn poll() -> InputFrame {
    InputFrame {
        move_left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
        move_right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
        jump: is_key_pressed(KeyCode::Space)
            || is_key_pressed(KeyCode::W)
            || is_key_pressed(KeyCode::Up),
        quit: is_key_pressed(KeyCode::Escape),
    }
}
