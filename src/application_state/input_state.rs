//! # Input State
//!
//! Types describing the state of input devices, shared between the input
//! manager and the editor's input translation.

use std::collections::HashMap;
use winit::{event::MouseButton, keyboard::KeyCode};

/// Represents the state of a key or button across frame boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Key/button is not pressed
    #[default]
    NotPressed,
    /// Key/button was just pressed this frame
    Pressed,
    /// Key/button has been held down for multiple frames
    Held,
    /// Key/button was just released this frame
    Released,
}

impl ButtonState {
    /// Determines if the input is down at all (just pressed or held)
    pub fn is_active(&self) -> bool {
        matches!(self, ButtonState::Pressed | ButtonState::Held)
    }

    /// Determines if the input was just pressed this frame
    pub fn is_just_pressed(&self) -> bool {
        matches!(self, ButtonState::Pressed)
    }

    /// Determines if the input was just released this frame
    pub fn is_just_released(&self) -> bool {
        matches!(self, ButtonState::Released)
    }

    /// Derives the transition state from the previous and current raw
    /// down/up samples.
    pub fn from_raw_states(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => ButtonState::Pressed,
            (true, true) => ButtonState::Held,
            (true, false) => ButtonState::Released,
            (false, false) => ButtonState::NotPressed,
        }
    }
}

/// A snapshot of the processed input states with state transitions.
///
/// Key and button samples are translated into [`ButtonState`] values so
/// consumers can distinguish a fresh press from a hold.
pub struct ProcessedInputState {
    /// Current state of all tracked keyboard keys
    pub keyboard_states: HashMap<KeyCode, ButtonState>,

    /// Current state of mouse buttons
    pub mouse_button_states: HashMap<MouseButton, ButtonState>,

    /// Mouse movement delta since the last frame (x, y)
    pub mouse_delta: Option<(f64, f64)>,
}

impl ProcessedInputState {
    /// Gets the state of a keyboard key
    pub fn get_key_state(&self, key: KeyCode) -> ButtonState {
        self.keyboard_states.get(&key).copied().unwrap_or_default()
    }

    /// Gets the state of a mouse button
    pub fn get_mouse_button_state(&self, button: MouseButton) -> ButtonState {
        self.mouse_button_states.get(&button).copied().unwrap_or_default()
    }

    /// Gets the mouse movement delta since the last frame
    pub fn get_mouse_delta(&self) -> Option<(f64, f64)> {
        self.mouse_delta
    }
}

/// Tracks raw mouse samples between frames.
pub struct MouseInput {
    /// Previous state of each mouse button (pressed/released)
    pub mouse_button_inputs_old: HashMap<MouseButton, bool>,
    /// Current state of each mouse button (pressed/released)
    pub mouse_button_inputs_new: HashMap<MouseButton, bool>,

    /// Mouse movement delta since the last frame (x, y)
    pub mouse_delta: Option<(f64, f64)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(false, false, ButtonState::NotPressed)]
    #[test_case(false, true, ButtonState::Pressed)]
    #[test_case(true, true, ButtonState::Held)]
    #[test_case(true, false, ButtonState::Released)]
    fn transitions_follow_the_raw_samples(previous: bool, current: bool, expected: ButtonState) {
        assert_eq!(ButtonState::from_raw_states(previous, current), expected);
    }

    #[test]
    fn active_covers_press_and_hold() {
        assert!(ButtonState::Pressed.is_active());
        assert!(ButtonState::Held.is_active());
        assert!(!ButtonState::Released.is_active());
        assert!(!ButtonState::NotPressed.is_active());
    }

    #[test]
    fn untracked_keys_read_as_not_pressed() {
        let input = ProcessedInputState {
            keyboard_states: HashMap::new(),
            mouse_button_states: HashMap::new(),
            mouse_delta: None,
        };
        assert_eq!(input.get_key_state(KeyCode::KeyW), ButtonState::NotPressed);
        assert_eq!(
            input.get_mouse_button_state(MouseButton::Left),
            ButtonState::NotPressed
        );
    }
}
