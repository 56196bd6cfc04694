//! # Input Manager
//!
//! Tracks raw keyboard and mouse samples between frames and turns them
//! into the transition-aware snapshot the editor consumes. Only the keys
//! the editor binds are tracked; everything else is ignored at intake.

use std::collections::HashMap;

use winit::{
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::input_state::{ButtonState, MouseInput, ProcessedInputState};

const KEY_CODES: [KeyCode; 18] = [
    KeyCode::KeyW,
    KeyCode::KeyS,
    KeyCode::KeyA,
    KeyCode::KeyD,
    KeyCode::KeyQ,
    KeyCode::KeyE,
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
    KeyCode::F5,
    KeyCode::F9,
];

/// Manages the state of all input devices and processes input events.
///
/// Maintains paired old/new boolean samples per key and button so that
/// press/hold/release transitions can be derived once per frame.
pub struct InputManager {
    /// Previous state of all tracked keyboard keys
    pub keyboard_inputs_old: HashMap<KeyCode, bool>,
    /// Current state of all tracked keyboard keys
    pub keyboard_inputs_new: HashMap<KeyCode, bool>,

    /// Current state of mouse inputs
    pub mouse_inputs: MouseInput,
}

impl InputManager {
    /// Creates a new InputManager with every tracked key and button up.
    pub fn new() -> Self {
        let mut keyboard_inputs_old = HashMap::new();
        let mut keyboard_inputs_new = HashMap::new();
        for key_code in KEY_CODES {
            keyboard_inputs_old.insert(key_code, false);
            keyboard_inputs_new.insert(key_code, false);
        }

        let mouse_buttons = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

        let mut mouse_button_inputs_old = HashMap::new();
        let mut mouse_button_inputs_new = HashMap::new();

        for button in mouse_buttons {
            mouse_button_inputs_old.insert(button, false);
            mouse_button_inputs_new.insert(button, false);
        }

        let mouse_inputs = MouseInput {
            mouse_button_inputs_old,
            mouse_button_inputs_new,
            mouse_delta: None,
        };

        Self {
            keyboard_inputs_old,
            keyboard_inputs_new,
            mouse_inputs,
        }
    }

    /// Copies the current samples into the previous samples to prepare for
    /// the next frame's transition derivation.
    pub fn move_old_states(&mut self) {
        for (key, new_state) in self.keyboard_inputs_new.iter() {
            if let Some(old_state) = self.keyboard_inputs_old.get_mut(key) {
                *old_state = *new_state;
            }
        }

        for (button, new_state) in self.mouse_inputs.mouse_button_inputs_new.iter() {
            if let Some(old_state) = self.mouse_inputs.mouse_button_inputs_old.get_mut(button) {
                *old_state = *new_state;
            }
        }
    }

    /// Processes a window event and updates internal input state.
    ///
    /// Handles keyboard and mouse button events; untracked keys and
    /// buttons fall through.
    pub fn intake_input(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => {
                if let Some(key_state) = self.keyboard_inputs_new.get_mut(key) {
                    *key_state = *state == ElementState::Pressed;
                }
            }
            WindowEvent::MouseInput { button, state, .. } => {
                if let Some(button_state) =
                    self.mouse_inputs.mouse_button_inputs_new.get_mut(button)
                {
                    *button_state = *state == ElementState::Pressed;
                }
            }
            _ => {}
        }
    }

    /// Records the mouse movement delta from a device event.
    pub fn intake_mouse_motion(&mut self, delta: (f64, f64)) {
        self.mouse_inputs.mouse_delta = Some(delta);
    }

    /// Derives a processed input state from the current raw samples.
    ///
    /// Each key and button pair of boolean samples becomes a
    /// [`ButtonState`] transition.
    pub fn create_processed_input_state(&mut self) -> ProcessedInputState {
        let mut keyboard_states = HashMap::new();
        let mut mouse_button_states = HashMap::new();

        for (key, &new_state) in self.keyboard_inputs_new.iter() {
            let old_state = self.keyboard_inputs_old.get(key).copied().unwrap_or(false);
            keyboard_states.insert(*key, ButtonState::from_raw_states(old_state, new_state));
        }

        for (button, &new_state) in self.mouse_inputs.mouse_button_inputs_new.iter() {
            let old_state = self
                .mouse_inputs
                .mouse_button_inputs_old
                .get(button)
                .copied()
                .unwrap_or(false);
            mouse_button_states.insert(*button, ButtonState::from_raw_states(old_state, new_state));
        }

        let mouse_delta = self.mouse_inputs.mouse_delta;

        ProcessedInputState {
            keyboard_states,
            mouse_button_states,
            mouse_delta,
        }
    }

    /// Returns the processed input state and rolls the samples forward
    /// for the next frame.
    pub fn get_and_reset_processed_input(&mut self) -> Option<ProcessedInputState> {
        let processed_input = Some(self.create_processed_input_state());
        self.reset_inputs();
        processed_input
    }

    /// Rolls the samples forward and clears the per-frame deltas.
    ///
    /// Also called when the window loses focus to prevent stuck keys.
    pub fn reset_inputs(&mut self) {
        self.move_old_states();
        self.mouse_inputs.mouse_delta = None;
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
