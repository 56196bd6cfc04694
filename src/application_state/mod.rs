//! # Application State Management
//!
//! The outermost driver of the editor, covering:
//! - Input event intake from the windowing system
//! - Frame timing and delta time calculations
//! - The per-frame tick that feeds input to the editor and produces the
//!   frame's draw plan
//!
//! The host owns the window and the GPU surface; this layer only consumes
//! [`winit`] event values and hands back [`FramePlan`]s, so it runs the
//! same under a real event loop or a headless harness.

pub mod input_manager;
pub mod input_state;

use std::path::PathBuf;

use winit::event::WindowEvent;

use input_manager::InputManager;

use crate::editor_state::rendering::frame::FramePlan;
use crate::editor_state::EditorState;

/// Drives one editing session: input intake, frame timing, and the
/// per-frame tick.
pub struct ApplicationState {
    /// The core editor state and logic
    pub editor_state: EditorState,

    /// Manages input state and event processing
    pub input_manager: InputManager,

    /// Timestamp of the last tick for delta time calculations
    last_tick_time: web_time::Instant,
}

impl ApplicationState {
    /// Creates a session sized to the host's viewport, with save/load
    /// actions bound to `save_path`.
    pub fn new(viewport_width: u32, viewport_height: u32, save_path: PathBuf) -> Self {
        ApplicationState {
            editor_state: EditorState::new(viewport_width, viewport_height, save_path),
            input_manager: InputManager::new(),
            last_tick_time: web_time::Instant::now(),
        }
    }

    /// Feeds a window event into the input manager.
    ///
    /// Losing focus resets the input samples to prevent stuck keys.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        self.input_manager.intake_input(event);

        match event {
            WindowEvent::Resized(size) => {
                self.editor_state.resize_viewport(size.width, size.height);
            }
            WindowEvent::Focused(false) => {
                self.input_manager.reset_inputs();
            }
            _ => (),
        }
    }

    /// Feeds a raw mouse motion delta from a device event.
    pub fn handle_mouse_motion(&mut self, delta: (f64, f64)) {
        self.input_manager.intake_mouse_motion(delta);
    }

    /// Runs one frame: drains the input snapshot into the editor, applies
    /// actions against the elapsed time, and returns the frame's draw
    /// plan.
    pub fn tick(&mut self) -> FramePlan {
        let now = web_time::Instant::now();
        let tick_dt = now - self.last_tick_time;

        if let Some(processed_input) = self.input_manager.get_and_reset_processed_input() {
            self.editor_state.set_input_commands(processed_input);
        }

        self.editor_state.process_input(tick_dt);
        self.last_tick_time = now;

        self.editor_state.plan_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor_state::rendering::frame::DrawCommand;
    use crate::editor_state::voxels::world::WORLD_PLANE_SIZE;

    #[test]
    fn tick_with_no_input_plans_the_starting_world() {
        let mut app = ApplicationState::new(800, 600, std::env::temp_dir().join("unused.json"));
        let plan = app.tick();

        let tiles = plan
            .commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Tile { .. }))
            .count();
        assert_eq!(tiles, WORLD_PLANE_SIZE as usize);
    }

    #[test]
    fn focus_loss_clears_pending_motion() {
        let mut app = ApplicationState::new(800, 600, std::env::temp_dir().join("unused.json"));
        app.handle_mouse_motion((6.0, 6.0));
        app.handle_window_event(&WindowEvent::Focused(false));

        assert_eq!(app.input_manager.mouse_inputs.mouse_delta, None);
    }
}
