//! # Editor State Module
//!
//! The core state container of the editor, replacing the sprawl of
//! process-wide globals such an app usually grows: the world, the camera,
//! the selected tool, and this frame's player actions all live here.
//!
//! ## Tick model
//!
//! One logical tick per display refresh:
//! 1. the host feeds processed input through [`EditorState::set_input_commands`]
//! 2. [`EditorState::process_input`] applies tool/camera actions and
//!    integrates movement against the elapsed time
//! 3. [`EditorState::plan_frame`] produces the draw plan the renderer
//!    consumes
//!
//! All mutation happens synchronously on this single thread between
//! frames; nothing blocks or suspends.

use std::path::PathBuf;

use cgmath::Point3;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::application_state::input_state::ProcessedInputState;
use crate::core::StResource;

use aim::{aim_cell, AIM_PROBE_DISTANCE};
use camera_state::CameraState;
use rendering::frame::{build_frame_plan, FramePlan};
use voxels::{persistence, tile::tool_id::ToolId, world::World};

pub mod aim;
pub mod camera_state;
pub mod rendering;
pub mod voxels;

/// Keyboard shortcuts for the tool palette, in palette order: the hand,
/// the pickaxe, then the eight placement materials.
pub const PALETTE_KEYS: [(KeyCode, ToolId); 10] = [
    (KeyCode::Digit0, ToolId::None),
    (KeyCode::Digit1, ToolId::Pickaxe),
    (KeyCode::Digit2, ToolId::Dirt),
    (KeyCode::Digit3, ToolId::Grass),
    (KeyCode::Digit4, ToolId::Sand),
    (KeyCode::Digit5, ToolId::Brick),
    (KeyCode::Digit6, ToolId::Iron),
    (KeyCode::Digit7, ToolId::Gold),
    (KeyCode::Digit8, ToolId::MetalSheet),
    (KeyCode::Digit9, ToolId::LogAcacia),
];

/// The main state container for one editing session.
pub struct EditorState {
    /// Camera pose, projection, and buffered movement.
    pub camera_state: CameraState,
    /// This frame's player actions, derived from input.
    pub player_actions: PlayerAction,
    /// The voxel world, shared with the host renderer.
    world: StResource<World>,
    /// The tool currently in the player's hand.
    active_tool: ToolId,
    /// Where save/load actions read and write the world file.
    save_path: PathBuf,
}

impl EditorState {
    /// Creates a session with a fresh world and the camera at the starting
    /// pose.
    pub fn new(viewport_width: u32, viewport_height: u32, save_path: PathBuf) -> Self {
        EditorState {
            camera_state: CameraState::new(viewport_width, viewport_height),
            player_actions: PlayerAction::default(),
            world: StResource::new(World::new()),
            active_tool: ToolId::None,
            save_path,
        }
    }

    /// A shared handle to the world, for the host renderer.
    pub fn world(&self) -> StResource<World> {
        self.world.clone()
    }

    /// The tool currently in the player's hand.
    pub fn active_tool(&self) -> ToolId {
        self.active_tool
    }

    /// Puts a tool in the player's hand. The host UI calls this from its
    /// palette buttons; the digit shortcuts route here too.
    pub fn select_tool(&mut self, tool: ToolId) {
        log::info!("selected tool {tool:?}");
        self.active_tool = tool;
    }

    /// Sets this frame's actions from the host's processed input.
    pub fn set_input_commands(&mut self, input: ProcessedInputState) {
        self.player_actions = self.translate_processed_input(input);
    }

    /// Translates processed key/button states into player actions.
    fn translate_processed_input(&self, input: ProcessedInputState) -> PlayerAction {
        let mut player_action = PlayerAction::default();

        // movement intent, active while the key is down
        player_action.move_forward = input.get_key_state(KeyCode::KeyW).is_active();
        player_action.move_backward = input.get_key_state(KeyCode::KeyS).is_active();
        player_action.move_left = input.get_key_state(KeyCode::KeyA).is_active();
        player_action.move_right = input.get_key_state(KeyCode::KeyD).is_active();

        // pans fire once per press
        player_action.pan_left = input.get_key_state(KeyCode::KeyQ).is_just_pressed();
        player_action.pan_right = input.get_key_state(KeyCode::KeyE).is_just_pressed();

        // drag-to-look while the left button is down and the pointer moved
        if input.get_mouse_delta().is_some()
            && input.get_mouse_button_state(MouseButton::Left).is_active()
        {
            player_action.rotate_view = input.get_mouse_delta();
        }

        // the click lands on the press, not the release
        player_action.apply_tool = input
            .get_mouse_button_state(MouseButton::Left)
            .is_just_pressed();

        for (key, tool) in PALETTE_KEYS {
            if input.get_key_state(key).is_just_pressed() {
                player_action.select_tool = Some(tool);
            }
        }

        player_action.save_world = input.get_key_state(KeyCode::F5).is_just_pressed();
        player_action.load_world = input.get_key_state(KeyCode::F9).is_just_pressed();

        player_action
    }

    /// Applies this frame's actions and integrates camera movement.
    pub fn process_input(&mut self, dt: web_time::Duration) {
        self.camera_state.intake_actions(&self.player_actions);

        if let Some(tool) = self.player_actions.select_tool {
            self.select_tool(tool);
        }

        if self.player_actions.apply_tool {
            self.apply_active_tool();
        }

        if self.player_actions.save_world {
            if let Err(error) = persistence::save_world_file(&self.world.get(), &self.save_path) {
                log::error!("world save failed: {error}");
            }
        }
        if self.player_actions.load_world {
            if let Err(error) =
                persistence::load_world_file(&mut self.world.get_mut(), &self.save_path)
            {
                log::error!("world load failed: {error}");
            }
        }

        self.camera_state.update(dt);
    }

    /// The grid cell dig/build actions currently target.
    pub fn aimed_cell(&self) -> Point3<i32> {
        aim_cell(
            self.camera_state.camera.eye,
            self.camera_state.camera.direction(),
            AIM_PROBE_DISTANCE,
        )
    }

    /// Applies the active tool to the aimed cell. Out-of-bounds aims fall
    /// through the world's bounds guard as silent no-ops.
    fn apply_active_tool(&mut self) {
        let cell = self.aimed_cell();
        match self.active_tool {
            ToolId::None | ToolId::Skybox => {}
            ToolId::Pickaxe => {
                log::debug!("dig at ({}, {}, {})", cell.x, cell.y, cell.z);
                self.world.get_mut().dig(cell.x, cell.y, cell.z);
            }
            tool => {
                log::debug!("build {tool:?} at ({}, {}, {})", cell.x, cell.y, cell.z);
                self.world.get_mut().set_type(cell.x, cell.y, cell.z, tool);
            }
        }
    }

    /// Builds the draw plan for the current frame.
    pub fn plan_frame(&self) -> FramePlan {
        build_frame_plan(&self.world.get(), &self.camera_state, self.active_tool)
    }

    /// Updates the projection after a viewport resize.
    pub fn resize_viewport(&mut self, width: u32, height: u32) {
        self.camera_state.resize_viewport(width, height);
    }
}

/// Represents player actions derived from one frame of input.
#[derive(Debug, Default)]
pub struct PlayerAction {
    // movement intent, true while the key is down
    move_forward: bool,
    move_backward: bool,
    move_left: bool,
    move_right: bool,

    // immediate camera rotations
    pan_left: bool,
    pan_right: bool,
    rotate_view: Option<(f64, f64)>,

    // once-per-press actions
    apply_tool: bool,
    select_tool: Option<ToolId>,
    save_world: bool,
    load_world: bool,
}
