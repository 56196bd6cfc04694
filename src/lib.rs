#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Tileworld
//!
//! A voxel world editor core built with Rust: a 32x32x32 tile grid, a
//! tool palette of placement materials plus a pickaxe, a free camera, and
//! JSON save/load of the world.
//!
//! ## Key Modules
//!
//! * `application_state` - Input intake, frame timing, and the per-frame tick
//! * `core` - Shared utilities used throughout the editor
//! * `editor_state` - The world grid, camera, tools, and frame planning
//!
//! ## Architecture
//!
//! The editor core is renderer-agnostic: each tick consumes processed
//! input and produces a [`editor_state::rendering::frame::FramePlan`], an
//! ordered list of draw commands with ready-to-upload instance and camera
//! uniform data. A host owns the window and GPU surface and replays the
//! plan with whatever graphics API it likes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! fn main() {
//!     tileworld::run();
//! }
//! ```

use std::path::PathBuf;

use log::info;

use application_state::ApplicationState;
use editor_state::voxels::tile::tool_id::ToolId;

pub mod application_state;
pub mod core;
pub mod editor_state;

/// World file used when no path is given on the command line.
pub const DEFAULT_SAVE_PATH: &str = "world.json";

const DEMO_VIEWPORT_WIDTH: u32 = 800;
const DEMO_VIEWPORT_HEIGHT: u32 = 600;
const DEMO_FRAME_COUNT: u32 = 3;

/// Runs a short headless editing session: initializes logging, creates a
/// session against the default (or argv-supplied) save path, and ticks a
/// few frames, logging the size of each frame's draw plan.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let save_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH));

    let mut app = ApplicationState::new(DEMO_VIEWPORT_WIDTH, DEMO_VIEWPORT_HEIGHT, save_path);

    if let Some(tool) = ToolId::from_name("dirt") {
        app.editor_state.select_tool(tool);
    }

    for frame in 0..DEMO_FRAME_COUNT {
        let plan = app.tick();
        info!("frame {frame}: {} draw commands", plan.commands.len());
    }
}
