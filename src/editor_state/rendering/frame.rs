//! # Frame Plan Module
//!
//! Builds the per-frame draw plan the host renderer consumes.
//!
//! Every tick the plan is rebuilt from scratch: camera uniforms, one tile
//! command per occupied cell, a ghost preview at the aim cell while a
//! placement tool is active, and the skybox last. Each command is a tagged
//! variant carrying everything its draw call needs, so one dispatcher
//! handles the whole plan without per-object callbacks.

use cgmath::{Matrix4, Point3};

use crate::editor_state::aim::{aim_cell, AIM_PROBE_DISTANCE};
use crate::editor_state::camera_state::{camera::CameraUniform, CameraState};
use crate::editor_state::voxels::tile::{
    draw_mode::DrawMode, material_for, tool_id::ToolId, Tile,
};
use crate::editor_state::voxels::world::{World, WORLD_SIZE};

/// Scale of the skybox cube, big enough to enclose the whole grid.
pub const SKYBOX_SCALE: f32 = 100.0;

/// Blend color applied to every tile not otherwise highlighted.
pub const NEUTRAL_BLEND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Grey blend marking the cell the pickaxe would dig.
pub const DIG_HIGHLIGHT_BLEND: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
/// Blue-tinted blend for the placement preview ghost.
pub const GHOST_BLEND: [f32; 4] = [0.5, 0.5, 1.0, 1.0];

/// Per-draw instance data in upload-ready form.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TileInstance {
    /// The model matrix of the draw.
    pub model: [[f32; 4]; 4],
}

impl From<Matrix4<f32>> for TileInstance {
    fn from(matrix: Matrix4<f32>) -> Self {
        TileInstance {
            model: matrix.into(),
        }
    }
}

/// One draw the renderer must submit, with everything the call needs.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A world tile.
    Tile {
        /// The grid cell being drawn.
        cell: Point3<i32>,
        /// Material tag, keying the texture set.
        tool: ToolId,
        /// Which draw strategy to dispatch.
        draw_mode: DrawMode,
        /// Model matrix for the draw.
        instance: TileInstance,
        /// The tile's own flat tint.
        tint: [f32; 4],
        /// Frame-level highlight blend.
        blend: [f32; 4],
    },

    /// The translucent placement preview at the aim cell.
    Ghost {
        /// The aimed grid cell.
        cell: Point3<i32>,
        /// The material the active tool would place.
        tool: ToolId,
        /// Which draw strategy to dispatch.
        draw_mode: DrawMode,
        /// Model matrix for the draw.
        instance: TileInstance,
        /// Preview blend color.
        blend: [f32; 4],
    },

    /// The fixed skybox, drawn last with the translation-stripped view in
    /// [`CameraUniform::skybox_view_proj`].
    Skybox {
        /// Model matrix for the draw.
        instance: TileInstance,
    },
}

/// Everything the renderer needs for one frame.
pub struct FramePlan {
    /// Camera uniforms for this frame.
    pub camera: CameraUniform,
    /// Ordered draw commands; the skybox is always last.
    pub commands: Vec<DrawCommand>,
}

/// Builds the draw plan for the current world, camera, and tool.
pub fn build_frame_plan(
    world: &World,
    camera_state: &CameraState,
    active_tool: ToolId,
) -> FramePlan {
    let mut camera = CameraUniform::new();
    camera.update_view_proj_and_pos(&camera_state.camera, &camera_state.projection);

    let aim = aim_cell(
        camera_state.camera.eye,
        camera_state.camera.direction(),
        AIM_PROBE_DISTANCE,
    );

    let mut commands = Vec::with_capacity(world.occupied_count() + 2);

    for z in 0..WORLD_SIZE {
        for y in 0..WORLD_SIZE {
            for x in 0..WORLD_SIZE {
                if !world.is_occupied(x, y, z) {
                    continue;
                }
                let tile = world.get(x, y, z).expect("occupied cell");
                let cell = Point3::new(x, y, z);

                let blend = if active_tool == ToolId::Pickaxe && cell == aim {
                    DIG_HIGHLIGHT_BLEND
                } else {
                    NEUTRAL_BLEND
                };

                commands.push(DrawCommand::Tile {
                    cell,
                    tool: tile.tool,
                    draw_mode: tile.draw_mode,
                    instance: tile.model_matrix().into(),
                    tint: tile.tint,
                    blend,
                });
            }
        }
    }

    if active_tool.is_placement() && world.contains(aim) {
        if let Some(material) = material_for(active_tool) {
            commands.push(DrawCommand::Ghost {
                cell: aim,
                tool: active_tool,
                draw_mode: material.draw_mode,
                instance: Tile::new(aim).model_matrix().into(),
                blend: GHOST_BLEND,
            });
        }
    }

    commands.push(DrawCommand::Skybox {
        instance: Matrix4::from_scale(SKYBOX_SCALE).into(),
    });

    FramePlan { camera, commands }
}

#[cfg(test)]
mod tests {
    use cgmath::Point3 as P3;

    use super::*;
    use crate::editor_state::voxels::world::WORLD_PLANE_SIZE;

    /// A camera parked at (5,5,5) looking straight down -Z, aiming at (5,5,4).
    fn aimed_camera() -> CameraState {
        let mut state = CameraState::new(800, 600);
        state
            .camera
            .look_at(P3::new(5.0, 5.0, 5.0), P3::new(5.0, 5.0, 0.0));
        state
    }

    #[test]
    fn plan_covers_occupied_cells_and_ends_with_the_skybox() {
        let world = World::flat();
        let plan = build_frame_plan(&world, &CameraState::new(800, 600), ToolId::None);

        let tiles = plan
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Tile { .. }))
            .count();
        assert_eq!(tiles, WORLD_PLANE_SIZE as usize);
        assert!(matches!(
            plan.commands.last(),
            Some(DrawCommand::Skybox { .. })
        ));
        // hand selected: no ghost
        assert_eq!(plan.commands.len(), tiles + 1);
    }

    #[test]
    fn ghost_appears_with_a_placement_tool() {
        let world = World::flat();
        let plan = build_frame_plan(&world, &aimed_camera(), ToolId::Grass);

        let ghost = plan
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Ghost {
                    cell,
                    tool,
                    draw_mode,
                    blend,
                    ..
                } => Some((*cell, *tool, *draw_mode, *blend)),
                _ => None,
            })
            .expect("ghost command");

        assert_eq!(ghost.0, P3::new(5, 5, 4));
        assert_eq!(ghost.1, ToolId::Grass);
        assert_eq!(ghost.2, DrawMode::TopSide);
        assert_eq!(ghost.3, GHOST_BLEND);
    }

    #[test]
    fn no_ghost_for_action_tools_or_out_of_bounds_aims() {
        let world = World::flat();

        let plan = build_frame_plan(&world, &aimed_camera(), ToolId::Pickaxe);
        assert!(!plan
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Ghost { .. })));

        // aiming below the grid floor
        let mut state = CameraState::new(800, 600);
        state
            .camera
            .look_at(P3::new(5.0, 0.0, 5.0), P3::new(5.0, -10.0, 5.0));
        let plan = build_frame_plan(&world, &state, ToolId::Dirt);
        assert!(!plan
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Ghost { .. })));
    }

    #[test]
    fn pickaxe_highlights_the_aimed_tile() {
        let mut world = World::flat();
        world.set_type(5, 5, 4, ToolId::Brick);

        let plan = build_frame_plan(&world, &aimed_camera(), ToolId::Pickaxe);

        for command in &plan.commands {
            if let DrawCommand::Tile { cell, blend, .. } = command {
                if *cell == P3::new(5, 5, 4) {
                    assert_eq!(*blend, DIG_HIGHLIGHT_BLEND);
                } else {
                    assert_eq!(*blend, NEUTRAL_BLEND);
                }
            }
        }
    }

    #[test]
    fn highlight_requires_the_pickaxe() {
        let mut world = World::flat();
        world.set_type(5, 5, 4, ToolId::Brick);

        let plan = build_frame_plan(&world, &aimed_camera(), ToolId::Dirt);

        assert!(plan.commands.iter().all(|c| match c {
            DrawCommand::Tile { blend, .. } => *blend == NEUTRAL_BLEND,
            _ => true,
        }));
    }
}
