//! # Tile Module
//!
//! Core tile-related functionality: the `Tile` cell itself, the tool/material
//! palette, draw modes, and the static material table that maps each
//! placement material to its draw mode and texture keys.

use cgmath::{Matrix4, Point3, Vector3};

use draw_mode::DrawMode;
use tool_id::ToolId;

pub mod draw_mode;
pub mod tool_id;

/// The underlying integer type used to store tool and draw-mode tags in
/// save files.
pub type ToolTag = u8;

/// Half-scale applied to every tile's placement transform. Tiles are unit
/// cubes drawn from a ±1 model, so a half-scale of 0.5 yields one tile per
/// grid cell.
pub const TILE_HALF_SCALE: f32 = 0.5;

/// The default flat tint of a tile.
pub const OPAQUE_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// The texture keys a material's draw call binds, organized by draw mode.
///
/// Keys name decoded images supplied by the host's image loader; the core
/// never touches pixel data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextureSet {
    /// One texture on all faces.
    Uniform(&'static str),

    /// Separate top and side textures.
    TopSide {
        /// Texture for the top face.
        top: &'static str,
        /// Texture for the remaining faces.
        side: &'static str,
    },

    /// Six cubemap faces.
    Skybox {
        /// Negative-X face.
        left: &'static str,
        /// Positive-X face.
        right: &'static str,
        /// Positive-Z face.
        front: &'static str,
        /// Negative-Z face.
        back: &'static str,
        /// Positive-Y face.
        top: &'static str,
        /// Negative-Y face.
        bottom: &'static str,
    },
}

/// A material descriptor: how a tile of a given type is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Material {
    /// The draw call strategy for this material.
    pub draw_mode: DrawMode,
    /// The texture keys the draw call binds.
    pub textures: TextureSet,
}

/// Maps each material tag to its descriptor.
///
/// Action tools (`None`, `Pickaxe`) deliberately have no entry: they never
/// appear as a drawn material.
static MATERIALS: &[(ToolId, Material)] = &[
    (
        ToolId::Dirt,
        Material {
            draw_mode: DrawMode::Uniform,
            textures: TextureSet::Uniform("dirt.png"),
        },
    ),
    (
        ToolId::Sand,
        Material {
            draw_mode: DrawMode::Uniform,
            textures: TextureSet::Uniform("sand.png"),
        },
    ),
    (
        ToolId::Brick,
        Material {
            draw_mode: DrawMode::Uniform,
            textures: TextureSet::Uniform("brick.png"),
        },
    ),
    (
        ToolId::Iron,
        Material {
            draw_mode: DrawMode::Uniform,
            textures: TextureSet::Uniform("iron_block.png"),
        },
    ),
    (
        ToolId::Gold,
        Material {
            draw_mode: DrawMode::Uniform,
            textures: TextureSet::Uniform("gold_block.png"),
        },
    ),
    (
        ToolId::MetalSheet,
        Material {
            draw_mode: DrawMode::Uniform,
            textures: TextureSet::Uniform("metal_sheet.png"),
        },
    ),
    (
        ToolId::Grass,
        Material {
            draw_mode: DrawMode::TopSide,
            textures: TextureSet::TopSide {
                top: "grass_top.png",
                side: "grass_side.png",
            },
        },
    ),
    (
        ToolId::LogAcacia,
        Material {
            draw_mode: DrawMode::TopSide,
            textures: TextureSet::TopSide {
                top: "log_acacia_top.png",
                side: "log_acacia.png",
            },
        },
    ),
    (
        ToolId::Skybox,
        Material {
            draw_mode: DrawMode::Skybox,
            textures: TextureSet::Skybox {
                left: "SkyCubemap_NegativeX.png",
                right: "SkyCubemap_PositiveX.png",
                front: "SkyCubemap_PositiveZ.png",
                back: "SkyCubemap_NegativeZ.png",
                top: "SkyCubemap_PositiveY.png",
                bottom: "SkyCubemap_NegativeY.png",
            },
        },
    ),
];

/// Looks up the material descriptor for a tool tag.
///
/// Returns `None` for action tools, which have nothing to draw.
pub fn material_for(tool: ToolId) -> Option<&'static Material> {
    MATERIALS
        .iter()
        .find(|(id, _)| *id == tool)
        .map(|(_, material)| material)
}

/// Represents one voxel grid cell.
///
/// A tile always exists at its cell; it is retyped by tool actions, never
/// created or destroyed. The placement transform is fixed at world
/// initialization and excluded from persistence.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    /// The material tag of this cell. `ToolId::None` marks an empty cell.
    pub tool: ToolId,
    /// The texturing strategy the render dispatcher selects for this cell.
    pub draw_mode: DrawMode,
    /// Flat RGBA tint, normally opaque white.
    pub tint: [f32; 4],
    /// The cell's world translation.
    translation: Vector3<f32>,
}

impl Tile {
    /// Creates an empty tile placed at the given grid cell.
    pub fn new(cell: Point3<i32>) -> Self {
        Tile {
            tool: ToolId::None,
            draw_mode: DrawMode::default(),
            tint: OPAQUE_WHITE,
            translation: Vector3::new(cell.x as f32, cell.y as f32, cell.z as f32),
        }
    }

    /// Whether this cell is empty.
    pub fn is_empty(&self) -> bool {
        self.tool == ToolId::None
    }

    /// The model matrix for this tile's draw call: translate to the cell,
    /// then scale the ±1 cube model down to a unit cube.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.translation) * Matrix4::from_scale(TILE_HALF_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(ToolId::Dirt, DrawMode::Uniform)]
    #[test_case(ToolId::Brick, DrawMode::Uniform)]
    #[test_case(ToolId::Grass, DrawMode::TopSide)]
    #[test_case(ToolId::LogAcacia, DrawMode::TopSide)]
    #[test_case(ToolId::Skybox, DrawMode::Skybox)]
    fn materials_carry_their_draw_mode(tool: ToolId, expected: DrawMode) {
        assert_eq!(material_for(tool).unwrap().draw_mode, expected);
    }

    #[test]
    fn action_tools_have_no_material() {
        assert!(material_for(ToolId::None).is_none());
        assert!(material_for(ToolId::Pickaxe).is_none());
    }

    #[test]
    fn every_placement_material_has_a_descriptor() {
        for tool in tool_id::PLACEMENT_MATERIALS {
            assert!(material_for(tool).is_some(), "{tool:?} missing");
        }
    }

    #[test]
    fn new_tiles_are_empty_and_white() {
        let tile = Tile::new(Point3::new(3, 4, 5));
        assert!(tile.is_empty());
        assert_eq!(tile.tint, OPAQUE_WHITE);
    }

    #[test]
    fn model_matrix_places_the_cell() {
        let tile = Tile::new(Point3::new(2, 0, 7));
        let matrix = tile.model_matrix();

        // translation column
        assert_relative_eq!(matrix.w.x, 2.0);
        assert_relative_eq!(matrix.w.y, 0.0);
        assert_relative_eq!(matrix.w.z, 7.0);
        // half-scale on the diagonal
        assert_relative_eq!(matrix.x.x, TILE_HALF_SCALE);
        assert_relative_eq!(matrix.y.y, TILE_HALF_SCALE);
        assert_relative_eq!(matrix.z.z, TILE_HALF_SCALE);
    }
}
