//! # World Module
//!
//! Provides the `World` struct: a fixed-size 32x32x32 grid of tiles, created
//! once at startup and mutated in place by tool actions.
//!
//! ## Storage
//!
//! Tiles live in one dense vector in x-fastest order (x, then y, then z),
//! mirroring the z/y/x nesting of the save format. A bit vector tracks
//! occupancy alongside the tiles so frame planning and queries can skip
//! empty cells without touching tile data.
//!
//! ## Fill methods
//!
//! Several initial fills are supported, selected by `WORLD_FILL_METHOD`:
//! - `flat`: empty except a dirt ground layer at y == 0 (the default)
//! - `empty`, `solid`: uniform fills for testing
//! - `checkerboard`: alternating cells for testing
//! - `random`: sparse random materials
//! - `perlin`: Perlin-noise terrain with caves and overhangs

use bitvec::prelude::BitVec;
use cgmath::Point3;
use noise::{NoiseFn, Perlin};

use super::tile::{draw_mode::DrawMode, material_for, tool_id::ToolId, Tile};

/// The dimension (width, height, depth) of the world in tiles.
pub const WORLD_SIZE: i32 = 32;
/// The number of tiles in a single 2D plane of the world (WORLD_SIZE²).
pub const WORLD_PLANE_SIZE: i32 = WORLD_SIZE * WORLD_SIZE;
/// The total number of tiles in the world (WORLD_SIZE³).
pub const WORLD_VOLUME: i32 = WORLD_PLANE_SIZE * WORLD_SIZE;

/// The fill method used by `World::new`.
///
/// Possible values: "flat", "empty", "solid", "checkerboard", "random",
/// "perlin". Anything else falls back to "flat".
const WORLD_FILL_METHOD: &str = "flat";

/// Threshold above which Perlin noise is considered solid for the terrain fill.
pub const PERLIN_POSITIVE_THRESHOLD: f64 = 0.2;
/// Threshold below which Perlin noise is considered empty for the terrain fill.
pub const PERLIN_NEGATIVE_THRESHOLD: f64 = -0.2;
/// Scaling factor applied to cell coordinates when sampling Perlin noise.
pub const PERLIN_SCALE_FACTOR: f64 = 0.02;

/// Fraction of cells left empty by the random fill.
const RANDOM_FILL_SPARSENESS: f64 = 0.9;

/// Represents the fixed-size voxel world.
///
/// Exactly one tile occupies each grid cell. Mutation never resizes the
/// grid; tool actions only retype cells, and every coordinate is validated
/// against the grid bounds before a cell is touched.
pub struct World {
    /// All tiles in x-fastest order.
    tiles: Vec<Tile>,

    /// One bit per cell, set while the cell holds a material.
    /// Kept in sync by `set_type` and `dig`.
    occupancy: BitVec,
}

impl World {
    /// Creates a world using the configured fill method.
    pub fn new() -> Self {
        match WORLD_FILL_METHOD {
            "flat" => World::flat(),
            "empty" => World::empty(),
            "solid" => World::solid(),
            "checkerboard" => World::checkerboard(),
            "random" => World::random(),
            "perlin" => World::perlin(),
            _ => World::flat(),
        }
    }

    /// Creates a completely empty world.
    pub fn empty() -> Self {
        let mut tiles = Vec::with_capacity(WORLD_VOLUME as usize);
        for z in 0..WORLD_SIZE {
            for y in 0..WORLD_SIZE {
                for x in 0..WORLD_SIZE {
                    tiles.push(Tile::new(Point3::new(x, y, z)));
                }
            }
        }

        World {
            tiles,
            occupancy: BitVec::repeat(false, WORLD_VOLUME as usize),
        }
    }

    /// Creates the default editing world: empty except a dirt ground layer
    /// at y == 0.
    pub fn flat() -> Self {
        let mut world = World::empty();
        for z in 0..WORLD_SIZE {
            for x in 0..WORLD_SIZE {
                world.set_type(x, 0, z, ToolId::Dirt);
            }
        }
        world
    }

    /// Creates a world completely filled with dirt (for testing).
    pub fn solid() -> Self {
        let mut world = World::empty();
        for z in 0..WORLD_SIZE {
            for y in 0..WORLD_SIZE {
                for x in 0..WORLD_SIZE {
                    world.set_type(x, y, z, ToolId::Dirt);
                }
            }
        }
        world
    }

    /// Creates a world with a 3D checkerboard of dirt cells (for testing).
    pub fn checkerboard() -> Self {
        let mut world = World::empty();
        for z in 0..WORLD_SIZE {
            for y in 0..WORLD_SIZE {
                for x in 0..WORLD_SIZE {
                    if (x + y + z) % 2 == 0 {
                        world.set_type(x, y, z, ToolId::Dirt);
                    }
                }
            }
        }
        world
    }

    /// Creates a sparse world of random materials (for testing).
    pub fn random() -> Self {
        let mut world = World::empty();
        for z in 0..WORLD_SIZE {
            for y in 0..WORLD_SIZE {
                for x in 0..WORLD_SIZE {
                    if fastrand::f64() >= RANDOM_FILL_SPARSENESS {
                        world.set_type(x, y, z, ToolId::random_material());
                    }
                }
            }
        }
        world
    }

    /// Creates terrain by thresholding 3D Perlin noise, which yields
    /// natural-looking shapes with caves and overhangs.
    pub fn perlin() -> Self {
        let perlin = Perlin::new(0);
        let mut world = World::empty();
        for z in 0..WORLD_SIZE {
            for y in 0..WORLD_SIZE {
                for x in 0..WORLD_SIZE {
                    let sample = perlin.get([
                        x as f64 * PERLIN_SCALE_FACTOR,
                        y as f64 * PERLIN_SCALE_FACTOR,
                        z as f64 * PERLIN_SCALE_FACTOR,
                    ]);
                    if !(PERLIN_NEGATIVE_THRESHOLD..=PERLIN_POSITIVE_THRESHOLD).contains(&sample) {
                        world.set_type(x, y, z, ToolId::random_material());
                    }
                }
            }
        }
        world
    }

    /// Whether the given cell lies within the grid.
    pub fn contains(&self, cell: Point3<i32>) -> bool {
        cell.x >= 0
            && cell.x < WORLD_SIZE
            && cell.y >= 0
            && cell.y < WORLD_SIZE
            && cell.z >= 0
            && cell.z < WORLD_SIZE
    }

    fn index(x: i32, y: i32, z: i32) -> usize {
        (x + WORLD_SIZE * y + WORLD_PLANE_SIZE * z) as usize
    }

    /// Gets a reference to the tile at the given cell, or `None` if the
    /// coordinates are out of bounds.
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<&Tile> {
        if !self.contains(Point3::new(x, y, z)) {
            return None;
        }
        Some(&self.tiles[Self::index(x, y, z)])
    }

    /// Stamps a placement material into a cell, refreshing the cell's draw
    /// mode from the material table.
    ///
    /// A silent no-op when the coordinates are out of bounds. Action tools
    /// carry no material and are logged and ignored.
    pub fn set_type(&mut self, x: i32, y: i32, z: i32, tool: ToolId) {
        if !self.contains(Point3::new(x, y, z)) {
            return;
        }
        let Some(material) = material_for(tool) else {
            log::warn!("set_type called with non-material tool {tool:?}");
            return;
        };

        let index = Self::index(x, y, z);
        let tile = &mut self.tiles[index];
        tile.tool = tool;
        tile.draw_mode = material.draw_mode;
        self.occupancy.set(index, true);
    }

    /// Clears a cell back to empty. Idempotent, and a silent no-op when the
    /// coordinates are out of bounds.
    ///
    /// Only the type is cleared; the stale draw mode is left in place, as
    /// it is ignored for empty cells.
    pub fn dig(&mut self, x: i32, y: i32, z: i32) {
        if !self.contains(Point3::new(x, y, z)) {
            return;
        }
        let index = Self::index(x, y, z);
        self.tiles[index].tool = ToolId::None;
        self.occupancy.set(index, false);
    }

    /// Overwrites a cell's type and draw mode wholesale, bypassing the
    /// material table. Used when restoring a snapshot, which carries draw
    /// modes for every cell including empty ones. A no-op out of bounds.
    pub fn overwrite_cell(&mut self, x: i32, y: i32, z: i32, tool: ToolId, draw_mode: DrawMode) {
        if !self.contains(Point3::new(x, y, z)) {
            return;
        }
        let index = Self::index(x, y, z);
        let tile = &mut self.tiles[index];
        tile.tool = tool;
        tile.draw_mode = draw_mode;
        self.occupancy.set(index, tool != ToolId::None);
    }

    /// Whether the cell at the given coordinates holds a material.
    /// Out-of-bounds cells read as unoccupied.
    pub fn is_occupied(&self, x: i32, y: i32, z: i32) -> bool {
        if !self.contains(Point3::new(x, y, z)) {
            return false;
        }
        self.occupancy[Self::index(x, y, z)]
    }

    /// The number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupancy.count_ones()
    }
}

impl Default for World {
    fn default() -> Self {
        World::new()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn flat_world_is_dirt_exactly_at_ground_level() {
        let world = World::flat();
        for z in 0..WORLD_SIZE {
            for y in 0..WORLD_SIZE {
                for x in 0..WORLD_SIZE {
                    let tile = world.get(x, y, z).unwrap();
                    if y == 0 {
                        assert_eq!(tile.tool, ToolId::Dirt);
                    } else {
                        assert_eq!(tile.tool, ToolId::None);
                    }
                }
            }
        }
        assert_eq!(world.occupied_count(), WORLD_PLANE_SIZE as usize);
    }

    #[test]
    fn dig_clears_and_is_idempotent() {
        let mut world = World::flat();
        assert!(world.is_occupied(4, 0, 9));

        world.dig(4, 0, 9);
        assert_eq!(world.get(4, 0, 9).unwrap().tool, ToolId::None);
        assert!(!world.is_occupied(4, 0, 9));

        world.dig(4, 0, 9);
        assert_eq!(world.get(4, 0, 9).unwrap().tool, ToolId::None);
    }

    #[test]
    fn set_type_stamps_material_and_draw_mode() {
        let mut world = World::empty();
        world.set_type(1, 2, 3, ToolId::Grass);

        let tile = world.get(1, 2, 3).unwrap();
        assert_eq!(tile.tool, ToolId::Grass);
        assert_eq!(tile.draw_mode, DrawMode::TopSide);
        assert!(world.is_occupied(1, 2, 3));
        assert_eq!(world.occupied_count(), 1);
    }

    #[test_case(-1, 0, 0)]
    #[test_case(0, -1, 0)]
    #[test_case(0, 0, -1)]
    #[test_case(WORLD_SIZE, 0, 0)]
    #[test_case(0, WORLD_SIZE, 0)]
    #[test_case(0, 0, WORLD_SIZE)]
    fn out_of_bounds_actions_are_no_ops(x: i32, y: i32, z: i32) {
        let mut world = World::flat();
        let before = world.occupied_count();

        world.set_type(x, y, z, ToolId::Brick);
        world.dig(x, y, z);

        assert!(world.get(x, y, z).is_none());
        assert_eq!(world.occupied_count(), before);
    }

    #[test]
    fn action_tools_do_not_stamp_cells() {
        let mut world = World::empty();
        world.set_type(0, 0, 0, ToolId::Pickaxe);
        world.set_type(0, 0, 0, ToolId::None);
        assert_eq!(world.occupied_count(), 0);
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let world = World::checkerboard();
        assert!(world.is_occupied(0, 0, 0));
        assert!(!world.is_occupied(1, 0, 0));
        assert!(world.is_occupied(1, 1, 0));
        assert_eq!(world.occupied_count(), WORLD_VOLUME as usize / 2);
    }
}
