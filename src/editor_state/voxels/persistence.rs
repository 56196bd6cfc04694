//! # World Persistence Module
//!
//! Versioned save/load for the world grid.
//!
//! A snapshot records the format version, the grid dimensions, and two flat
//! arrays of raw tags (tile types and draw modes) in z-major order, matching
//! the grid's own layout. Placement transforms are derivable from cell
//! coordinates and are excluded by design.
//!
//! Loading validates the version, the dimensions, and every tag before any
//! cell is touched, so a rejected file leaves the world unchanged.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tile::{draw_mode::DrawMode, tool_id::ToolId, ToolTag};
use super::world::{World, WORLD_SIZE};

/// The current save format version. Bumped whenever the record layout
/// changes shape.
pub const SAVE_FORMAT_VERSION: u32 = 1;

/// A serializable snapshot of the world grid.
///
/// `types` and `draw_modes` hold one raw tag per cell in x-fastest
/// (z-major) order. Both arrays always cover every cell, including empty
/// ones, so a restore overwrites the whole grid in place.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WorldSave {
    /// The format version this snapshot was written with.
    pub version: u32,
    /// Grid dimensions as [x, y, z] extents.
    pub dimensions: [u32; 3],
    /// Tile type tags, one per cell.
    pub types: Vec<ToolTag>,
    /// Draw mode tags, one per cell.
    pub draw_modes: Vec<ToolTag>,
}

/// Errors surfaced by save encoding and load validation.
///
/// None of these are recoverable by retrying; the session loop logs them
/// and carries on with the world it has.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The file was written by an unknown format version.
    #[error("unsupported save format version {found}, expected {SAVE_FORMAT_VERSION}")]
    UnsupportedVersion {
        /// The version tag found in the file.
        found: u32,
    },

    /// The file's grid dimensions do not match this world.
    #[error("save dimensions {found:?} do not match world dimensions {expected:?}")]
    DimensionMismatch {
        /// The dimensions this world requires.
        expected: [u32; 3],
        /// The dimensions found in the file.
        found: [u32; 3],
    },

    /// A tag array does not cover every cell.
    #[error("save holds {found} {array} tags, expected {expected}")]
    LengthMismatch {
        /// Which array was short or long.
        array: &'static str,
        /// The cell count the dimensions call for.
        expected: usize,
        /// The tag count actually present.
        found: usize,
    },

    /// A cell carries a type tag no tool is registered for.
    #[error("cell {index} holds unknown tile type tag {tag}")]
    UnknownTileType {
        /// Flat index of the offending cell.
        index: usize,
        /// The unrecognized tag.
        tag: ToolTag,
    },

    /// A cell carries an unknown draw mode tag.
    #[error("cell {index} holds unknown draw mode tag {tag}")]
    UnknownDrawMode {
        /// Flat index of the offending cell.
        index: usize,
        /// The unrecognized tag.
        tag: ToolTag,
    },

    /// The file is not valid JSON for the save schema.
    #[error("malformed world file: {0}")]
    Json(#[from] serde_json::Error),

    /// The file could not be read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WorldSave {
    /// Encodes this snapshot as JSON text.
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a snapshot from JSON text. Shape validation against a world
    /// happens later, in [`World::restore`].
    pub fn from_json(text: &str) -> Result<Self, PersistError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl World {
    /// Captures a snapshot of every cell's type and draw mode.
    pub fn snapshot(&self) -> WorldSave {
        let volume = (WORLD_SIZE * WORLD_SIZE * WORLD_SIZE) as usize;
        let mut types = Vec::with_capacity(volume);
        let mut draw_modes = Vec::with_capacity(volume);

        for z in 0..WORLD_SIZE {
            for y in 0..WORLD_SIZE {
                for x in 0..WORLD_SIZE {
                    // get() cannot miss while iterating our own bounds
                    let tile = self.get(x, y, z).expect("in-bounds cell");
                    types.push(tile.tool.tag());
                    draw_modes.push(tile.draw_mode.tag());
                }
            }
        }

        WorldSave {
            version: SAVE_FORMAT_VERSION,
            dimensions: [WORLD_SIZE as u32; 3],
            types,
            draw_modes,
        }
    }

    /// Overwrites every cell's type and draw mode from a snapshot.
    ///
    /// The snapshot is validated in full before the first cell is written:
    /// on any error the world is left exactly as it was.
    pub fn restore(&mut self, save: &WorldSave) -> Result<(), PersistError> {
        if save.version != SAVE_FORMAT_VERSION {
            return Err(PersistError::UnsupportedVersion {
                found: save.version,
            });
        }

        let expected_dimensions = [WORLD_SIZE as u32; 3];
        if save.dimensions != expected_dimensions {
            return Err(PersistError::DimensionMismatch {
                expected: expected_dimensions,
                found: save.dimensions,
            });
        }

        let volume = (WORLD_SIZE * WORLD_SIZE * WORLD_SIZE) as usize;
        if save.types.len() != volume {
            return Err(PersistError::LengthMismatch {
                array: "type",
                expected: volume,
                found: save.types.len(),
            });
        }
        if save.draw_modes.len() != volume {
            return Err(PersistError::LengthMismatch {
                array: "draw mode",
                expected: volume,
                found: save.draw_modes.len(),
            });
        }

        let mut cells = Vec::with_capacity(volume);
        for (index, (&type_tag, &mode_tag)) in
            save.types.iter().zip(save.draw_modes.iter()).enumerate()
        {
            let tool = ToolId::from_tag(type_tag).ok_or(PersistError::UnknownTileType {
                index,
                tag: type_tag,
            })?;
            let draw_mode = DrawMode::from_tag(mode_tag).ok_or(PersistError::UnknownDrawMode {
                index,
                tag: mode_tag,
            })?;
            cells.push((tool, draw_mode));
        }

        let mut cell = cells.into_iter();
        for z in 0..WORLD_SIZE {
            for y in 0..WORLD_SIZE {
                for x in 0..WORLD_SIZE {
                    let (tool, draw_mode) = cell.next().expect("validated cell count");
                    self.overwrite_cell(x, y, z, tool, draw_mode);
                }
            }
        }

        Ok(())
    }
}

/// Writes a world snapshot to a JSON file.
pub fn save_world_file(world: &World, path: &Path) -> Result<(), PersistError> {
    let text = world.snapshot().to_json()?;
    std::fs::write(path, text)?;
    log::info!("saved world to {}", path.display());
    Ok(())
}

/// Reads a JSON snapshot and restores it into the given world.
///
/// The world is untouched when the file is missing, malformed, or fails
/// shape validation.
pub fn load_world_file(world: &mut World, path: &Path) -> Result<(), PersistError> {
    let text = std::fs::read_to_string(path)?;
    let save = WorldSave::from_json(&text)?;
    world.restore(&save)?;
    log::info!("loaded world from {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor_state::voxels::world::WORLD_VOLUME;

    fn edited_world() -> World {
        let mut world = World::flat();
        world.set_type(3, 1, 3, ToolId::Grass);
        world.set_type(4, 1, 3, ToolId::Brick);
        world.dig(5, 0, 5);
        world
    }

    fn grids_match(a: &World, b: &World) -> bool {
        for z in 0..WORLD_SIZE {
            for y in 0..WORLD_SIZE {
                for x in 0..WORLD_SIZE {
                    let (ta, tb) = (a.get(x, y, z).unwrap(), b.get(x, y, z).unwrap());
                    if ta.tool != tb.tool || ta.draw_mode != tb.draw_mode {
                        return false;
                    }
                }
            }
        }
        true
    }

    #[test]
    fn snapshot_covers_every_cell() {
        let save = World::flat().snapshot();
        assert_eq!(save.version, SAVE_FORMAT_VERSION);
        assert_eq!(save.dimensions, [WORLD_SIZE as u32; 3]);
        assert_eq!(save.types.len(), WORLD_VOLUME as usize);
        assert_eq!(save.draw_modes.len(), WORLD_VOLUME as usize);
    }

    #[test]
    fn snapshot_restore_round_trips() {
        let source = edited_world();
        let save = source.snapshot();

        let mut target = World::flat();
        target.restore(&save).unwrap();

        assert!(grids_match(&source, &target));
        assert_eq!(target.occupied_count(), source.occupied_count());
    }

    #[test]
    fn json_round_trips() {
        let save = edited_world().snapshot();
        let text = save.to_json().unwrap();
        assert_eq!(WorldSave::from_json(&text).unwrap(), save);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            WorldSave::from_json("{\"version\": 1,"),
            Err(PersistError::Json(_))
        ));
    }

    #[test]
    fn unknown_version_is_rejected_without_mutation() {
        let mut save = World::flat().snapshot();
        save.version = 2;

        let mut target = edited_world();
        let pristine = edited_world();

        assert!(matches!(
            target.restore(&save),
            Err(PersistError::UnsupportedVersion { found: 2 })
        ));
        assert!(grids_match(&target, &pristine));
    }

    #[test]
    fn foreign_dimensions_are_rejected_without_mutation() {
        let mut save = World::flat().snapshot();
        save.dimensions = [16, 16, 16];

        let mut target = edited_world();
        let pristine = edited_world();

        assert!(matches!(
            target.restore(&save),
            Err(PersistError::DimensionMismatch { .. })
        ));
        assert!(grids_match(&target, &pristine));
    }

    #[test]
    fn short_tag_arrays_are_rejected() {
        let mut save = World::flat().snapshot();
        save.types.pop();

        assert!(matches!(
            World::flat().restore(&save),
            Err(PersistError::LengthMismatch { array: "type", .. })
        ));
    }

    #[test]
    fn unknown_tags_are_rejected_without_mutation() {
        let mut save = World::flat().snapshot();
        save.types[7] = 42;

        let mut target = edited_world();
        let pristine = edited_world();

        assert!(matches!(
            target.restore(&save),
            Err(PersistError::UnknownTileType { index: 7, tag: 42 })
        ));
        assert!(grids_match(&target, &pristine));

        let mut save = World::flat().snapshot();
        save.draw_modes[9] = 5;
        assert!(matches!(
            target.restore(&save),
            Err(PersistError::UnknownDrawMode { index: 9, tag: 5 })
        ));
    }

    #[test]
    fn file_round_trip() {
        let dir = std::env::temp_dir().join("tileworld-persistence-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("world.json");

        let source = edited_world();
        save_world_file(&source, &path).unwrap();

        let mut target = World::flat();
        load_world_file(&mut target, &path).unwrap();

        assert!(grids_match(&source, &target));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut world = World::flat();
        assert!(matches!(
            load_world_file(&mut world, Path::new("/nonexistent/world.json")),
            Err(PersistError::Io(_))
        ));
    }
}
