//! # Tool Identifier Module
//!
//! Defines the palette of tools/materials a player can select. The same
//! enumerated tag serves double duty, exactly as in the classic editors
//! this crate models: it names the tool in the player's hand and it names
//! the material stamped into a tile on a build action.

use num_derive::FromPrimitive;
use phf::phf_map;

use super::ToolTag;

/// Enumerates every tool and material tag the editor understands.
///
/// The integer values are the wire/save representation and are fixed:
/// action tools occupy the low range, placement materials start at 10,
/// and the skybox texture tag sits at 99. `FromPrimitive` allows
/// conversion from the raw tags found in save files.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum ToolId {
    /// The empty hand. A tile carrying this tag is an empty cell.
    None = 0,

    /// The dig tool. Clears the aimed cell back to empty.
    Pickaxe = 1,

    /// Plain dirt, the material of the starting ground layer.
    Dirt = 10,

    /// Grass, textured differently on top and sides.
    Grass = 11,

    /// Sand.
    Sand = 12,

    /// Brick.
    Brick = 13,

    /// Iron block.
    Iron = 14,

    /// Gold block.
    Gold = 15,

    /// Riveted metal sheeting.
    MetalSheet = 16,

    /// Acacia log, textured differently on top and sides.
    LogAcacia = 17,

    /// The skybox texture tag. Never selectable from the palette; used
    /// only by the fixed skybox draw at the end of every frame.
    Skybox = 99,
}

/// Maps palette button names to tool tags.
///
/// The keys are the identifiers the host UI uses for its palette buttons,
/// so a button click resolves to a tool with a single lookup.
pub static TOOL_BY_NAME: phf::Map<&'static str, ToolId> = phf_map! {
    "hand" => ToolId::None,
    "pickaxe" => ToolId::Pickaxe,
    "dirt" => ToolId::Dirt,
    "grass" => ToolId::Grass,
    "sand" => ToolId::Sand,
    "brick" => ToolId::Brick,
    "iron" => ToolId::Iron,
    "gold" => ToolId::Gold,
    "metal_sheet" => ToolId::MetalSheet,
    "log_acacia" => ToolId::LogAcacia,
};

/// The placement materials in palette order.
pub const PLACEMENT_MATERIALS: [ToolId; 8] = [
    ToolId::Dirt,
    ToolId::Grass,
    ToolId::Sand,
    ToolId::Brick,
    ToolId::Iron,
    ToolId::Gold,
    ToolId::MetalSheet,
    ToolId::LogAcacia,
];

impl ToolId {
    /// Decodes a raw tag into a `ToolId`.
    ///
    /// Returns `None` for tags that do not name a known tool, which is how
    /// save-file validation rejects foreign data before it reaches the grid.
    pub fn from_tag(tag: ToolTag) -> Option<Self> {
        num::FromPrimitive::from_u8(tag)
    }

    /// The raw tag for this tool, as stored in save files.
    pub fn tag(self) -> ToolTag {
        self as ToolTag
    }

    /// Looks a tool up by its palette button name.
    pub fn from_name(name: &str) -> Option<Self> {
        TOOL_BY_NAME.get(name).copied()
    }

    /// Whether this tool stamps a material into the aimed cell on a click.
    ///
    /// `None` and `Pickaxe` are action tools, and the skybox tag is not a
    /// tool at all.
    pub fn is_placement(self) -> bool {
        PLACEMENT_MATERIALS.contains(&self)
    }

    /// Picks a random placement material.
    ///
    /// Used by the randomized world fills.
    pub fn random_material() -> Self {
        PLACEMENT_MATERIALS[fastrand::usize(..PLACEMENT_MATERIALS.len())]
    }
}
