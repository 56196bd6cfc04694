//! # Draw Mode Module
//!
//! Defines the texturing strategy a tile's render uses. The renderer keys
//! its draw call on this tag: one texture on all faces, a top/side split,
//! or the six-face skybox.

use num_derive::FromPrimitive;

use super::ToolTag;

/// The texturing strategy for a tile, as consumed by the render dispatcher.
///
/// The integer values are fixed because they appear in save files alongside
/// the tile type tags.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum DrawMode {
    /// One texture applied to all six faces.
    Uniform = 0,

    /// One texture on the top face, another on the remaining five.
    TopSide = 1,

    /// Six distinct faces, drawn inward around the viewer.
    Skybox = 2,
}

impl Default for DrawMode {
    fn default() -> Self {
        DrawMode::Uniform
    }
}

impl DrawMode {
    /// Decodes a raw tag into a `DrawMode`, rejecting unknown values.
    pub fn from_tag(tag: ToolTag) -> Option<Self> {
        num::FromPrimitive::from_u8(tag)
    }

    /// The raw tag for this draw mode, as stored in save files.
    pub fn tag(self) -> ToolTag {
        self as ToolTag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for mode in [DrawMode::Uniform, DrawMode::TopSide, DrawMode::Skybox] {
            assert_eq!(DrawMode::from_tag(mode.tag()), Some(mode));
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert_eq!(DrawMode::from_tag(3), None);
        assert_eq!(DrawMode::from_tag(255), None);
    }
}
