//! # Voxels Module
//!
//! The world data layer: tiles, the fixed-size grid that holds them, and
//! the versioned save format.

pub mod persistence;
pub mod tile;
pub mod world;
