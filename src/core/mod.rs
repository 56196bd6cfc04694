//! # Core Module
//!
//! Fundamental resource-management types used throughout the editor core.
//!
//! The editor is single-threaded and frame-driven, so the only primitive
//! needed here is `StResource`: a reference-counted, interior-mutable
//! container that lets the editor state and its collaborators (frame
//! planner, host renderer) share the world without handing out
//! long-lived borrows.

pub mod st_resource;

pub use st_resource::StResource;
