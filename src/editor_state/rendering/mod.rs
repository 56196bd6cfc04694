//! # Rendering Interface Module
//!
//! The boundary between the editor core and the host's graphics layer.
//! The core never issues draw calls; it produces a [`frame::FramePlan`]
//! each tick, and a single host-side dispatcher interprets the plan's
//! tagged commands.

pub mod frame;
