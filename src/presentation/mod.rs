//! Handoff to the animation layer.
//!
//! Nothing in the point store or mesh builder depends on this module. It
//! holds the explicit per-reel configuration and turns points and edges
//! into plain draw primitives.

mod config;
mod drawing;

pub use config::PresentationConfig;
pub use drawing::{Dot, MeshDrawing, Segment};
