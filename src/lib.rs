pub mod color;
pub mod error;
pub mod math;
pub mod mesh;
pub mod point;
pub mod presentation;
pub mod store;

#[cfg(test)]
mod test_support;

pub use color::Color;
pub use error::{FacemeshError, Result};
pub use mesh::{Edge, EdgeStyle, ProximityMeshBuilder};
pub use point::{Point, PointCollection};
pub use store::{LoadOptions, PointStore};
