mod builder;
mod style;

pub use builder::{NeighborCount, ProximityMeshBuilder};
pub use style::EdgeStyle;

/// A connection from a point to one of its nearest neighbours.
///
/// Edges are directional: `from` selected `to` as a near neighbour. When two
/// points select each other the pair appears twice, once per direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Index of the source point in its collection.
    pub from: usize,
    /// Index of the selected neighbour.
    pub to: usize,
    pub style: EdgeStyle,
}

impl Edge {
    /// Creates an edge from `from` to `to`.
    #[must_use]
    pub fn new(from: usize, to: usize, style: EdgeStyle) -> Self {
        Self { from, to, style }
    }
}
