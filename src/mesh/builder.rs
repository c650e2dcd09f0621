use super::{Edge, EdgeStyle};
use crate::error::{MeshError, Result};
use crate::math::nearest::nearest_indices;
use crate::point::PointCollection;

/// A validated, non-negative neighbour count.
///
/// Counts arriving as signed integers (configuration files, scripting
/// layers) go through [`TryFrom<i64>`] so negative values are rejected
/// before a builder is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct NeighborCount(usize);

impl NeighborCount {
    /// Wraps an unsigned count.
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self(k)
    }

    /// Returns the count.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for NeighborCount {
    fn from(k: usize) -> Self {
        Self(k)
    }
}

impl TryFrom<i64> for NeighborCount {
    type Error = MeshError;

    fn try_from(k: i64) -> std::result::Result<Self, Self::Error> {
        usize::try_from(k)
            .map(Self)
            .map_err(|_| MeshError::InvalidArgument(format!("k must be non-negative, got {k}")))
    }
}

/// Connects every point to its `k` nearest neighbours.
///
/// For each point in collection order, the other points are ranked by
/// Euclidean distance (ties by ascending index) and one [`Edge`] is emitted
/// per selected neighbour, closest first. Points with fewer than `k`
/// neighbours connect to all of them. Mutual neighbours produce two edges.
///
/// This is a brute-force `O(n² log n)` pass meant for landmark-sized inputs.
#[derive(Debug, Clone, Copy)]
pub struct ProximityMeshBuilder {
    k: usize,
    style: EdgeStyle,
}

impl ProximityMeshBuilder {
    /// Creates a new builder connecting each point to `k` neighbours.
    #[must_use]
    pub fn new(k: usize, style: EdgeStyle) -> Self {
        Self { k, style }
    }

    /// Creates a builder from a validated [`NeighborCount`].
    #[must_use]
    pub fn with_count(count: NeighborCount, style: EdgeStyle) -> Self {
        Self::new(count.get(), style)
    }

    /// Returns the number of neighbours selected per point.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the style given to every edge.
    #[must_use]
    pub fn style(&self) -> &EdgeStyle {
        &self.style
    }

    /// Builds the edge list for `points`.
    ///
    /// # Errors
    ///
    /// Returns `MeshError::InvalidArgument` if `k > 0` and `points` is
    /// empty.
    pub fn build(&self, points: &PointCollection) -> Result<Vec<Edge>> {
        if self.k > 0 && points.is_empty() {
            return Err(MeshError::InvalidArgument(format!(
                "cannot select {} neighbours from an empty collection",
                self.k
            ))
            .into());
        }

        let positions = points.positions();
        let per_source = self.k.min(positions.len().saturating_sub(1));
        let mut edges = Vec::with_capacity(positions.len() * per_source);

        for from in 0..positions.len() {
            edges.extend(
                nearest_indices(&positions, from, self.k)
                    .into_iter()
                    .map(|to| Edge::new(from, to, self.style)),
            );
        }

        tracing::debug!(
            points = positions.len(),
            k = self.k,
            edges = edges.len(),
            "built proximity mesh"
        );
        Ok(edges)
    }
}
