use std::ops::Index;

use super::Point;
use crate::math::Point3;

/// An ordered, immutable sequence of points.
///
/// Order is creation or load order. It does not affect neighbour
/// relationships but is preserved through persistence and drives the
/// iteration order of everything derived from the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCollection {
    points: Vec<Point>,
}

impl PointCollection {
    /// Creates a collection keeping the order of `points`.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the collection holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Returns the positions of all points, in order.
    #[must_use]
    pub fn positions(&self) -> Vec<Point3> {
        self.points.iter().map(|p| *p.position()).collect()
    }
}

impl From<Vec<Point>> for PointCollection {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for PointCollection {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for PointCollection {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a PointCollection {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
