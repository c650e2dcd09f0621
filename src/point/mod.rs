mod collection;

pub use collection::PointCollection;

use crate::color::Color;
use crate::error::{PointError, Result};
use crate::math::Point3;

/// Display radius given to points that do not specify one.
pub const DEFAULT_RADIUS: f64 = 0.07;

/// A labeled location in space with display attributes.
///
/// Positions are usually planar (`z == 0`) but the full 3D distance is
/// used everywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    position: Point3,
    radius: f64,
    color: Color,
}

impl Point {
    /// Creates a new point.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is not positive and finite, or if any
    /// coordinate of `position` is not finite.
    pub fn new(position: Point3, radius: f64, color: Color) -> Result<Self> {
        if !position.iter().all(|c| c.is_finite()) {
            return Err(
                PointError::NonFinitePosition(position.x, position.y, position.z).into(),
            );
        }
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(PointError::NonPositiveRadius(radius).into());
        }
        Ok(Self {
            position,
            radius,
            color,
        })
    }

    /// Creates a point with the default radius and color.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is not finite.
    pub fn at(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::new(Point3::new(x, y, z), DEFAULT_RADIUS, Color::default())
    }

    /// Returns the position of the point.
    #[must_use]
    pub fn position(&self) -> &Point3 {
        &self.position
    }

    /// Returns the display radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the display color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FacemeshError;

    #[test]
    fn new_with_valid_values() {
        let p = Point::new(Point3::new(1.0, 2.0, 0.0), 0.1, Color::TEXT).unwrap();
        assert_eq!(p.position(), &Point3::new(1.0, 2.0, 0.0));
        assert!((p.radius() - 0.1).abs() < f64::EPSILON);
        assert_eq!(p.color(), Color::TEXT);
    }

    #[test]
    fn at_uses_defaults() {
        let p = Point::at(0.0, 0.0, 0.0).unwrap();
        assert!((p.radius() - DEFAULT_RADIUS).abs() < f64::EPSILON);
        assert_eq!(p.color(), Color::WHITE);
    }

    #[test]
    fn zero_radius_fails() {
        let result = Point::new(Point3::origin(), 0.0, Color::WHITE);
        assert!(matches!(
            result,
            Err(FacemeshError::Point(PointError::NonPositiveRadius(_)))
        ));
    }

    #[test]
    fn negative_and_nan_radius_fail() {
        assert!(Point::new(Point3::origin(), -0.5, Color::WHITE).is_err());
        assert!(Point::new(Point3::origin(), f64::NAN, Color::WHITE).is_err());
        assert!(Point::new(Point3::origin(), f64::INFINITY, Color::WHITE).is_err());
    }

    #[test]
    fn non_finite_position_fails() {
        let result = Point::at(f64::NAN, 0.0, 0.0);
        assert!(matches!(
            result,
            Err(FacemeshError::Point(PointError::NonFinitePosition(..)))
        ));
        assert!(Point::at(0.0, f64::INFINITY, 0.0).is_err());
    }
}
