use crate::color::Color;
use crate::error::{MeshError, Result};

/// Display attributes shared by the edges of one mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    color: Color,
    stroke_width: f64,
}

impl EdgeStyle {
    /// Creates a new edge style.
    ///
    /// # Errors
    ///
    /// Returns an error if `stroke_width` is not positive and finite.
    pub fn new(color: Color, stroke_width: f64) -> Result<Self> {
        if !(stroke_width > 0.0 && stroke_width.is_finite()) {
            return Err(MeshError::InvalidArgument(format!(
                "stroke width must be positive, got {stroke_width}"
            ))
            .into());
        }
        Ok(Self {
            color,
            stroke_width,
        })
    }

    /// Returns the edge color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }
}

impl Default for EdgeStyle {
    /// Thin white lines, 0.02 scene units wide.
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            stroke_width: 0.02,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_with_valid_width() {
        let style = EdgeStyle::new(Color::LOGO_GREEN, 2.0).unwrap();
        assert_eq!(style.color(), Color::LOGO_GREEN);
        assert!((style.stroke_width() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn new_with_zero_width_fails() {
        let result = EdgeStyle::new(Color::WHITE, 0.0);
        assert!(result.is_err());
    }

    #[test]
    fn new_with_negative_width_fails() {
        let result = EdgeStyle::new(Color::WHITE, -1.0);
        assert!(result.is_err());
    }

    #[test]
    fn new_with_nan_width_fails() {
        assert!(EdgeStyle::new(Color::WHITE, f64::NAN).is_err());
    }
}
