use super::PresentationConfig;
use crate::color::Color;
use crate::error::{MeshError, Result};
use crate::math::Point3;
use crate::mesh::Edge;
use crate::point::PointCollection;

/// A filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub center: Point3,
    pub radius: f64,
    pub color: Color,
}

/// A straight stroke between two positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point3,
    pub end: Point3,
    pub color: Color,
    pub stroke_width: f64,
}

/// Draw primitives for a point collection and its mesh edges.
///
/// Dots follow collection order and segments follow edge order, so
/// rendering them in sequence reproduces the construction order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshDrawing {
    pub dots: Vec<Dot>,
    pub segments: Vec<Segment>,
}

impl MeshDrawing {
    /// Resolves `edges` against `points`.
    ///
    /// # Errors
    ///
    /// Returns `MeshError::EdgeOutOfBounds` if an edge refers to an index
    /// outside `points`.
    pub fn new(points: &PointCollection, edges: &[Edge]) -> Result<Self> {
        let dots = points
            .iter()
            .map(|p| Dot {
                center: *p.position(),
                radius: p.radius(),
                color: p.color(),
            })
            .collect();

        let endpoint = |index: usize| {
            points
                .get(index)
                .map(|p| *p.position())
                .ok_or(MeshError::EdgeOutOfBounds {
                    index,
                    len: points.len(),
                })
        };
        let segments = edges
            .iter()
            .map(|edge| {
                Ok(Segment {
                    start: endpoint(edge.from)?,
                    end: endpoint(edge.to)?,
                    color: edge.style.color(),
                    stroke_width: edge.style.stroke_width(),
                })
            })
            .collect::<std::result::Result<Vec<_>, MeshError>>()?;

        Ok(Self { dots, segments })
    }

    /// Returns a copy mapped into the pixel space of `config`.
    ///
    /// Radii and stroke widths scale by [`PresentationConfig::pixels_per_unit`].
    /// The `z` coordinate is dropped.
    #[must_use]
    pub fn to_pixels(&self, config: &PresentationConfig) -> Self {
        let scale = config.pixels_per_unit();
        let flatten = |p: &Point3| {
            let px = config.to_pixel(p);
            Point3::new(px.x, px.y, 0.0)
        };

        Self {
            dots: self
                .dots
                .iter()
                .map(|d| Dot {
                    center: flatten(&d.center),
                    radius: d.radius * scale,
                    color: d.color,
                })
                .collect(),
            segments: self
                .segments
                .iter()
                .map(|s| Segment {
                    start: flatten(&s.start),
                    end: flatten(&s.end),
                    color: s.color,
                    stroke_width: s.stroke_width * scale,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::FacemeshError;
    use crate::mesh::{EdgeStyle, ProximityMeshBuilder};
    use crate::point::Point;

    fn triangle() -> PointCollection {
        PointCollection::new(vec![
            Point::new(Point3::new(0.0, 0.0, 0.0), 0.1, Color::TEXT).unwrap(),
            Point::at(1.0, 0.0, 0.0).unwrap(),
            Point::at(0.0, 2.0, 0.0).unwrap(),
        ])
    }

    #[test]
    fn one_dot_per_point_and_segment_per_edge() {
        let points = triangle();
        let style = EdgeStyle::new(Color::LOGO_GREEN, 3.0).unwrap();
        let edges = ProximityMeshBuilder::new(1, style).build(&points).unwrap();
        let drawing = MeshDrawing::new(&points, &edges).unwrap();

        assert_eq!(drawing.dots.len(), 3);
        assert_eq!(drawing.dots[0].color, Color::TEXT);
        assert_eq!(drawing.segments.len(), 3);

        // Point 2 is closest to point 0.
        let last = drawing.segments[2];
        assert_eq!(last.start, Point3::new(0.0, 2.0, 0.0));
        assert_eq!(last.end, Point3::origin());
        assert_eq!(last.color, Color::LOGO_GREEN);
        assert_relative_eq!(last.stroke_width, 3.0);
    }

    #[test]
    fn out_of_bounds_edge_fails() {
        let edges = [Edge::new(0, 7, EdgeStyle::default())];
        let result = MeshDrawing::new(&triangle(), &edges);
        assert!(matches!(
            result,
            Err(FacemeshError::Mesh(MeshError::EdgeOutOfBounds { index: 7, len: 3 }))
        ));
    }

    #[test]
    fn pixel_mapping_scales_radii() {
        let config = PresentationConfig::default();
        let drawing = MeshDrawing::new(&triangle(), &[]).unwrap().to_pixels(&config);

        let dot = drawing.dots[0];
        assert_relative_eq!(dot.center.x, 540.0);
        assert_relative_eq!(dot.center.y, 960.0);
        assert_relative_eq!(dot.radius, 12.0, epsilon = 1e-9);

        // One unit up is 120 pixels up.
        assert_relative_eq!(drawing.dots[2].center.y, 720.0);
    }

    #[test]
    fn pixel_mapping_scales_segments() {
        let points = PointCollection::new(vec![
            Point::at(0.0, 0.0, 0.0).unwrap(),
            Point::at(1.0, 1.0, 0.0).unwrap(),
        ]);
        let style = EdgeStyle::new(Color::WHITE, 0.02).unwrap();
        let edges = ProximityMeshBuilder::new(1, style).build(&points).unwrap();
        let drawing = MeshDrawing::new(&points, &edges)
            .unwrap()
            .to_pixels(&PresentationConfig::default());

        let seg = drawing.segments[0];
        assert_relative_eq!(seg.start.x, 540.0);
        assert_relative_eq!(seg.start.y, 960.0);
        assert_relative_eq!(seg.end.x, 660.0);
        assert_relative_eq!(seg.end.y, 840.0);
        assert_relative_eq!(seg.stroke_width, 2.4, epsilon = 1e-9);
        assert_relative_eq!(drawing.dots[0].radius, 8.4, epsilon = 1e-9);
    }
}
