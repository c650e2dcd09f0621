use serde::{Deserialize, Serialize};

use super::LoadOptions;
use crate::color::Color;
use crate::error::Result;
use crate::math::Point3;
use crate::point::Point;

/// On-disk form of one point: `{ "pos": [x, y, z], "radius": r, "color": "#RRGGBB" }`.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct PointRecord {
    pos: [f64; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
}

impl From<&Point> for PointRecord {
    fn from(point: &Point) -> Self {
        let p = point.position();
        Self {
            pos: [p.x, p.y, p.z],
            radius: Some(point.radius()),
            color: Some(point.color()),
        }
    }
}

impl PointRecord {
    /// Rebuilds the point, filling absent fields from `options`.
    pub(super) fn into_point(self, options: &LoadOptions) -> Result<Point> {
        let [x, y, z] = self.pos;
        Point::new(
            Point3::new(x, y, z),
            self.radius.unwrap_or(options.radius),
            self.color.unwrap_or(options.color),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn writes_every_field() {
        let point = Point::new(Point3::new(1.5, -2.0, 0.0), 0.2, Color::TEXT).unwrap();
        let json = serde_json::to_string(&PointRecord::from(&point)).unwrap();
        assert_eq!(json, r##"{"pos":[1.5,-2.0,0.0],"radius":0.2,"color":"#383838"}"##);
    }

    #[test]
    fn optional_fields_fall_back_to_options() {
        let record: PointRecord = serde_json::from_str(r#"{"pos":[1,2,3]}"#).unwrap();
        let options = LoadOptions {
            radius: 0.5,
            color: Color::LOGO_GREEN,
        };
        let point = record.into_point(&options).unwrap();
        assert!((point.radius() - 0.5).abs() < f64::EPSILON);
        assert_eq!(point.color(), Color::LOGO_GREEN);
    }

    #[test]
    fn pos_must_have_three_numbers() {
        assert!(serde_json::from_str::<PointRecord>(r#"{"pos":[1,2]}"#).is_err());
        assert!(serde_json::from_str::<PointRecord>(r#"{"pos":[1,2,3,4]}"#).is_err());
        assert!(serde_json::from_str::<PointRecord>(r#"{"pos":["1",2,3]}"#).is_err());
    }

    #[test]
    fn pos_is_required() {
        assert!(serde_json::from_str::<PointRecord>(r#"{"radius":0.1}"#).is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let record: PointRecord =
            serde_json::from_str(r#"{"pos":[0,0,0],"label":"nose tip"}"#).unwrap();
        assert!(record.into_point(&LoadOptions::default()).is_ok());
    }
}
