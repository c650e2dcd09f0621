use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ConfigError, Result, StoreError};
use crate::math::{Point2, Point3};

/// Frame, canvas and palette settings for one rendered reel.
///
/// Scene coordinates have their origin at the frame centre with `y` up and
/// span `frame_width × frame_height` units. Pixel coordinates have their
/// origin at the top-left corner with `y` down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub frame_width: f64,
    pub frame_height: f64,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub background: Color,
    pub text_color: Color,
    pub accent_color: Color,
    pub font: String,
}

impl Default for PresentationConfig {
    /// A 9:16 vertical reel at 1080×1920.
    fn default() -> Self {
        Self {
            frame_width: 9.0,
            frame_height: 16.0,
            pixel_width: 1080,
            pixel_height: 1920,
            background: Color::WHITE,
            text_color: Color::TEXT,
            accent_color: Color::LOGO_GREEN,
            font: "Roboto".to_owned(),
        }
    }
}

impl PresentationConfig {
    /// Reads a configuration from a JSON file. Missing fields keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the file does not exist,
    /// [`StoreError::Format`] if it is not valid JSON,
    /// [`StoreError::Io`] for other read failures, and
    /// [`ConfigError::InvalidConfig`] if the values fail [`Self::validate`].
    #[tracing::instrument(err)]
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = crate::store::read_bytes(path)?;
        let config: Self = serde_json::from_slice(&bytes).map_err(|e| StoreError::Format {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that frame and pixel dimensions are positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let frame_ok = |v: f64| v > 0.0 && v.is_finite();
        if !frame_ok(self.frame_width) {
            return Err(invalid("frame_width", self.frame_width));
        }
        if !frame_ok(self.frame_height) {
            return Err(invalid("frame_height", self.frame_height));
        }
        if self.pixel_width == 0 {
            return Err(invalid("pixel_width", 0));
        }
        if self.pixel_height == 0 {
            return Err(invalid("pixel_height", 0));
        }
        Ok(())
    }

    /// Pixels per scene unit along x.
    #[must_use]
    pub fn pixels_per_unit(&self) -> f64 {
        f64::from(self.pixel_width) / self.frame_width
    }

    /// Maps a scene position to pixel coordinates. `z` is ignored.
    #[must_use]
    pub fn to_pixel(&self, position: &Point3) -> Point2 {
        let sx = f64::from(self.pixel_width) / self.frame_width;
        let sy = f64::from(self.pixel_height) / self.frame_height;
        Point2::new(
            (position.x + self.frame_width * 0.5) * sx,
            (self.frame_height * 0.5 - position.y) * sy,
        )
    }
}

fn invalid(field: &str, value: impl std::fmt::Display) -> crate::error::FacemeshError {
    ConfigError::InvalidConfig(format!("{field} must be positive, got {value}")).into()
}
