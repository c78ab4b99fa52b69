use crate::foundation::error::{StarfieldError, StarfieldResult};

pub use kurbo::{Affine, BezPath, Circle, Point, Rect, Vec2};

/// Logical drawing area plus the device-pixel-ratio scale applied to the
/// backing buffer.
///
/// All simulation and projection math works in logical coordinates; only the
/// surface multiplies by `scale` when sizing its pixel buffer and drawing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scale: f64, // device pixel ratio
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> StarfieldResult<Self> {
        Self::with_scale(width, height, 1.0)
    }

    pub fn with_scale(width: f64, height: f64, scale: f64) -> StarfieldResult<Self> {
        if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
            return Err(StarfieldError::validation(
                "viewport width/height must be finite and > 0",
            ));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(StarfieldError::validation(
                "viewport scale must be finite and > 0",
            ));
        }
        Ok(Self {
            width,
            height,
            scale,
        })
    }

    /// Projection center in logical coordinates.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Backing-buffer width in physical pixels.
    pub fn physical_width(self) -> u32 {
        (self.width * self.scale).round().max(1.0) as u32
    }

    /// Backing-buffer height in physical pixels.
    pub fn physical_height(self) -> u32 {
        (self.height * self.scale).round().max(1.0) as u32
    }
}

/// Straight-alpha RGBA8 color. Surfaces premultiply on their way to pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
