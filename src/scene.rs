use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::field::field::FieldParams;
use crate::foundation::core::{Rgba8, Viewport};
use crate::foundation::error::{StarfieldError, StarfieldResult};
use crate::render::shape::StarShape;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Complete description of a starfield scene.
///
/// A pure data model: build it programmatically, or deserialize it from JSON
/// (every field has a default, so a config file only names what it changes).
/// The defaults give the landing-page backdrop on a 1280x720 canvas.
pub struct SceneConfig {
    /// Logical viewport width.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Logical viewport height.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Device pixel ratio applied to the backing buffer.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Particle-collection tunables.
    #[serde(default)]
    pub field: FieldParams,
    /// Pinhole projection strength; larger means more pronounced depth.
    #[serde(default = "default_perspective")]
    pub perspective: f64,
    /// Fill color for the stars.
    #[serde(default = "default_star_color")]
    pub star_color: Rgba8,
    /// Clear color behind the field.
    #[serde(default = "default_background")]
    pub background: Rgba8,
    /// Disc or spiked-polygon rendering.
    #[serde(default)]
    pub shape: StarShape,
    /// Deterministic spawn seed; omit for OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_width() -> f64 {
    1280.0
}

fn default_height() -> f64 {
    720.0
}

fn default_scale() -> f64 {
    1.0
}

fn default_perspective() -> f64 {
    300.0
}

fn default_star_color() -> Rgba8 {
    Rgba8::WHITE
}

fn default_background() -> Rgba8 {
    Rgba8::BLACK
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            scale: default_scale(),
            field: FieldParams::default(),
            perspective: default_perspective(),
            star_color: default_star_color(),
            background: default_background(),
            shape: StarShape::default(),
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Validate every scene invariant.
    pub fn validate(&self) -> StarfieldResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(StarfieldError::validation(
                "scene width must be finite and > 0",
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(StarfieldError::validation(
                "scene height must be finite and > 0",
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(StarfieldError::validation(
                "scene scale must be finite and > 0",
            ));
        }
        if !self.perspective.is_finite() || self.perspective <= 0.0 {
            return Err(StarfieldError::validation(
                "scene perspective must be finite and > 0",
            ));
        }
        self.field.validate()?;
        self.shape.validate()?;
        Ok(())
    }

    /// The viewport this scene projects into.
    pub fn viewport(&self) -> StarfieldResult<Viewport> {
        Viewport::with_scale(self.width, self.height, self.scale)
    }

    /// Load a scene from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> StarfieldResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            StarfieldError::content(format!("open scene config '{}': {e}", path.display()))
        })?;
        let config: Self = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            StarfieldError::content(format!("parse scene config '{}': {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "../tests/unit/scene.rs"]
mod tests;
