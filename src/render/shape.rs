use std::f64::consts::PI;

use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{StarfieldError, StarfieldResult};

/// How a projected star is filled.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StarShape {
    /// A plain filled disc of the projected radius.
    Disc,
    /// A filled N-pointed star polygon; the projected radius is the outer
    /// radius and `inner_ratio` scales it down to the inner vertices.
    Spiked {
        #[serde(default = "default_spikes")]
        spikes: u32,
        #[serde(default = "default_inner_ratio")]
        inner_ratio: f64,
    },
}

fn default_spikes() -> u32 {
    5
}

fn default_inner_ratio() -> f64 {
    0.1
}

impl Default for StarShape {
    fn default() -> Self {
        Self::Spiked {
            spikes: default_spikes(),
            inner_ratio: default_inner_ratio(),
        }
    }
}

impl StarShape {
    pub fn validate(&self) -> StarfieldResult<()> {
        match *self {
            Self::Disc => Ok(()),
            Self::Spiked {
                spikes,
                inner_ratio,
            } => {
                if spikes < 2 {
                    return Err(StarfieldError::validation(
                        "star shape needs at least 2 spikes",
                    ));
                }
                if !inner_ratio.is_finite() || inner_ratio <= 0.0 || inner_ratio >= 1.0 {
                    return Err(StarfieldError::validation(
                        "star shape inner_ratio must be in (0, 1)",
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Closed star polygon centered on `center`.
///
/// Vertices alternate between the outer and inner radius at equal angular
/// steps of `pi / spikes`, starting from the top point and walking clockwise
/// (screen coordinates, y down).
pub fn spiked_star_path(center: Point, spikes: u32, outer: f64, inner: f64) -> BezPath {
    let step = PI / spikes as f64;
    // 1.5 * PI points straight up in y-down coordinates.
    let mut angle = 1.5 * PI;

    let mut path = BezPath::new();
    path.move_to(vertex(center, angle, outer));
    for _ in 0..spikes {
        angle += step;
        path.line_to(vertex(center, angle, inner));
        angle += step;
        path.line_to(vertex(center, angle, outer));
    }
    path.close_path();
    path
}

fn vertex(center: Point, angle: f64, radius: f64) -> Point {
    Point::new(
        center.x + angle.cos() * radius,
        center.y + angle.sin() * radius,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/shape.rs"]
mod tests;
