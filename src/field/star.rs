use rand::Rng;

use crate::field::field::FieldParams;

/// Minimum depth. A star whose depth falls below this after a tick is sent
/// back to the far plane, which is what makes the field read as infinite.
pub const NEAR_PLANE: f64 = 1.0;

/// A single particle in the field.
///
/// `x`/`y` are offsets in an unprojected world plane centered on the origin;
/// `z` is depth in `(0, max_z]`; `size` is the unprojected radius, drawn once
/// per (re)spawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub size: f64,
}

impl Star {
    /// Spawn a fresh star spread over a `width` x `height` plane, at a random
    /// depth anywhere in the field.
    pub fn spawn(rng: &mut impl Rng, width: f64, height: f64, params: &FieldParams) -> Self {
        Self {
            x: rng.gen_range(-0.5..0.5) * width,
            y: rng.gen_range(-0.5..0.5) * height,
            z: rng.gen_range(0.0..1.0) * params.max_z,
            size: params.size_min + params.size_span * rng.gen_range(0.0..1.0),
        }
    }

    /// Rebirth in place: back to the far plane with fresh lateral position and
    /// size. The lateral jitter over-scans the plane by `respawn_spread` so a
    /// batch of simultaneous respawns does not form a visible ring at the
    /// viewport edge.
    pub fn respawn(&mut self, rng: &mut impl Rng, width: f64, height: f64, params: &FieldParams) {
        self.x = rng.gen_range(-0.5..0.5) * width * params.respawn_spread;
        self.y = rng.gen_range(-0.5..0.5) * height * params.respawn_spread;
        self.z = params.max_z;
        self.size = params.size_min + params.size_span * rng.gen_range(0.0..1.0);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/star.rs"]
mod tests;
