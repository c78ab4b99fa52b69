use crate::field::star::Star;
use crate::foundation::core::{Point, Viewport};
use crate::foundation::error::{StarfieldError, StarfieldResult};

/// Projected radii at or below this are culled rather than drawn; sub-pixel
/// fills cost a draw call and contribute nothing.
pub const MIN_DRAW_RADIUS: f64 = 0.1;

/// A star mapped onto the screen: center in logical coordinates plus the
/// apparent radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub center: Point,
    pub radius: f64,
}

/// Pinhole-camera projection of world-plane stars onto the viewport.
///
/// The scale factor `k = perspective / z` drives both displacement from the
/// viewport center and apparent size, so both grow hyperbolically as a star
/// approaches the near plane.
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    viewport: Viewport,
    perspective: f64,
}

impl Projector {
    pub fn new(viewport: Viewport, perspective: f64) -> StarfieldResult<Self> {
        if !perspective.is_finite() || perspective <= 0.0 {
            return Err(StarfieldError::validation(
                "perspective factor must be finite and > 0",
            ));
        }
        Ok(Self {
            viewport,
            perspective,
        })
    }

    pub fn project(&self, star: &Star) -> Projected {
        let k = self.perspective / star.z;
        Projected {
            center: Point::new(
                star.x * k + self.viewport.width / 2.0,
                star.y * k + self.viewport.height / 2.0,
            ),
            radius: star.size * k,
        }
    }

    /// Conservative visibility test: the projected disc must be above the
    /// sub-pixel threshold and its bounding box must touch the viewport.
    ///
    /// A degenerate depth can make the projection non-finite; every comparison
    /// here fails on NaN, so such stars are culled rather than drawn.
    pub fn is_visible(&self, p: Projected) -> bool {
        let Projected { center, radius } = p;
        radius > MIN_DRAW_RADIUS
            && center.x > -radius
            && center.x < self.viewport.width + radius
            && center.y > -radius
            && center.y < self.viewport.height + radius
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resize support: swaps the projection geometry. Only the center offset
    /// and bounds move; star state is never touched from here.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn perspective(&self) -> f64 {
        self.perspective
    }
}

#[cfg(test)]
#[path = "../tests/unit/projection.rs"]
mod tests;
