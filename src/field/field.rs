use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::field::star::{NEAR_PLANE, Star};
use crate::foundation::error::{StarfieldError, StarfieldResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Tunables for the particle collection.
///
/// The defaults are the landing-page backdrop: 200 stars, a 1000-unit deep
/// field, half a unit of travel per frame, sizes in `[2, 6)`.
pub struct FieldParams {
    /// Number of stars. Fixed for the lifetime of the field.
    #[serde(default = "default_num_stars")]
    pub num_stars: usize,
    /// Far-plane depth; stars respawn back to exactly this depth.
    #[serde(default = "default_max_z")]
    pub max_z: f64,
    /// Depth travelled per frame. Deliberately not wall-clock scaled: the
    /// page ties apparent speed to the refresh rate.
    #[serde(default = "default_speed")]
    pub speed: f64,
    /// Smallest unprojected star radius.
    #[serde(default = "default_size_min")]
    pub size_min: f64,
    /// Width of the random size range above `size_min`.
    #[serde(default = "default_size_span")]
    pub size_span: f64,
    /// Respawn lateral jitter over-scan factor relative to the spawn plane.
    #[serde(default = "default_respawn_spread")]
    pub respawn_spread: f64,
}

fn default_num_stars() -> usize {
    200
}

fn default_max_z() -> f64 {
    1000.0
}

fn default_speed() -> f64 {
    0.5
}

fn default_size_min() -> f64 {
    2.0
}

fn default_size_span() -> f64 {
    4.0
}

fn default_respawn_spread() -> f64 {
    1.5
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            num_stars: default_num_stars(),
            max_z: default_max_z(),
            speed: default_speed(),
            size_min: default_size_min(),
            size_span: default_size_span(),
            respawn_spread: default_respawn_spread(),
        }
    }
}

impl FieldParams {
    pub fn validate(&self) -> StarfieldResult<()> {
        if !self.max_z.is_finite() || self.max_z <= NEAR_PLANE {
            return Err(StarfieldError::validation(format!(
                "field max_z must be finite and > {NEAR_PLANE}"
            )));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(StarfieldError::validation(
                "field speed must be finite and >= 0",
            ));
        }
        if !self.size_min.is_finite() || self.size_min <= 0.0 {
            return Err(StarfieldError::validation(
                "field size_min must be finite and > 0",
            ));
        }
        if !self.size_span.is_finite() || self.size_span < 0.0 {
            return Err(StarfieldError::validation(
                "field size_span must be finite and >= 0",
            ));
        }
        if !self.respawn_spread.is_finite() || self.respawn_spread <= 0.0 {
            return Err(StarfieldError::validation(
                "field respawn_spread must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// The particle collection plus the plane stars (re)spawn over.
///
/// Owns exactly `params.num_stars` stars for its whole lifetime; nothing ever
/// adds or removes one. The only mutations are the per-tick depth decrement
/// and the respawn overwrite, so hosts can hold shared references to the
/// slice between frames.
pub struct StarField {
    params: FieldParams,
    plane_width: f64,
    plane_height: f64,
    stars: Vec<Star>,
    rng: StdRng,
}

impl StarField {
    /// Populate a field from OS entropy.
    pub fn new(width: f64, height: f64, params: FieldParams) -> StarfieldResult<Self> {
        Self::with_rng(width, height, params, StdRng::from_entropy())
    }

    /// Populate a field deterministically. Same seed, same field, same run.
    pub fn with_seed(
        width: f64,
        height: f64,
        params: FieldParams,
        seed: u64,
    ) -> StarfieldResult<Self> {
        Self::with_rng(width, height, params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        width: f64,
        height: f64,
        params: FieldParams,
        mut rng: StdRng,
    ) -> StarfieldResult<Self> {
        params.validate()?;
        if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
            return Err(StarfieldError::validation(
                "field plane width/height must be finite and > 0",
            ));
        }

        let stars = (0..params.num_stars)
            .map(|_| Star::spawn(&mut rng, width, height, &params))
            .collect();

        Ok(Self {
            params,
            plane_width: width,
            plane_height: height,
            stars,
            rng,
        })
    }

    /// Advance every star one frame toward the camera, respawning those that
    /// cross the near plane. Returns how many respawned.
    ///
    /// After this returns, every depth is in `(0, max_z]`.
    pub fn tick(&mut self) -> usize {
        let mut respawned = 0usize;
        for star in &mut self.stars {
            star.z -= self.params.speed;
            if star.z < NEAR_PLANE {
                star.respawn(
                    &mut self.rng,
                    self.plane_width,
                    self.plane_height,
                    &self.params,
                );
                respawned += 1;
            }
        }
        respawned
    }

    /// Retarget the spawn plane, e.g. after a host resize. Existing stars
    /// keep their world coordinates; only future respawns use the new extent.
    pub fn set_extent(&mut self, width: f64, height: f64) -> StarfieldResult<()> {
        if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
            return Err(StarfieldError::validation(
                "field plane width/height must be finite and > 0",
            ));
        }
        self.plane_width = width;
        self.plane_height = height;
        Ok(())
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Mutable access for deterministic setups (fixed layouts, tests).
    pub fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn extent(&self) -> (f64, f64) {
        (self.plane_width, self.plane_height)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/field.rs"]
mod tests;
