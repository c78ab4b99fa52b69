use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::field::field::StarField;
use crate::foundation::core::{Circle, Viewport};
use crate::foundation::error::{StarfieldError, StarfieldResult};
use crate::projection::Projector;
use crate::render::shape::{StarShape, spiked_star_path};
use crate::render::surface::Surface;
use crate::scene::SceneConfig;

/// Owns a scene end to end: particle state, projection, style, and the
/// surface frames are presented to.
///
/// Everything runs inside the caller's frame callback; there is no
/// parallelism here. `resize` is the one externally triggered mutation and
/// only swaps scalar geometry, so it is safe between frames.
pub struct Animator<S: Surface> {
    field: StarField,
    projector: Projector,
    config: SceneConfig,
    surface: S,
    frames: u64,
}

impl<S: Surface> Animator<S> {
    /// Build a validated scene around a host-provided surface.
    pub fn new(config: SceneConfig, surface: S) -> StarfieldResult<Self> {
        config.validate()?;
        let viewport = config.viewport()?;
        let field = match config.seed {
            Some(seed) => StarField::with_seed(config.width, config.height, config.field, seed)?,
            None => StarField::new(config.width, config.height, config.field)?,
        };
        let projector = Projector::new(viewport, config.perspective)?;
        Ok(Self {
            field,
            projector,
            config,
            surface,
            frames: 0,
        })
    }

    /// Advance the simulation one frame and draw it.
    ///
    /// State always advances for every star; drawing is skipped per star when
    /// the projection falls outside the viewport or below the sub-pixel
    /// threshold.
    #[tracing::instrument(skip(self), fields(frame = self.frames))]
    pub fn advance_frame(&mut self) -> StarfieldResult<()> {
        let respawned = self.field.tick();

        self.surface.begin_frame(self.config.background)?;
        let mut drawn = 0usize;
        for star in self.field.stars() {
            let projected = self.projector.project(star);
            if !self.projector.is_visible(projected) {
                continue;
            }
            match self.config.shape {
                StarShape::Disc => self.surface.fill_circle(
                    Circle::new(projected.center, projected.radius),
                    self.config.star_color,
                )?,
                StarShape::Spiked {
                    spikes,
                    inner_ratio,
                } => {
                    let path = spiked_star_path(
                        projected.center,
                        spikes,
                        projected.radius,
                        projected.radius * inner_ratio,
                    );
                    self.surface.fill_path(&path, self.config.star_color)?;
                }
            }
            drawn += 1;
        }
        self.surface.end_frame()?;

        self.frames += 1;
        debug!(respawned, drawn, total = self.field.len(), "frame advanced");
        Ok(())
    }

    /// Adopt a new logical size, keeping the current device-pixel-ratio.
    pub fn resize(&mut self, width: f64, height: f64) -> StarfieldResult<()> {
        let scale = self.projector.viewport().scale;
        self.resize_with_scale(width, height, scale)
    }

    /// Adopt a new logical size and device-pixel-ratio: projection center,
    /// spawn plane, and backing buffer all follow; the star collection is
    /// never reseeded or resized. Calling this twice with the same geometry
    /// changes nothing.
    pub fn resize_with_scale(
        &mut self,
        width: f64,
        height: f64,
        scale: f64,
    ) -> StarfieldResult<()> {
        let viewport = Viewport::with_scale(width, height, scale)?;
        self.surface.resize(viewport)?;
        self.projector.set_viewport(viewport);
        self.field.set_extent(width, height)?;
        self.config.width = width;
        self.config.height = height;
        self.config.scale = scale;
        Ok(())
    }

    /// Drive the frame loop until the host stops it. Returns the number of
    /// frames rendered by this run.
    ///
    /// The loop never terminates on its own; a host that tears down its view
    /// must call [`StopHandle::stop`] or the work leaks against a dead
    /// surface.
    pub fn run(&mut self, clock: &mut dyn FrameClock, stop: &StopHandle) -> StarfieldResult<u64> {
        let start_frames = self.frames;
        while !stop.is_stopped() {
            clock.wait_for_frame()?;
            if stop.is_stopped() {
                break;
            }
            self.advance_frame()?;
        }
        let rendered = self.frames - start_frames;
        debug!(rendered, "run stopped");
        Ok(rendered)
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &StarField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut StarField {
        &mut self.field
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// The host's per-frame scheduling primitive: block until the next repaint
/// slot.
pub trait FrameClock {
    fn wait_for_frame(&mut self) -> StarfieldResult<()>;
}

/// Fixed-rate clock over a monotonic deadline.
///
/// When a frame overruns its slot the deadline re-bases on the present, so a
/// stall slows the field down instead of bursting catch-up frames.
pub struct FixedRateClock {
    period: Duration,
    next: Option<Instant>,
}

impl FixedRateClock {
    pub fn new(fps: f64) -> StarfieldResult<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(StarfieldError::validation("clock fps must be finite and > 0"));
        }
        Ok(Self {
            period: Duration::from_secs_f64(1.0 / fps),
            next: None,
        })
    }
}

impl FrameClock for FixedRateClock {
    fn wait_for_frame(&mut self) -> StarfieldResult<()> {
        let now = Instant::now();
        let deadline = self.next.unwrap_or(now);
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        self.next = Some(deadline.max(now) + self.period);
        Ok(())
    }
}

/// Cloneable cancellation flag shared between the host and a running
/// [`Animator::run`] loop.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[path = "../tests/unit/driver.rs"]
mod tests;
