use crate::{CpuSurface, Rgba8, Star};

use super::*;

/// Surface that swallows every draw; the run-loop tests only watch state.
struct NullSurface;

impl Surface for NullSurface {
    fn begin_frame(&mut self, _clear: Rgba8) -> StarfieldResult<()> {
        Ok(())
    }

    fn fill_path(
        &mut self,
        _path: &crate::BezPath,
        _color: Rgba8,
    ) -> StarfieldResult<()> {
        Ok(())
    }

    fn fill_circle(&mut self, _circle: Circle, _color: Rgba8) -> StarfieldResult<()> {
        Ok(())
    }

    fn end_frame(&mut self) -> StarfieldResult<()> {
        Ok(())
    }

    fn resize(&mut self, _viewport: crate::Viewport) -> StarfieldResult<()> {
        Ok(())
    }
}

/// Clock that never sleeps and pulls the stop handle after a fixed number of
/// waits.
struct CountingClock {
    waits: u64,
    stop_after: u64,
    stop: StopHandle,
}

impl FrameClock for CountingClock {
    fn wait_for_frame(&mut self) -> StarfieldResult<()> {
        self.waits += 1;
        if self.waits > self.stop_after {
            self.stop.stop();
        }
        Ok(())
    }
}

fn seeded_config(num_stars: usize) -> SceneConfig {
    let mut config = SceneConfig {
        width: 800.0,
        height: 600.0,
        ..SceneConfig::default()
    };
    config.field.num_stars = num_stars;
    config.seed = Some(9);
    config
}

#[test]
fn rejects_invalid_scene() {
    let mut config = seeded_config(10);
    config.perspective = -1.0;
    assert!(Animator::new(config, NullSurface).is_err());
}

#[test]
fn advance_frame_ticks_depth_and_respawns() {
    let mut animator = Animator::new(seeded_config(1), NullSurface).unwrap();
    animator.field_mut().stars_mut()[0] = Star {
        x: 0.0,
        y: 0.0,
        z: 500.0,
        size: 3.0,
    };

    animator.advance_frame().unwrap();
    assert_eq!(animator.field().stars()[0].z, 499.5);
    assert_eq!(animator.frames_rendered(), 1);

    // Forcing the star under the floor respawns it to the far plane.
    animator.field_mut().stars_mut()[0].z = 0.9;
    animator.advance_frame().unwrap();
    assert_eq!(animator.field().stars()[0].z, 1000.0);
}

#[test]
fn culled_stars_still_advance() {
    let mut animator = Animator::new(seeded_config(2), NullSurface).unwrap();
    // One star far off screen, one dead center.
    animator.field_mut().stars_mut()[0] = Star {
        x: 1.0e6,
        y: 0.0,
        z: 500.0,
        size: 3.0,
    };
    animator.field_mut().stars_mut()[1] = Star {
        x: 0.0,
        y: 0.0,
        z: 500.0,
        size: 3.0,
    };

    animator.advance_frame().unwrap();
    assert_eq!(animator.field().stars()[0].z, 499.5);
    assert_eq!(animator.field().stars()[1].z, 499.5);
}

#[test]
fn resize_keeps_star_state_and_is_idempotent() {
    let mut animator = Animator::new(seeded_config(50), NullSurface).unwrap();
    animator.advance_frame().unwrap();
    let before = animator.field().stars().to_vec();

    animator.resize(1000.0, 700.0).unwrap();
    animator.resize(1000.0, 700.0).unwrap();

    assert_eq!(animator.field().stars(), &before[..]);
    assert_eq!(animator.field().len(), 50);
    assert_eq!(animator.projector().viewport().width, 1000.0);
    assert_eq!(animator.config().width, 1000.0);
}

#[test]
fn resize_can_retarget_the_pixel_ratio() {
    let mut animator = Animator::new(seeded_config(10), NullSurface).unwrap();
    animator.resize_with_scale(800.0, 600.0, 2.0).unwrap();

    assert_eq!(animator.projector().viewport().scale, 2.0);
    assert_eq!(animator.config().scale, 2.0);
    // A plain resize afterwards keeps the ratio.
    animator.resize(400.0, 300.0).unwrap();
    assert_eq!(animator.projector().viewport().scale, 2.0);
}

#[test]
fn run_renders_until_stopped() {
    let mut animator = Animator::new(seeded_config(5), NullSurface).unwrap();
    let stop = StopHandle::new();
    let mut clock = CountingClock {
        waits: 0,
        stop_after: 3,
        stop: stop.clone(),
    };

    let rendered = animator.run(&mut clock, &stop).unwrap();
    assert_eq!(rendered, 3);
    assert!(stop.is_stopped());
}

#[test]
fn run_with_a_pulled_stop_renders_nothing() {
    let mut animator = Animator::new(seeded_config(5), NullSurface).unwrap();
    let stop = StopHandle::new();
    stop.stop();

    let mut clock = CountingClock {
        waits: 0,
        stop_after: 1000,
        stop: stop.clone(),
    };
    assert_eq!(animator.run(&mut clock, &stop).unwrap(), 0);
}

#[test]
fn fixed_rate_clock_validates_and_ticks() {
    assert!(FixedRateClock::new(0.0).is_err());
    assert!(FixedRateClock::new(f64::NAN).is_err());

    let mut clock = FixedRateClock::new(1000.0).unwrap();
    clock.wait_for_frame().unwrap();
    clock.wait_for_frame().unwrap();
}

#[test]
fn end_to_end_frame_on_a_cpu_surface() {
    let mut config = seeded_config(1);
    config.width = 64.0;
    config.height = 48.0;
    config.shape = StarShape::Disc;

    let surface = CpuSurface::new(config.viewport().unwrap()).unwrap();
    let mut animator = Animator::new(config, surface).unwrap();
    animator.field_mut().stars_mut()[0] = Star {
        x: 0.0,
        y: 0.0,
        z: 150.0,
        size: 3.0,
    };

    animator.advance_frame().unwrap();
    let frame = animator.surface().to_frame();

    // radius = 300 / 149.5 * 3 ~= 6, centered at (32, 24): the center pixel
    // is solid white over the black clear.
    let idx = ((24 * frame.width + 32) * 4) as usize;
    assert_eq!(&frame.data[idx..idx + 4], &[255, 255, 255, 255]);
    let corner = &frame.data[0..4];
    assert_eq!(corner, &[0, 0, 0, 255]);
}
