use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

#[test]
fn spawn_stays_inside_the_plane() {
    let params = FieldParams::default();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let star = Star::spawn(&mut rng, 800.0, 600.0, &params);
        assert!(star.x >= -400.0 && star.x < 400.0);
        assert!(star.y >= -300.0 && star.y < 300.0);
        assert!(star.z >= 0.0 && star.z < params.max_z);
        assert!(star.size >= params.size_min);
        assert!(star.size < params.size_min + params.size_span);
    }
}

#[test]
fn respawn_returns_to_the_far_plane_exactly() {
    let params = FieldParams::default();
    let mut rng = StdRng::seed_from_u64(7);
    let mut star = Star::spawn(&mut rng, 800.0, 600.0, &params);
    star.z = 0.3;

    star.respawn(&mut rng, 800.0, 600.0, &params);
    assert_eq!(star.z, params.max_z);
    assert!(star.size >= params.size_min);
}

#[test]
fn respawn_jitter_covers_the_overscanned_plane() {
    let params = FieldParams::default();
    let mut rng = StdRng::seed_from_u64(11);
    let half_w = 400.0 * params.respawn_spread;
    let half_h = 300.0 * params.respawn_spread;

    let mut star = Star::spawn(&mut rng, 800.0, 600.0, &params);
    let mut widest_x: f64 = 0.0;
    for _ in 0..500 {
        star.respawn(&mut rng, 800.0, 600.0, &params);
        assert!(star.x >= -half_w && star.x < half_w);
        assert!(star.y >= -half_h && star.y < half_h);
        widest_x = widest_x.max(star.x.abs());
    }
    // The over-scan is actually used: some respawns land beyond the plain
    // half-extent.
    assert!(widest_x > 400.0);
}
