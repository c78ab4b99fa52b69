use approx::assert_relative_eq;
use kurbo::PathEl;

use super::*;

fn vertices(path: &BezPath) -> Vec<Point> {
    path.elements()
        .iter()
        .filter_map(|el| match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(p),
            _ => None,
        })
        .collect()
}

#[test]
fn five_spikes_walk_ten_edges() {
    let path = spiked_star_path(Point::new(0.0, 0.0), 5, 10.0, 1.0);
    let els = path.elements();

    // MoveTo + 10 LineTo + ClosePath.
    assert_eq!(els.len(), 12);
    assert!(matches!(els[0], PathEl::MoveTo(_)));
    assert!(matches!(els[11], PathEl::ClosePath));
}

#[test]
fn starts_at_the_top_point() {
    let center = Point::new(50.0, 40.0);
    let path = spiked_star_path(center, 5, 10.0, 1.0);
    let first = vertices(&path)[0];

    assert_relative_eq!(first.x, 50.0, epsilon = 1e-9);
    assert_relative_eq!(first.y, 30.0, epsilon = 1e-9);
}

#[test]
fn vertices_alternate_outer_and_inner_radius() {
    let center = Point::new(0.0, 0.0);
    let outer = 12.0;
    let inner = 1.2;
    let path = spiked_star_path(center, 5, outer, inner);
    let verts = vertices(&path);

    // The walk revisits the top point last; 1 + 2*spikes vertices total.
    assert_eq!(verts.len(), 11);
    for (i, v) in verts.iter().enumerate() {
        let dist = (v.to_vec2() - center.to_vec2()).hypot();
        let expected = if i % 2 == 0 { outer } else { inner };
        assert_relative_eq!(dist, expected, epsilon = 1e-9);
    }
}

#[test]
fn first_step_moves_clockwise() {
    // Screen coordinates: clockwise from the top means the first inner
    // vertex lands to the right of center.
    let path = spiked_star_path(Point::new(0.0, 0.0), 5, 10.0, 1.0);
    let first_inner = vertices(&path)[1];
    assert!(first_inner.x > 0.0);
}

#[test]
fn shape_validation() {
    assert!(StarShape::Disc.validate().is_ok());
    assert!(StarShape::default().validate().is_ok());
    assert!(
        StarShape::Spiked {
            spikes: 1,
            inner_ratio: 0.1
        }
        .validate()
        .is_err()
    );
    assert!(
        StarShape::Spiked {
            spikes: 5,
            inner_ratio: 1.0
        }
        .validate()
        .is_err()
    );
}

#[test]
fn default_shape_is_a_five_spike_star() {
    assert_eq!(
        StarShape::default(),
        StarShape::Spiked {
            spikes: 5,
            inner_ratio: 0.1
        }
    );
}
