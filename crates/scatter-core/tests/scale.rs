// File: crates/scatter-core/tests/scale.rs
// Purpose: Unit coverage for the pure scale/tick functions, independent of drawing.

use scatter_core::{tick_label, tick_step, ticks, LinearScale};

#[test]
fn linear_map_origin_anchored() {
    // Spec worked example: x in {2,4,8}, inner width 560.
    let s = LinearScale::new([0.0, 8.0], [0.0, 560.0]);
    assert_eq!(s.map(0.0), 0.0);
    assert_eq!(s.map(8.0), 560.0);
    assert_eq!(s.map(4.0), 280.0);
    assert_eq!(s.map(2.0), 140.0);
}

#[test]
fn linear_map_inverted_range() {
    // Y axis: values grow upward, pixels grow downward.
    let s = LinearScale::new([0.0, 95.0], [340.0, 0.0]);
    assert_eq!(s.map(0.0), 340.0);
    assert_eq!(s.map(95.0), 0.0);
    let mid = s.map(47.5);
    assert!((mid - 170.0).abs() < 1e-9, "mid was {mid}");
}

#[test]
fn invert_round_trips() {
    let s = LinearScale::new([0.0, 8.0], [0.0, 560.0]);
    for v in [0.0, 1.0, 3.5, 8.0] {
        let back = s.invert(s.map(v));
        assert!((back - v).abs() < 1e-9, "{v} round-tripped to {back}");
    }
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    // All inputs share the same value: no division by zero, deterministic
    // midpoint output for every query.
    let s = LinearScale::new([5.0, 5.0], [0.0, 540.0]);
    for v in [0.0, 5.0, 100.0, -3.0] {
        let out = s.map(v);
        assert!(out.is_finite(), "map({v}) was not finite");
        assert_eq!(out, 270.0);
    }
    assert_eq!(s.invert(123.0), 5.0);
}

#[test]
fn ticks_are_nice() {
    assert_eq!(ticks([0.0, 8.0], 5), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    assert_eq!(ticks([0.0, 95.0], 5), vec![0.0, 20.0, 40.0, 60.0, 80.0]);
    assert_eq!(ticks([0.0, 100.0], 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
}

#[test]
fn ticks_stay_inside_domain_on_step_multiples() {
    let domain = [0.0, 73.0];
    let step = tick_step(domain, 5);
    for t in ticks(domain, 5) {
        assert!(t >= 0.0 && t <= 73.0, "tick {t} escaped the domain");
        let q = t / step;
        assert!((q - q.round()).abs() < 1e-9, "tick {t} not a multiple of step {step}");
    }
}

#[test]
fn ticks_edge_cases() {
    assert_eq!(ticks([5.0, 5.0], 5), vec![5.0], "degenerate domain yields the single value");
    assert!(ticks([0.0, 8.0], 0).is_empty(), "zero count yields nothing");
}

#[test]
fn tick_labels_match_step_precision() {
    assert_eq!(tick_label(2.0, 2.0), "2");
    assert_eq!(tick_label(40.0, 20.0), "40");
    assert_eq!(tick_label(0.5, 0.5), "0.5");
    assert_eq!(tick_label(0.25, 0.05), "0.25");
}
