#![allow(clippy::float_cmp)]

use super::*;
use crate::config::KnobOptions;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn config(min: f64, max: f64, start: f64, end: f64) -> KnobConfig {
    KnobOptions { min, max, start_degree: start, end_degree: end, ..Default::default() }
        .validate()
        .unwrap()
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// rotation_for
// =============================================================

#[test]
fn rotation_for_bpm_example() {
    let cfg = config(10.0, 200.0, 200.0, 120.0);
    let rotation = rotation_for(&cfg, 80.0);
    assert!(approx_eq(rotation, 70.0 / 190.0 * 280.0));
    assert!((cfg.arc.angle_at(rotation) - 303.157_894_7).abs() < 1e-6);
}

#[test]
fn rotation_for_endpoints() {
    let cfg = config(-6.0, 6.0, 228.0, 130.0);
    assert_eq!(rotation_for(&cfg, -6.0), 0.0);
    assert!(approx_eq(rotation_for(&cfg, 6.0), 262.0));
    assert!(approx_eq(rotation_for(&cfg, 0.0), 131.0));
}

#[test]
fn rotation_for_out_of_range_saturates() {
    let cfg = config(0.0, 100.0, 0.0, 360.0);
    assert_eq!(rotation_for(&cfg, -50.0), 0.0);
    assert_eq!(rotation_for(&cfg, 1_000.0), 360.0);
}

#[test]
fn rotation_for_zero_span_is_zero() {
    let cfg = config(5.0, 5.0, 0.0, 360.0);
    assert_eq!(rotation_for(&cfg, 5.0), 0.0);
    assert_eq!(rotation_for(&cfg, 99.0), 0.0);
}

// =============================================================
// value_for
// =============================================================

#[test]
fn value_for_endpoints() {
    let cfg = config(10.0, 200.0, 200.0, 120.0);
    assert_eq!(value_for(&cfg, 0.0), 10);
    assert_eq!(value_for(&cfg, 280.0), 200);
}

#[test]
fn value_for_zero_arc_yields_min() {
    let cfg = config(3.0, 9.0, 90.0, 90.0);
    assert_eq!(value_for(&cfg, 0.0), 3);
    assert_eq!(value_for(&cfg, 45.0), 3);
}

#[test]
fn value_for_zero_span_yields_min() {
    let cfg = config(5.0, 5.0, 0.0, 360.0);
    assert_eq!(value_for(&cfg, 0.0), 5);
    assert_eq!(value_for(&cfg, 180.0), 5);
}

#[test]
fn value_for_rounds_half_up_on_negative_range() {
    // -10..10 over 200 degrees: 45 degrees in reads -5.5, which rounds to -5
    let cfg = config(-10.0, 10.0, 0.0, 200.0);
    assert_eq!(value_for(&cfg, 45.0), -5);
    assert_eq!(value_for(&cfg, 44.0), -6);
}

#[test]
fn round_trip_within_one_unit() {
    let cases = [
        config(10.0, 200.0, 200.0, 120.0),
        config(0.0, 500.0, 0.0, 360.0),
        config(-6.0, 6.0, 228.0, 130.0),
        config(0.0, 100.0, 0.0, 100.0),
    ];
    for cfg in &cases {
        let (lo, hi) = (cfg.min as i64, cfg.max as i64);
        for v in lo..=hi {
            let back = value_for(cfg, rotation_for(cfg, v as f64));
            assert!((back - v).abs() <= 1, "value {v} came back as {back} for {cfg:?}");
        }
    }
}

// =============================================================
// displacement / drag_rotation
// =============================================================

#[test]
fn displacement_sums_both_axes() {
    assert_eq!(displacement(pt(10.0, 10.0), pt(15.0, 13.0)), 8.0);
    assert_eq!(displacement(pt(10.0, 10.0), pt(5.0, 15.0)), 0.0);
    assert_eq!(displacement(pt(0.0, 0.0), pt(-3.0, -4.0)), -7.0);
}

#[test]
fn drag_rotation_full_distance_sweeps_whole_arc() {
    let cfg = config(0.0, 100.0, 0.0, 100.0);
    assert_eq!(drag_rotation(&cfg, 0.0, 50.0, 50.0), 100.0);
    assert_eq!(drag_rotation(&cfg, 0.0, 25.0, 50.0), 50.0);
}

#[test]
fn drag_rotation_is_relative_to_committed() {
    let cfg = config(0.0, 100.0, 0.0, 100.0);
    assert_eq!(drag_rotation(&cfg, 40.0, -10.0, 50.0), 20.0);
}

#[test]
fn drag_rotation_clamps_into_arc() {
    let cfg = config(0.0, 100.0, 0.0, 100.0);
    assert_eq!(drag_rotation(&cfg, 90.0, 500.0, 50.0), 100.0);
    assert_eq!(drag_rotation(&cfg, 10.0, -500.0, 50.0), 0.0);
}

#[test]
fn drag_rotation_on_degenerate_arc_stays_zero() {
    let cfg = config(0.0, 100.0, 90.0, 90.0);
    assert_eq!(drag_rotation(&cfg, 0.0, 30.0, 50.0), 0.0);
}
