#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// degrees
// =============================================================

#[test]
fn degrees_default_arc_wraps_through_zero() {
    assert_eq!(TravelArc::new(200.0, 120.0).degrees(), 280.0);
}

#[test]
fn degrees_full_circle() {
    assert_eq!(TravelArc::new(0.0, 360.0).degrees(), 360.0);
}

#[test]
fn degrees_simple_forward_arc() {
    assert_eq!(TravelArc::new(0.0, 100.0).degrees(), 100.0);
}

#[test]
fn degrees_equal_angles_have_no_travel() {
    let arc = TravelArc::new(90.0, 90.0);
    assert_eq!(arc.degrees(), 0.0);
    assert!(arc.is_degenerate());
}

#[test]
fn degrees_wrap_case_from_demo_dial() {
    assert_eq!(TravelArc::new(228.0, 130.0).degrees(), 262.0);
}

#[test]
fn degrees_never_negative_for_wild_angles() {
    assert_eq!(TravelArc::new(400.0, 10.0).degrees(), 0.0);
}

// =============================================================
// clamp / angle_at
// =============================================================

#[test]
fn clamp_saturates_both_ends() {
    let arc = TravelArc::new(0.0, 100.0);
    assert_eq!(arc.clamp(-5.0), 0.0);
    assert_eq!(arc.clamp(42.5), 42.5);
    assert_eq!(arc.clamp(250.0), 100.0);
}

#[test]
fn clamp_maps_nan_to_start() {
    assert_eq!(TravelArc::new(0.0, 100.0).clamp(f64::NAN), 0.0);
}

#[test]
fn clamp_on_degenerate_arc_is_zero() {
    let arc = TravelArc::new(45.0, 45.0);
    assert_eq!(arc.clamp(10.0), 0.0);
    assert_eq!(arc.clamp(-10.0), 0.0);
}

#[test]
fn angle_at_offsets_from_start_without_normalizing() {
    let arc = TravelArc::new(200.0, 120.0);
    assert_eq!(arc.angle_at(0.0), 200.0);
    assert_eq!(arc.angle_at(280.0), 480.0);
}

// =============================================================
// round_half_up
// =============================================================

#[test]
fn round_half_up_matches_browser_rounding() {
    assert_eq!(round_half_up(2.5), 3.0);
    assert_eq!(round_half_up(-2.5), -2.0);
    assert_eq!(round_half_up(-2.51), -3.0);
    assert_eq!(round_half_up(7.49), 7.0);
}
