//! Gesture mapper: drag displacement → angular offset → value, and back.
//!
//! All functions are pure. The controller owns the state they read and write.

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

use crate::arc::round_half_up;
use crate::config::KnobConfig;
use crate::input::Point;

/// Forward mapping: the offset along the travel arc that displays `value`.
///
/// Out-of-range values saturate at either end of the arc. A zero value span
/// maps everything to offset `0`.
#[must_use]
pub fn rotation_for(config: &KnobConfig, value: f64) -> f64 {
    let span = config.span();
    if span.abs() <= f64::EPSILON {
        return 0.0;
    }
    let percent = (value - config.min) * 100.0 / span;
    config.arc.clamp(percent * config.arc.degrees() / 100.0)
}

/// Inverse mapping: the rounded value shown at `rotation`.
///
/// A dial with no travel, or a zero value span, always reads `min`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn value_for(config: &KnobConfig, rotation: f64) -> i64 {
    let span = config.span();
    if config.arc.is_degenerate() || span.abs() <= f64::EPSILON {
        return round_half_up(config.min) as i64;
    }
    let percent = 100.0 * rotation / config.arc.degrees();
    round_half_up(config.min + span * percent / 100.0) as i64
}

/// One-dimensional drag displacement since `anchor`.
///
/// Vertical and horizontal movement are summed into a single scalar: dragging
/// down or right turns the knob up, up or left turns it down.
#[must_use]
pub fn displacement(anchor: Point, current: Point) -> f64 {
    (current.y - anchor.y) + (current.x - anchor.x)
}

/// Offset reached by dragging `displacement` pixels away from `committed`.
///
/// `max_drag_distance` pixels sweep the whole arc; the result is clamped into it.
#[must_use]
pub fn drag_rotation(config: &KnobConfig, committed: f64, displacement: f64, max_drag_distance: f64) -> f64 {
    let delta = displacement * config.arc.degrees() / max_drag_distance;
    config.arc.clamp(committed + delta)
}
