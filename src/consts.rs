//! Shared numeric constants for the knob crate.

// ── Travel arc ──────────────────────────────────────────────────

/// Degrees in a full turn; the wrap-around term of the travel arc.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Default angle where the indicator rests at `min`.
pub const DEFAULT_START_DEGREE: f64 = 200.0;

/// Default angle where the indicator rests at `max`.
pub const DEFAULT_END_DEGREE: f64 = 120.0;

// ── Gesture calibration ─────────────────────────────────────────

/// Percentage of the larger viewport side that sweeps the whole arc.
pub const DRAG_DISTANCE_PERCENT: f64 = 10.0;

/// Lower bound for the calibrated drag distance, in CSS pixels.
pub const MIN_DRAG_DISTANCE_PX: f64 = 1.0;
