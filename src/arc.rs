//! Travel arc: the angular sweep between the knob's start and end angles.
//!
//! The sweep need not be a full circle and may cross the 0°/360° boundary,
//! e.g. start 228°, end 130° sweeps 262° clockwise through 0°.

#[cfg(test)]
#[path = "arc_test.rs"]
mod arc_test;

use crate::consts::FULL_TURN_DEG;

/// Start and end angles of the indicator, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelArc {
    start: f64,
    end: f64,
}

impl TravelArc {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn start(self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.end
    }

    /// Usable sweep in degrees.
    ///
    /// - `end > start`: `end - start`
    /// - `end < start`: `360 + end - start` (wraps through 0°)
    /// - equal: `0`, a dial with no travel
    ///
    /// Angles far outside `[0, 360)` can make the wrap formula negative; such
    /// sweeps are floored at zero.
    #[must_use]
    pub fn degrees(self) -> f64 {
        let sweep = if self.end > self.start {
            self.end - self.start
        } else if self.end < self.start {
            FULL_TURN_DEG + self.end - self.start
        } else {
            0.0
        };
        sweep.max(0.0)
    }

    /// Whether the arc has no travel at all.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.degrees() <= 0.0
    }

    /// Saturate an offset into `[0, degrees]`. NaN lands on `0`.
    #[must_use]
    pub fn clamp(self, rotation: f64) -> f64 {
        let max = self.degrees();
        if rotation.is_nan() || rotation < 0.0 {
            0.0
        } else if rotation > max {
            max
        } else {
            rotation
        }
    }

    /// Rendered angle for an offset along the arc. Not normalized past 360°.
    #[must_use]
    pub fn angle_at(self, rotation: f64) -> f64 {
        rotation + self.start
    }
}

/// Round half up, the way browser hosts round (`-2.5` → `-2`, `2.5` → `3`).
#[must_use]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
