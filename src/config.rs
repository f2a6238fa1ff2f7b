//! Knob configuration: host-facing options and the validated controller config.
//!
//! `KnobOptions` mirrors the attribute names a host page uses to declare a
//! knob (`min`, `max`, `value`, `startDegree`, `endDegree`, `intensive`) and
//! fills every missing field with its default. `KnobOptions::validate` turns
//! the raw options into a typed [`KnobConfig`], rejecting non-finite numbers.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::arc::{TravelArc, round_half_up};
use crate::consts::{
    DEFAULT_END_DEGREE, DEFAULT_START_DEGREE, DRAG_DISTANCE_PERCENT, FULL_TURN_DEG, MIN_DRAG_DISTANCE_PX,
};
use crate::error::KnobError;

/// When observers hear about value changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmissionMode {
    /// Notify on every move of an active drag.
    #[default]
    Continuous,
    /// Notify once, when the drag is released.
    OnRelease,
}

impl EmissionMode {
    /// Map the host's `intensive` flag onto an emission mode.
    #[must_use]
    pub fn from_intensive(intensive: bool) -> Self {
        if intensive { Self::Continuous } else { Self::OnRelease }
    }
}

/// Raw knob options as declared by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KnobOptions {
    /// Lower bound of the value range.
    pub min: f64,
    /// Upper bound of the value range.
    pub max: f64,
    /// Initial value.
    pub value: f64,
    /// Angle of the indicator at `min`, in degrees.
    pub start_degree: f64,
    /// Angle of the indicator at `max`, in degrees.
    pub end_degree: f64,
    /// `true` emits on every move, `false` only on release.
    pub intensive: bool,
}

impl Default for KnobOptions {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            value: 0.0,
            start_degree: DEFAULT_START_DEGREE,
            end_degree: DEFAULT_END_DEGREE,
            intensive: true,
        }
    }
}

impl KnobOptions {
    /// Parse options from a JSON object. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`KnobError::Parse`] for malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, KnobError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Validate the options into a controller config.
    ///
    /// Angles outside `[0, 360)` are accepted as-is and only logged.
    ///
    /// # Errors
    ///
    /// Returns [`KnobError::InvalidOption`] when any numeric option is NaN or infinite.
    pub fn validate(&self) -> Result<KnobConfig, KnobError> {
        finite("min", self.min)?;
        finite("max", self.max)?;
        finite("value", self.value)?;
        finite("startDegree", self.start_degree)?;
        finite("endDegree", self.end_degree)?;

        for (name, deg) in [("startDegree", self.start_degree), ("endDegree", self.end_degree)] {
            if !(0.0..FULL_TURN_DEG).contains(&deg) {
                tracing::warn!(option = name, degrees = deg, "knob angle outside [0, 360)");
            }
        }
        if self.min > self.max {
            tracing::warn!(min = self.min, max = self.max, "knob range is inverted");
        }

        Ok(KnobConfig {
            min: self.min,
            max: self.max,
            arc: TravelArc::new(self.start_degree, self.end_degree),
            emission: EmissionMode::from_intensive(self.intensive),
        })
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), KnobError> {
    if value.is_finite() { Ok(()) } else { Err(KnobError::InvalidOption { name, value }) }
}

/// Validated, immutable controller configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobConfig {
    pub min: f64,
    pub max: f64,
    pub arc: TravelArc,
    pub emission: EmissionMode,
}

impl KnobConfig {
    /// Width of the value range; zero collapses every value to `min`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Size of the page the knob lives in, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Pixels of drag that traverse the full travel arc: 10% of the longer
    /// side, rounded, never below one pixel.
    #[must_use]
    pub fn max_drag_distance(self) -> f64 {
        let longest = self.width.max(self.height);
        let distance = round_half_up(longest * DRAG_DISTANCE_PERCENT / 100.0);
        if distance.is_finite() { distance.max(MIN_DRAG_DISTANCE_PX) } else { MIN_DRAG_DISTANCE_PX }
    }
}
