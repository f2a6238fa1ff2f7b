//! Input model: pointer/touch events and the gesture state machine.
//!
//! `InputEvent` is the tagged form of a raw host event. Mouse and pen input
//! arrive as `Pointer`, touch input as `Touch` with every contact point; only
//! the first contact drives the knob. `GestureState` is the active gesture
//! tracked between pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::error::KnobError;

/// A point in screen space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A pointer or touch event, already stripped of host specifics.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse or pen position.
    Pointer(Point),
    /// All active touch contacts, in host order.
    Touch(Vec<Point>),
}

impl InputEvent {
    #[must_use]
    pub fn pointer(x: f64, y: f64) -> Self {
        Self::Pointer(Point::new(x, y))
    }

    #[must_use]
    pub fn touch(points: &[(f64, f64)]) -> Self {
        Self::Touch(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    /// The contact point that drives the gesture.
    ///
    /// # Errors
    ///
    /// [`KnobError::EmptyTouchList`] for a touch event with no contacts, and
    /// [`KnobError::NonFiniteCoordinate`] when the chosen point is NaN or infinite.
    pub fn primary_point(&self) -> Result<Point, KnobError> {
        let point = match self {
            Self::Pointer(p) => *p,
            Self::Touch(points) => *points.first().ok_or(KnobError::EmptyTouchList)?,
        };
        if !point.x.is_finite() {
            return Err(KnobError::NonFiniteCoordinate { axis: "x", value: point.x });
        }
        if !point.y.is_finite() {
            return Err(KnobError::NonFiniteCoordinate { axis: "y", value: point.y });
        }
        Ok(point)
    }
}

/// Whether the host should stop propagation and suppress the default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The knob used the event.
    Consumed,
    /// The event did not belong to an active gesture; leave it alone.
    Ignored,
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A drag is live. Nothing is committed until release.
    Dragging {
        /// Screen position of the initiating contact.
        anchor: Point,
        /// Offset along the arc for the latest move.
        provisional: f64,
    },
}

impl GestureState {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Gesture start position, absent when idle.
    #[must_use]
    pub fn anchor(self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging { anchor, .. } => Some(anchor),
        }
    }
}
