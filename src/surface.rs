//! Host capabilities the controller drives: the render surface and the
//! page-wide listener scope.
//!
//! The controller calls both synchronously from its input handlers. Hosts that
//! want batching or throttling do it behind these traits.

use crate::error::KnobError;

/// Where the knob's indicator is drawn.
pub trait RenderSurface {
    /// Rotate the indicator to `degrees` (absolute, not normalized past 360°).
    fn apply_rotation(&mut self, degrees: f64);
}

/// Page-wide registration for the move/up listeners of an active drag.
///
/// A drag keeps tracking after the pointer leaves the knob, so move and up
/// events must be heard at page scope, not only on the knob's own surface.
/// The controller calls `attach` once on entering a drag and `detach` once on
/// leaving it.
pub trait ListenerScope {
    /// Start delivering move/up events to the knob.
    ///
    /// # Errors
    ///
    /// [`KnobError::Listener`] when the host refuses the registration.
    fn attach(&mut self) -> Result<(), KnobError>;

    /// Stop delivering move/up events to the knob.
    fn detach(&mut self);
}

/// Scope for hosts that already route every event of a captured drag to the
/// knob (pointer capture, immediate-mode UIs). Nothing to register.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapturedPointer;

impl ListenerScope for CapturedPointer {
    fn attach(&mut self) -> Result<(), KnobError> {
        Ok(())
    }

    fn detach(&mut self) {}
}
