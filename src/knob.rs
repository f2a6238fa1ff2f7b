//! The knob controller: configuration, gesture state machine, rendering and
//! change notification for a single knob.
//!
//! `KnobController` is browser-free. It is driven by three host calls per
//! gesture (`on_pointer_down`, any number of `on_pointer_move`, then
//! `on_pointer_up` or `cancel`) and talks back through its [`RenderSurface`]
//! and [`ChangeNotifier`]. The page-wide move/up listeners are acquired from
//! the [`ListenerScope`] on entering a drag and released on every way out of
//! it, including drop.

#[cfg(test)]
#[path = "knob_test.rs"]
mod knob_test;

use crate::config::{EmissionMode, KnobConfig, KnobOptions, Viewport};
use crate::error::KnobError;
use crate::input::{GestureState, InputEvent, Outcome, Point};
use crate::mapper;
use crate::notify::{ChangeNotifier, ObserverId};
use crate::surface::{ListenerScope, RenderSurface};

/// Registration of the page-wide listeners for one drag.
#[derive(Debug)]
struct Subscription {
    gesture: u64,
}

pub struct KnobController<S: ListenerScope, R: RenderSurface> {
    config: KnobConfig,
    state: GestureState,
    committed: f64,
    max_drag_distance: f64,
    scope: S,
    surface: R,
    notifier: ChangeNotifier,
    subscription: Option<Subscription>,
    gestures: u64,
}

impl<S: ListenerScope, R: RenderSurface> KnobController<S, R> {
    /// Create an idle controller showing `initial_value`.
    ///
    /// The drag calibration is taken from `viewport` once and never
    /// recomputed. The initial angle is rendered immediately.
    pub fn new(config: KnobConfig, initial_value: f64, viewport: Viewport, scope: S, surface: R) -> Self {
        let committed = mapper::rotation_for(&config, initial_value);
        let mut knob = Self {
            config,
            state: GestureState::Idle,
            committed,
            max_drag_distance: viewport.max_drag_distance(),
            scope,
            surface,
            notifier: ChangeNotifier::new(),
            subscription: None,
            gestures: 0,
        };
        tracing::debug!(
            arc = config.arc.degrees(),
            rotation = committed,
            max_drag_distance = knob.max_drag_distance,
            "knob created"
        );
        knob.render(committed);
        knob
    }

    /// Validate host options and create the controller from them.
    ///
    /// # Errors
    ///
    /// [`KnobError::InvalidOption`] if any numeric option is not finite.
    pub fn from_options(options: &KnobOptions, viewport: Viewport, scope: S, surface: R) -> Result<Self, KnobError> {
        let config = options.validate()?;
        Ok(Self::new(config, options.value, viewport, scope, surface))
    }

    // --- Public operations ---

    /// Re-seed the knob with `value` and render it.
    ///
    /// Out-of-range values saturate at the ends of the arc. Called during a
    /// drag, the drag is abandoned: its listeners are released, nothing is
    /// emitted, and later moves are ignored until the next pointer-down.
    ///
    /// # Errors
    ///
    /// [`KnobError::InvalidOption`] if `value` is not finite; state is untouched.
    pub fn set_initial_value(&mut self, value: f64) -> Result<(), KnobError> {
        if !value.is_finite() {
            return Err(KnobError::InvalidOption { name: "value", value });
        }
        if self.state.is_dragging() {
            tracing::debug!(gesture = self.gestures, "drag abandoned by re-seed");
            self.state = GestureState::Idle;
            self.release_listeners();
        }
        self.committed = mapper::rotation_for(&self.config, value);
        self.render(self.committed);
        Ok(())
    }

    /// Register a `change` observer.
    pub fn on_change(&mut self, observer: impl FnMut(i64) + 'static) -> ObserverId {
        self.notifier.subscribe(observer)
    }

    /// Remove a `change` observer. Returns `false` if it was not registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.notifier.unsubscribe(id)
    }

    // --- Input events ---

    /// Start a drag anchored at the event's primary contact.
    ///
    /// A pointer-down during a drag means the previous release was lost: that
    /// drag is finished as if released, and a new one starts on the listeners
    /// already registered.
    ///
    /// # Errors
    ///
    /// Malformed events ([`KnobError::EmptyTouchList`],
    /// [`KnobError::NonFiniteCoordinate`]) and listener registration failures
    /// ([`KnobError::Listener`]). State is untouched on error.
    pub fn on_pointer_down(&mut self, event: &InputEvent) -> Result<Outcome, KnobError> {
        let anchor = event.primary_point()?;

        if let GestureState::Dragging { provisional, .. } = self.state {
            tracing::warn!(gesture = self.gestures, "pointer-down during drag; finishing stale drag");
            self.commit(provisional);
        } else {
            self.acquire_listeners()?;
        }

        self.state = GestureState::Dragging { anchor, provisional: self.committed };
        tracing::debug!(gesture = self.gestures, x = anchor.x, y = anchor.y, "drag started");
        Ok(Outcome::Consumed)
    }

    /// Track a drag. Ignored when no drag is active.
    ///
    /// # Errors
    ///
    /// Malformed events during a drag. State is untouched on error.
    pub fn on_pointer_move(&mut self, event: &InputEvent) -> Result<Outcome, KnobError> {
        let GestureState::Dragging { anchor, .. } = self.state else {
            tracing::trace!("stray pointer-move while idle");
            return Ok(Outcome::Ignored);
        };
        let point = event.primary_point()?;

        let displacement = mapper::displacement(anchor, point);
        let provisional =
            mapper::drag_rotation(&self.config, self.committed, displacement, self.max_drag_distance);
        self.state = GestureState::Dragging { anchor, provisional };
        self.render(provisional);

        let value = mapper::value_for(&self.config, provisional);
        tracing::trace!(displacement, rotation = provisional, value, "drag moved");
        if self.config.emission == EmissionMode::Continuous {
            self.notifier.emit(value);
        }
        Ok(Outcome::Consumed)
    }

    /// End the drag and commit its rotation. Ignored when no drag is active.
    pub fn on_pointer_up(&mut self) -> Outcome {
        self.finish("released")
    }

    /// Force-release the drag (touch cancel, page hidden, lost release).
    ///
    /// Behaves exactly like [`Self::on_pointer_up`].
    pub fn cancel(&mut self) -> Outcome {
        self.finish("cancelled")
    }

    // --- Queries ---

    /// Current rounded value: live during a drag, committed otherwise.
    #[must_use]
    pub fn value(&self) -> i64 {
        mapper::value_for(&self.config, self.rotation())
    }

    /// Offset along the arc currently displayed.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        match self.state {
            GestureState::Dragging { provisional, .. } => provisional,
            GestureState::Idle => self.committed,
        }
    }

    /// Offset along the arc as of the last completed drag or re-seed.
    #[must_use]
    pub fn committed_rotation(&self) -> f64 {
        self.committed
    }

    /// Usable sweep of the travel arc, in degrees.
    #[must_use]
    pub fn max_degrees(&self) -> f64 {
        self.config.arc.degrees()
    }

    /// Angle currently rendered, in degrees.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.config.arc.angle_at(self.rotation())
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Gesture start position, absent when idle.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.state.anchor()
    }

    /// Pixels of drag that sweep the whole arc.
    #[must_use]
    pub fn max_drag_distance(&self) -> f64 {
        self.max_drag_distance
    }

    #[must_use]
    pub fn config(&self) -> &KnobConfig {
        &self.config
    }

    // --- Internals ---

    fn finish(&mut self, how: &'static str) -> Outcome {
        let GestureState::Dragging { provisional, .. } = self.state else {
            tracing::trace!(how, "stray release while idle");
            return Outcome::Ignored;
        };
        self.state = GestureState::Idle;
        self.release_listeners();
        self.commit(provisional);
        tracing::debug!(how, rotation = self.committed, "drag ended");
        Outcome::Consumed
    }

    /// Make `rotation` the committed offset and emit it in release mode.
    fn commit(&mut self, rotation: f64) {
        self.committed = rotation;
        if self.config.emission == EmissionMode::OnRelease {
            self.notifier.emit(mapper::value_for(&self.config, rotation));
        }
    }

    fn acquire_listeners(&mut self) -> Result<(), KnobError> {
        if self.subscription.is_some() {
            return Ok(());
        }
        self.scope.attach()?;
        self.gestures += 1;
        self.subscription = Some(Subscription { gesture: self.gestures });
        Ok(())
    }

    fn release_listeners(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.scope.detach();
            tracing::trace!(gesture = subscription.gesture, "gesture listeners released");
        }
    }

    fn render(&mut self, rotation: f64) {
        self.surface.apply_rotation(self.config.arc.angle_at(rotation));
    }
}

impl<S: ListenerScope, R: RenderSurface> Drop for KnobController<S, R> {
    fn drop(&mut self) {
        self.release_listeners();
    }
}

impl<S: ListenerScope, R: RenderSurface> std::fmt::Debug for KnobController<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnobController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("committed", &self.committed)
            .field("max_drag_distance", &self.max_drag_distance)
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}
