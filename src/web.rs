//! Browser binding (feature `web`): mounts a [`KnobController`] on a DOM element.
//!
//! The element receives `mousedown`/`touchstart`; while a drag is live the
//! document receives `mousemove`/`touchmove`/`mouseup`/`touchend`/`touchcancel`
//! so the drag keeps tracking outside the element. Document listeners exist
//! only between pointer-down and release. Rotation is written as a CSS
//! `transform` on the element.
//!
//! Observers run inside the controller's input handlers and must not call back
//! into the same `KnobElement`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget, HtmlElement, MouseEvent, TouchEvent};

use crate::config::{KnobOptions, Viewport};
use crate::error::KnobError;
use crate::input::{InputEvent, Outcome, Point};
use crate::knob::KnobController;
use crate::notify::ObserverId;
use crate::surface::{ListenerScope, RenderSurface};

/// A controller bound to the browser.
pub type DomKnob = KnobController<DocumentListeners, ElementSurface>;

type Listener = Closure<dyn FnMut(Event)>;

const DOWN_EVENTS: [&str; 2] = ["mousedown", "touchstart"];
const MOVE_EVENTS: [&str; 2] = ["mousemove", "touchmove"];
const UP_EVENTS: [&str; 2] = ["mouseup", "touchend"];
const CANCEL_EVENTS: [&str; 1] = ["touchcancel"];

// =============================================================
// Render surface
// =============================================================

/// Rotates an element with a CSS transform.
pub struct ElementSurface {
    element: HtmlElement,
}

impl ElementSurface {
    #[must_use]
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl RenderSurface for ElementSurface {
    fn apply_rotation(&mut self, degrees: f64) {
        let transform = format!("rotate({degrees}deg)");
        if let Err(e) = self.element.style().set_property("transform", &transform) {
            tracing::warn!(error = ?e, "failed to apply knob rotation");
        }
    }
}

// =============================================================
// Listener scope
// =============================================================

/// Document-level move/up listeners for one knob.
///
/// The closures are built once at mount time and only added to or removed
/// from the document, so repeated drags never stack registrations.
pub struct DocumentListeners {
    document: Document,
    on_move: Listener,
    on_up: Listener,
    on_cancel: Listener,
}

impl DocumentListeners {
    fn new(document: Document, knob: Weak<RefCell<DomKnob>>) -> Self {
        let on_move = {
            let knob = knob.clone();
            Listener::new(move |event: Event| {
                let Some(knob) = knob.upgrade() else {
                    return;
                };
                let input = input_from_event(&event);
                let result = knob.borrow_mut().on_pointer_move(&input);
                settle(&event, result);
            })
        };
        let on_up = {
            let knob = knob.clone();
            Listener::new(move |event: Event| {
                let Some(knob) = knob.upgrade() else {
                    return;
                };
                let outcome = knob.borrow_mut().on_pointer_up();
                settle(&event, Ok(outcome));
            })
        };
        let on_cancel = Listener::new(move |event: Event| {
            let Some(knob) = knob.upgrade() else {
                return;
            };
            let outcome = knob.borrow_mut().cancel();
            settle(&event, Ok(outcome));
        });
        Self { document, on_move, on_up, on_cancel }
    }

    fn bindings(&self) -> [(&'static [&'static str], &Listener); 3] {
        [(&MOVE_EVENTS[..], &self.on_move), (&UP_EVENTS[..], &self.on_up), (&CANCEL_EVENTS[..], &self.on_cancel)]
    }
}

impl ListenerScope for DocumentListeners {
    fn attach(&mut self) -> Result<(), KnobError> {
        let target: &EventTarget = self.document.as_ref();
        for (kinds, listener) in self.bindings() {
            for kind in kinds {
                add_listener(target, kind, listener)?;
            }
        }
        Ok(())
    }

    fn detach(&mut self) {
        let target: &EventTarget = self.document.as_ref();
        for (kinds, listener) in self.bindings() {
            for kind in kinds {
                remove_listener(target, kind, listener);
            }
        }
    }
}

// =============================================================
// Element binding
// =============================================================

/// A knob mounted on an element. Dropping it unbinds the element.
pub struct KnobElement {
    element: HtmlElement,
    knob: Rc<RefCell<DomKnob>>,
    on_down: Listener,
}

impl KnobElement {
    /// Bind a knob to `element` and render its initial value.
    ///
    /// The drag calibration comes from the document body size at mount time.
    ///
    /// # Errors
    ///
    /// [`KnobError::InvalidOption`] for non-finite options and
    /// [`KnobError::Listener`] when there is no document or the element
    /// refuses its listeners.
    pub fn mount(element: HtmlElement, options: &KnobOptions) -> Result<Self, KnobError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| KnobError::Listener("no document available".into()))?;
        let viewport = document.body().map_or(Viewport::new(0.0, 0.0), |body| {
            Viewport::new(f64::from(body.client_width()), f64::from(body.client_height()))
        });
        let config = options.validate()?;

        let knob = Rc::new_cyclic(|weak: &Weak<RefCell<DomKnob>>| {
            let listeners = DocumentListeners::new(document.clone(), weak.clone());
            let surface = ElementSurface::new(element.clone());
            RefCell::new(KnobController::new(config, options.value, viewport, listeners, surface))
        });

        let on_down = {
            let knob = Rc::downgrade(&knob);
            Listener::new(move |event: Event| {
                let Some(knob) = knob.upgrade() else {
                    return;
                };
                let input = input_from_event(&event);
                let result = knob.borrow_mut().on_pointer_down(&input);
                settle(&event, result);
            })
        };
        // Built before binding so a failed registration unbinds on drop.
        let mounted = Self { element, knob, on_down };
        let target: &EventTarget = mounted.element.as_ref();
        for kind in DOWN_EVENTS {
            add_listener(target, kind, &mounted.on_down)?;
        }

        tracing::debug!(min = config.min, max = config.max, "knob mounted");
        Ok(mounted)
    }

    /// Current rounded value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.knob.borrow().value()
    }

    /// Re-seed the knob.
    ///
    /// # Errors
    ///
    /// [`KnobError::InvalidOption`] if `value` is not finite.
    pub fn set_initial_value(&self, value: f64) -> Result<(), KnobError> {
        self.knob.borrow_mut().set_initial_value(value)
    }

    /// Register a `change` observer.
    pub fn on_change(&self, observer: impl FnMut(i64) + 'static) -> ObserverId {
        self.knob.borrow_mut().on_change(observer)
    }

    /// Remove a `change` observer.
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        self.knob.borrow_mut().remove_observer(id)
    }

    /// Force-release a live drag, e.g. when the page becomes hidden.
    pub fn release(&self) -> Outcome {
        self.knob.borrow_mut().cancel()
    }
}

impl Drop for KnobElement {
    fn drop(&mut self) {
        let target: &EventTarget = self.element.as_ref();
        for kind in DOWN_EVENTS {
            remove_listener(target, kind, &self.on_down);
        }
    }
}

// =============================================================
// Helpers
// =============================================================

/// Resolve a DOM event into an `InputEvent` once, at the boundary.
fn input_from_event(event: &Event) -> InputEvent {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return InputEvent::pointer(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
    }
    let touches = event.unchecked_ref::<TouchEvent>().touches();
    let points = (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
        .collect();
    InputEvent::Touch(points)
}

/// Apply a handler outcome to the DOM event.
fn settle(event: &Event, result: Result<Outcome, KnobError>) {
    match result {
        Ok(Outcome::Consumed) => {
            event.stop_propagation();
            event.prevent_default();
        }
        Ok(Outcome::Ignored) => {}
        Err(e) => tracing::warn!(error = %e, "knob rejected input event"),
    }
}

/// Touch listeners must be non-passive to suppress scrolling.
fn add_listener(target: &EventTarget, kind: &str, listener: &Listener) -> Result<(), KnobError> {
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            listener.as_ref().unchecked_ref::<js_sys::Function>(),
            &options,
        )
        .map_err(|e| KnobError::Listener(format!("{kind}: {e:?}")))
}

fn remove_listener(target: &EventTarget, kind: &str, listener: &Listener) {
    let callback: &js_sys::Function = listener.as_ref().unchecked_ref();
    if let Err(e) = target.remove_event_listener_with_callback(kind, callback) {
        tracing::warn!(kind, error = ?e, "failed to remove knob listener");
    }
}
