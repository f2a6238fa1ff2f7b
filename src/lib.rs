//! Rotary knob controller driven by pointer and touch drags.
//!
//! A linear drag is mapped onto an angular travel arc and from there onto a
//! bounded integer value. The controller owns the gesture state machine
//! (idle → dragging → idle), renders through a [`surface::RenderSurface`], and
//! notifies `change` observers either on every move or once per release.
//! Hosts own layout and skinning; they feed events in and read values out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`knob`] | [`knob::KnobController`]: state machine, rendering, notification |
//! | [`mapper`] | Pure drag → rotation → value mapping |
//! | [`arc`] | Travel arc between start and end angles |
//! | [`input`] | Input event types, outcomes, and gesture state |
//! | [`config`] | Host options, validated config, viewport calibration |
//! | [`notify`] | `change` observer list |
//! | [`surface`] | Render and listener-scope capabilities |
//! | [`error`] | [`error::KnobError`] |
//! | [`consts`] | Defaults and calibration constants |
//! | `web` | DOM binding (feature `web`) |

pub mod arc;
pub mod config;
pub mod consts;
pub mod error;
pub mod input;
pub mod knob;
pub mod mapper;
pub mod notify;
pub mod surface;
#[cfg(feature = "web")]
pub mod web;

pub use config::{EmissionMode, KnobConfig, KnobOptions, Viewport};
pub use error::KnobError;
pub use input::{InputEvent, Outcome, Point};
pub use knob::KnobController;
pub use surface::{CapturedPointer, ListenerScope, RenderSurface};
