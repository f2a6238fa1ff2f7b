//! Error type shared by the controller, the option parser, and the browser binding.

/// Errors surfaced by the knob crate.
///
/// Degenerate but well-formed configuration (zero value span, zero-length
/// travel arc) is never an error; it is absorbed by the mapping rules.
#[derive(Debug, thiserror::Error)]
pub enum KnobError {
    /// A touch event arrived with no contact points.
    #[error("touch event carries no contact points")]
    EmptyTouchList,
    /// An input coordinate was NaN or infinite.
    #[error("non-finite {axis} coordinate: {value}")]
    NonFiniteCoordinate { axis: &'static str, value: f64 },
    /// A numeric option was NaN or infinite.
    #[error("option `{name}` must be finite, got {value}")]
    InvalidOption { name: &'static str, value: f64 },
    /// Options could not be parsed from JSON.
    #[error("failed to parse knob options: {0}")]
    Parse(#[from] serde_json::Error),
    /// The host refused to register gesture listeners.
    #[error("listener registration failed: {0}")]
    Listener(String),
}
