use thiserror::Error;

/// Errors surfaced by the filter core.
///
/// Cancellation is not represented here: a cancelled run is a normal
/// non-delivery outcome, not a failure.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FilterError {
    /// Pixel coordinate outside the buffer geometry. Callers holding a
    /// valid width/height should never hit this.
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} buffer")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Slider value outside the range the stage math is defined on.
    /// Raised when a request is accepted, before any pixel is touched.
    #[error("invalid {slider} value {value}: expected {expected}")]
    InvalidParameter {
        slider: &'static str,
        value: f32,
        expected: &'static str,
    },
}
