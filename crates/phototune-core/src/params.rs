use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Slider limit shared by the brightness, contrast and saturation sliders.
pub const SLIDER_LIMIT: f32 = 255.0;

/// One run's worth of slider values.
///
/// Parameters are an immutable snapshot read once when a run starts;
/// moving a slider mid-run starts a new run rather than mutating these.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilterParams {
    /// Additive channel offset in [-255, 255]. Truncated to a whole
    /// channel step before it is applied.
    pub brightness: f32,
    /// Contrast stretch slider in (-255, 255).
    pub contrast: f32,
    /// Saturation stretch slider in (-255, 255).
    pub saturation: f32,
    /// Power-curve exponent, > 0. 1.0 leaves the image untouched.
    pub gamma: f32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 0.0,
            saturation: 0.0,
            gamma: 1.0,
        }
    }
}

impl FilterParams {
    /// Reject values the stage math is not defined on.
    ///
    /// Contrast and saturation both feed `(255 + v) / (255 - v)`, so 255
    /// must never reach a stage; the range is kept symmetric. Runs whose
    /// parameters fail here are refused before any pixel work starts.
    pub fn validate(&self) -> Result<(), FilterError> {
        if !self.brightness.is_finite() || self.brightness.abs() > SLIDER_LIMIT {
            return Err(FilterError::InvalidParameter {
                slider: "brightness",
                value: self.brightness,
                expected: "a value in [-255, 255]",
            });
        }
        check_stretch_slider("contrast", self.contrast)?;
        check_stretch_slider("saturation", self.saturation)?;
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(FilterError::InvalidParameter {
                slider: "gamma",
                value: self.gamma,
                expected: "a positive exponent",
            });
        }
        Ok(())
    }
}

fn check_stretch_slider(slider: &'static str, value: f32) -> Result<(), FilterError> {
    if !value.is_finite() || value.abs() >= SLIDER_LIMIT {
        return Err(FilterError::InvalidParameter {
            slider,
            value,
            expected: "a value in (-255, 255)",
        });
    }
    Ok(())
}
