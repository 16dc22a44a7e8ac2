pub(crate) mod brightness;
pub(crate) mod contrast;
pub(crate) mod gamma;
pub(crate) mod saturation;

/// Stretch ratio used by the contrast and saturation stages:
/// `(255 + v) / (255 - v)`.
///
/// Each stage computes this from its own slider value; the two never
/// share a result. `v == 255` would divide by zero, parameter validation
/// keeps it out.
pub(crate) fn stretch_ratio(value: f32) -> f64 {
    (255.0 + f64::from(value)) / (255.0 - f64::from(value))
}

/// Truncate toward zero, then clamp into the channel range.
pub(crate) fn clamp_channel(value: f64) -> u8 {
    (value as i32).clamp(0, 255) as u8
}
