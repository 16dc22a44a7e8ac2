use crate::image_buf::PixelBuf;

/// Additive brightness: every channel shifted by the slider value.
///
/// The slider is truncated to a whole channel step first, so fractional
/// positions behave like the nearest step toward zero.
pub(crate) fn apply(mut input: PixelBuf, value: f32) -> PixelBuf {
    if value == 0.0 {
        return input;
    }

    let shift = value as i32;
    for ch in &mut input.data {
        *ch = (i32::from(*ch) + shift).clamp(0, 255) as u8;
    }
    input
}
