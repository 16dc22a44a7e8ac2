use crate::image_buf::PixelBuf;

use super::clamp_channel;

/// Power-curve gamma: `255 * (c / 255)^v` per channel.
///
/// The curve depends only on the channel value, so it is baked into a
/// 256-entry table once per invocation instead of calling `powf` per
/// channel. An exponent of 0 maps every channel to 255 (`0^0` is 1 under
/// the f64 `powf` convention).
pub(crate) fn apply(mut input: PixelBuf, value: f32) -> PixelBuf {
    if value == 1.0 {
        return input;
    }

    let exponent = f64::from(value);
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = clamp_channel(255.0 * (i as f64 / 255.0).powf(exponent));
    }

    for ch in &mut input.data {
        *ch = lut[usize::from(*ch)];
    }
    input
}
