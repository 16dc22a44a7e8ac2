use crate::image_buf::PixelBuf;

use super::{clamp_channel, stretch_ratio};

/// Saturation stretch about each pixel's own channel average.
///
/// The pivot is per-pixel, `(R + G + B) / 3` in integer steps, so gray
/// pixels are fixed points and colors spread or collapse around their own
/// neutral rather than a global one.
pub(crate) fn apply(mut input: PixelBuf, value: f32) -> PixelBuf {
    if value == 0.0 {
        return input;
    }

    let alpha = stretch_ratio(value);
    for px in input.data.chunks_exact_mut(3) {
        let rgb_avg = (i32::from(px[0]) + i32::from(px[1]) + i32::from(px[2])) / 3;
        let rgb_avg = f64::from(rgb_avg);
        for ch in px {
            *ch = clamp_channel(alpha * (f64::from(*ch) - rgb_avg) + rgb_avg);
        }
    }
    input
}
