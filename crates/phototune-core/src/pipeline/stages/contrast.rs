use crate::image_buf::PixelBuf;
use crate::stats;

use super::{clamp_channel, stretch_ratio};

/// Contrast stretch about the mean brightness of the stage input.
///
/// The mean is recomputed on every invocation; upstream stages shift it,
/// so a value cached across runs would pivot around the wrong gray.
pub(crate) fn apply(mut input: PixelBuf, value: f32) -> PixelBuf {
    if value == 0.0 {
        return input;
    }

    let alpha = stretch_ratio(value);
    let avg = f64::from(stats::average_brightness(&input));
    for ch in &mut input.data {
        *ch = clamp_channel(alpha * (f64::from(*ch) - avg) + avg);
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_exact_identity() {
        let buf = PixelBuf::test_card(8, 8);
        let expected = buf.data.clone();
        let result = apply(buf, 0.0);
        assert_eq!(result.data, expected);
    }

    #[test]
    fn uniform_image_is_a_fixed_point() {
        // every channel sits on the mean, so the stretch has nothing to move
        let buf = PixelBuf::from_data(3, 3, vec![90; 27]).unwrap();
        for v in [-200.0, -85.0, 85.0, 200.0] {
            let result = apply(buf.clone(), v);
            assert!(
                result.data.iter().all(|&c| c == 90),
                "uniform image should survive contrast {v}"
            );
        }
    }

    #[test]
    fn doubles_spread_at_alpha_two() {
        // avg of (100,100,100),(200,200,200) is 150; alpha(85) = 2
        let buf = PixelBuf::from_data(2, 1, vec![100, 100, 100, 200, 200, 200]).unwrap();
        let result = apply(buf, 85.0);
        assert_eq!(result.data, vec![50, 50, 50, 250, 250, 250]);
    }

    #[test]
    fn negative_slider_compresses_toward_mean() {
        // same image, alpha(-85) = 0.5
        let buf = PixelBuf::from_data(2, 1, vec![100, 100, 100, 200, 200, 200]).unwrap();
        let result = apply(buf, -85.0);
        assert_eq!(result.data, vec![125, 125, 125, 175, 175, 175]);
    }

    #[test]
    fn extreme_slider_clamps_to_channel_range() {
        let buf = PixelBuf::from_data(2, 1, vec![0, 0, 0, 255, 255, 255]).unwrap();
        let result = apply(buf, 250.0);
        assert_eq!(result.data, vec![0, 0, 0, 255, 255, 255]);
    }

    #[test]
    fn mean_comes_from_the_stage_input() {
        // skewed image: avg = (10*3 + 250*3*3) / 12 = 190 (floor of 190.0)
        let buf =
            PixelBuf::from_data(2, 2, vec![10, 10, 10, 250, 250, 250, 250, 250, 250, 250, 250, 250])
                .unwrap();
        let result = apply(buf, 85.0);
        // dark pixel: 2*(10-190)+190 = -170 -> 0; bright: 2*(250-190)+190 = 310 -> 255
        assert_eq!(&result.data[0..3], &[0, 0, 0]);
        assert_eq!(&result.data[3..6], &[255, 255, 255]);
    }
}
