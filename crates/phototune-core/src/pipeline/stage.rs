use crate::image_buf::PixelBuf;
use crate::params::FilterParams;

use super::stages;

/// The closed set of filter stages.
///
/// Dispatch is a match rather than an open tag, so adding a stage without
/// wiring it up is a compile error instead of a silently ignored branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Brightness,
    Contrast,
    Saturation,
    Gamma,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Brightness => "brightness",
            Stage::Contrast => "contrast",
            Stage::Saturation => "saturation",
            Stage::Gamma => "gamma",
        }
    }

    /// Apply this stage to a whole buffer.
    ///
    /// Expects `params` to have passed [`FilterParams::validate`]; over
    /// validated inputs every stage is total.
    pub fn apply(self, input: PixelBuf, params: &FilterParams) -> PixelBuf {
        match self {
            Stage::Brightness => stages::brightness::apply(input, params.brightness),
            Stage::Contrast => stages::contrast::apply(input, params.contrast),
            Stage::Saturation => stages::saturation::apply(input, params.saturation),
            Stage::Gamma => stages::gamma::apply(input, params.gamma),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_stable() {
        assert_eq!(Stage::Brightness.name(), "brightness");
        assert_eq!(Stage::Contrast.name(), "contrast");
        assert_eq!(Stage::Saturation.name(), "saturation");
        assert_eq!(Stage::Gamma.name(), "gamma");
    }

    #[test]
    fn apply_routes_to_the_matching_slider() {
        let buf = PixelBuf::from_data(1, 1, vec![100, 100, 100]).unwrap();
        let params = FilterParams {
            brightness: 20.0,
            ..Default::default()
        };
        // only the brightness stage should react to the brightness slider
        let shifted = Stage::Brightness.apply(buf.clone(), &params);
        assert_eq!(shifted.data, vec![120, 120, 120]);
        let untouched = Stage::Contrast.apply(buf, &params);
        assert_eq!(untouched.data, vec![100, 100, 100]);
    }
}
