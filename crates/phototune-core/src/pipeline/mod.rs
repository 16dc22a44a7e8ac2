pub mod cancel;
pub mod stage;
mod stages;

use anyhow::Result;
use tracing::debug;

use crate::image_buf::PixelBuf;
use crate::params::FilterParams;
use cancel::CancelToken;
use stage::Stage;

/// Filter pipeline over 8-bit RGB buffers.
///
/// ```text
/// baseline -> Brightness -> Contrast -> Saturation -> Gamma -> result
/// ```
///
/// Brightness always reads the baseline handed to `process`, never a
/// previously filtered result, so repeated slider edits do not compound;
/// the later stages chain from each other's output. Each stage consumes
/// the previous stage's buffer exclusively and produces the next one.
pub struct Pipeline {
    stages: [Stage; 4],
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            stages: [
                Stage::Brightness,
                Stage::Contrast,
                Stage::Saturation,
                Stage::Gamma,
            ],
        }
    }

    /// Run all four stages over `baseline` with the given slider values.
    /// The baseline itself is never mutated.
    pub fn process(&self, baseline: &PixelBuf, params: &FilterParams) -> Result<PixelBuf> {
        params.validate()?;
        let mut current = baseline.clone();
        for stage in self.stages {
            debug!(stage = stage.name(), "processing");
            current = stage.apply(current, params);
        }
        Ok(current)
    }

    /// Like [`Pipeline::process`], but checks `token` at every stage
    /// boundary and abandons the run as soon as it is cancelled or
    /// superseded. A cancelled run yields `Ok(None)`; its partial buffers
    /// are dropped, never delivered.
    pub fn process_with_cancel(
        &self,
        baseline: &PixelBuf,
        params: &FilterParams,
        token: &CancelToken,
    ) -> Result<Option<PixelBuf>> {
        params.validate()?;
        let mut current = baseline.clone();
        for stage in self.stages {
            if token.is_cancelled() {
                debug!(stage = stage.name(), "run cancelled, discarding");
                return Ok(None);
            }
            debug!(stage = stage.name(), "processing");
            current = stage.apply(current, params);
        }
        if token.is_cancelled() {
            return Ok(None);
        }
        Ok(Some(current))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
