//! Background execution of the filter pipeline.
//!
//! Slider edits arrive faster than a full pipeline pass completes, so
//! every request supersedes the one before it: the runner bumps a shared
//! generation counter, the older run notices at its next stage boundary
//! and quietly drops its partial work. Only the most recent request can
//! ever deliver an image.

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task;
use tracing::{debug, warn};

use phototune_core::{CancelToken, FilterError, FilterParams, Generation, Pipeline, PixelBuf};

/// Owns the canonical baseline image and dispatches pipeline runs onto
/// the tokio blocking pool.
///
/// The baseline is what the brightness stage always starts from; filtered
/// results never feed back into it, so repeated slider edits do not
/// compound. Runs hold the baseline behind an `Arc` and only ever read it.
///
/// `request` must be called from within a tokio runtime.
pub struct FilterRunner {
    baseline: Arc<PixelBuf>,
    pipeline: Arc<Pipeline>,
    generation: Generation,
}

impl FilterRunner {
    pub fn new(baseline: PixelBuf) -> Self {
        Self {
            baseline: Arc::new(baseline),
            pipeline: Arc::new(Pipeline::new()),
            generation: Generation::new(),
        }
    }

    /// Replace the canonical baseline, e.g. after the user picks a new
    /// photo. Outstanding runs are superseded: their results would
    /// describe an image that is no longer current.
    pub fn load_baseline(&mut self, image: PixelBuf) {
        self.generation.invalidate_all();
        self.baseline = Arc::new(image);
    }

    pub fn baseline(&self) -> &PixelBuf {
        &self.baseline
    }

    /// Start a pipeline run, superseding any run still in flight.
    ///
    /// Parameters are validated before the previous run is disturbed: a
    /// rejected request leaves whatever is in flight running.
    pub fn request(&self, params: FilterParams) -> Result<PendingRun, FilterError> {
        params.validate()?;

        let token = self.generation.begin();
        let (tx, rx) = oneshot::channel();

        let baseline = Arc::clone(&self.baseline);
        let pipeline = Arc::clone(&self.pipeline);
        let worker_token = token.clone();
        task::spawn_blocking(move || {
            match pipeline.process_with_cancel(&baseline, &params, &worker_token) {
                Ok(Some(image)) => {
                    // A run superseded after its final stage must still
                    // deliver nothing.
                    if worker_token.is_cancelled() {
                        debug!("run superseded after completion, dropping result");
                    } else if tx.send(image).is_err() {
                        debug!("result receiver dropped");
                    }
                }
                Ok(None) => debug!("run cancelled"),
                Err(err) => warn!(%err, "pipeline run failed"),
            }
        });

        Ok(PendingRun { token, rx })
    }

    /// Cancel whatever run is outstanding without starting a new one.
    pub fn cancel_pending(&self) {
        self.generation.invalidate_all();
    }
}

/// One accepted filter request.
///
/// Resolves to exactly zero or one image: zero iff the run was cancelled
/// or superseded before it finished.
pub struct PendingRun {
    token: CancelToken,
    rx: oneshot::Receiver<PixelBuf>,
}

impl PendingRun {
    /// Cancel this run explicitly.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Wait for the run's outcome, on whatever executor context the
    /// caller chooses to await from.
    pub async fn finish(self) -> Option<PixelBuf> {
        self.rx.await.ok()
    }
}
