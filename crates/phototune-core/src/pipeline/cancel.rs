use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Monotonic run counter shared between a runner and its in-flight runs.
///
/// Starting a run bumps the counter and pins the issued token to the new
/// value; every token issued earlier observes the mismatch and reports
/// cancellation at its next checkpoint. "Last request wins" falls out of
/// the comparison, with no shared mutable image state involved.
#[derive(Clone, Debug, Default)]
pub struct Generation {
    latest: Arc<AtomicU64>,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new run, superseding every run started earlier.
    pub fn begin(&self) -> CancelToken {
        let generation = self.latest.fetch_add(1, Ordering::Relaxed) + 1;
        CancelToken {
            latest: Arc::clone(&self.latest),
            generation,
            aborted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Supersede every outstanding run without starting a new one.
    pub fn invalidate_all(&self) {
        self.latest.fetch_add(1, Ordering::Relaxed);
    }
}

/// Cancellation handle for one pipeline run.
///
/// Cheap to clone; all clones observe the same run.
#[derive(Clone, Debug)]
pub struct CancelToken {
    latest: Arc<AtomicU64>,
    generation: u64,
    aborted: Arc<AtomicBool>,
}

impl CancelToken {
    /// Cancel this run explicitly, independent of newer runs.
    pub fn cancel(&self) {
        self.aborted.store(true, Ordering::Relaxed);
    }

    /// True once this run is explicitly cancelled or a newer run began.
    pub fn is_cancelled(&self) -> bool {
        self.aborted.load(Ordering::Relaxed)
            || self.latest.load(Ordering::Relaxed) != self.generation
    }
}
