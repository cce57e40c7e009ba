use std::time::{Duration, Instant};

/// A timer accumulating the time spent in part of a pipeline step.
#[derive(Copy, Clone, Debug, Default)]
pub struct Timer {
    time: Duration,
    start: Option<Instant>,
}

impl Timer {
    /// A timer that has measured nothing yet.
    pub fn new() -> Self {
        Timer {
            time: Duration::ZERO,
            start: None,
        }
    }

    /// Resets the accumulated time and starts measuring.
    pub fn start(&mut self) {
        self.time = Duration::ZERO;
        self.start = Some(Instant::now());
    }

    /// Stops measuring, adding the elapsed time to the total.
    pub fn pause(&mut self) {
        if let Some(start) = self.start.take() {
            self.time += start.elapsed();
        }
    }

    /// Resumes measuring without resetting the total.
    pub fn resume(&mut self) {
        self.start = Some(Instant::now());
    }

    /// The accumulated time.
    #[inline]
    pub fn time(&self) -> Duration {
        self.time
    }
}

/// Per-step diagnostic timings of the pipeline.
///
/// Purely observational: nothing in the pipeline reads these back. The split
/// mirrors the two halves of a step — everything up to and including the
/// sort, then callback delivery.
#[derive(Copy, Clone, Debug, Default)]
pub struct Counters {
    /// Time spent counting, unrolling, extracting, and sorting.
    pub preprocessing: Timer,
    /// Time spent delivering listener callbacks.
    pub dispatch: Timer,
}

impl Counters {
    /// Counters with no measured time.
    pub fn new() -> Self {
        Counters {
            preprocessing: Timer::new(),
            dispatch: Timer::new(),
        }
    }
}
