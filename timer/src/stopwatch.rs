use crate::clock::{ClockSource, PlatformClock};
use crate::TimerError;
use std::time::Duration;

/// Anything that can be started, stopped and reset. `ScopedGuard` drives its
/// target through this trait
pub trait Timer {
    fn start(&mut self);
    fn stop(&mut self);
    fn reset(&mut self);
}

/// Accumulating stopwatch.
///
/// Elapsed time is the sum of all completed start/stop segments plus the
/// currently open one (if any). A `StopWatch` can be started and stopped any
/// number of times:
///
/// ```
/// use timerlib::StopWatch;
///
/// let mut sw = StopWatch::new(false); // don't start ticking yet
/// sw.start();
/// sw.stop();
/// sw.start(); // continue where we left off
/// sw.stop();
/// let secs = sw.elapsed_total();
/// sw.reset();
/// assert!(secs >= 0.0);
/// assert_eq!(sw.elapsed_total(), 0.0);
/// ```
///
/// Mutating the same instance from multiple threads requires external locking.
/// Dropping a ticking `StopWatch` simply loses the open segment.
#[derive(Debug, Clone)]
pub struct StopWatch<C: ClockSource = PlatformClock> {
    clock: C,
    /// Set while ticking: the reading taken when the current segment started
    start: Option<C::Instant>,
    /// Seconds committed by previous segments
    accumulated: f64,
}

impl StopWatch {
    /// Create a stopwatch over the platform clock. When `autostart` is
    /// `true` it starts ticking immediately
    pub fn new(autostart: bool) -> Self {
        Self::with_clock(PlatformClock::default(), autostart)
    }
}

impl Default for StopWatch {
    fn default() -> Self {
        StopWatch::new(true)
    }
}

impl<C: ClockSource> StopWatch<C> {
    pub fn with_clock(clock: C, autostart: bool) -> Self {
        let mut sw = StopWatch {
            clock,
            start: None,
            accumulated: 0.0,
        };
        if autostart {
            sw.start();
        }
        sw
    }

    /// Start ticking. Does nothing if already ticking
    pub fn start(&mut self) {
        if self.start.is_none() {
            self.start = Some(self.clock.now());
        }
    }

    /// Stop ticking and add the current segment to the accumulated time.
    /// Does nothing if not ticking
    pub fn stop(&mut self) {
        let Some(start) = self.start.take() else {
            return;
        };
        let now = self.clock.now();
        let segment = self.clock.difference(start, now);
        self.accumulated += segment;
        tracing::trace!(
            "Segment of {:.6}s committed (total: {:.6}s)",
            segment,
            self.accumulated
        );
    }

    /// Zero the accumulated time and stop ticking.
    ///
    /// Note that an open segment is discarded, not committed. To keep it, call
    /// `stop()` first
    pub fn reset(&mut self) {
        if self.start.take().is_some() {
            tracing::trace!("Reset discarded an open segment");
        }
        self.accumulated = 0.0;
    }

    /// Total elapsed seconds: all committed segments plus the open one
    pub fn elapsed_total(&self) -> f64 {
        self.accumulated + self.elapsed_since_start()
    }

    /// Seconds since the current segment started, `0.0` when not ticking
    pub fn elapsed_since_start(&self) -> f64 {
        match self.start {
            Some(start) => self.clock.difference(start, self.clock.now()),
            None => 0.0,
        }
    }

    pub fn is_ticking(&self) -> bool {
        self.start.is_some()
    }

    /// Same as `elapsed_total()`, as a `Duration`
    pub fn elapsed(&self) -> Result<Duration, TimerError> {
        Ok(Duration::try_from_secs_f64(self.elapsed_total())?)
    }

    pub fn elapsed_micros(&self) -> Result<u128, TimerError> {
        Ok(self.elapsed()?.as_micros())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: ClockSource> Timer for StopWatch<C> {
    fn start(&mut self) {
        StopWatch::start(self)
    }

    fn stop(&mut self) {
        StopWatch::stop(self)
    }

    fn reset(&mut self) {
        StopWatch::reset(self)
    }
}
