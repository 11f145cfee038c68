use crate::clock::ClockSource;
use std::cell::Cell;
use std::rc::Rc;

/// Scripted clock. Clones share the same reading so a test can keep a handle
/// and move time while the stopwatch owns the other one.
/// Every `now()` call advances the reading by `step` seconds after returning it
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    reading: Rc<Cell<f64>>,
    step: f64,
    reads: Rc<Cell<usize>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock that moves forward by `step` seconds on every read
    pub fn with_step(step: f64) -> Self {
        ManualClock {
            step,
            ..Default::default()
        }
    }

    pub fn advance(&self, secs: f64) {
        self.reading.set(self.reading.get() + secs);
    }

    pub fn set(&self, secs: f64) {
        self.reading.set(secs);
    }

    /// Number of times the clock was read
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl ClockSource for ManualClock {
    type Instant = f64;

    fn now(&self) -> f64 {
        let reading = self.reading.get();
        self.reading.set(reading + self.step);
        self.reads.set(self.reads.get() + 1);
        reading
    }

    fn difference(&self, a: f64, b: f64) -> f64 {
        (b - a).abs()
    }
}

pub fn assert_secs_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}s, got {}s",
        expected,
        actual
    );
}

/// Route `tracing` output of the tests through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
