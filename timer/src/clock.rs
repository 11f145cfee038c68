use std::fmt::Debug;

/// A source of opaque points in time.
pub trait ClockSource {
    type Instant: Copy + Debug;

    /// Read the clock
    fn now(&self) -> Self::Instant;

    /// Return the absolute time, in seconds, between `a` and `b`. The order of the
    /// arguments does not matter and the result is never negative
    fn difference(&self, a: Self::Instant, b: Self::Instant) -> f64;
}

/// Monotonic high resolution clock (performance counter on Windows,
/// `CLOCK_MONOTONIC` on unix)
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl ClockSource for MonotonicClock {
    type Instant = std::time::Instant;

    fn now(&self) -> Self::Instant {
        std::time::Instant::now()
    }

    fn difference(&self, a: Self::Instant, b: Self::Instant) -> f64 {
        if b >= a {
            b.duration_since(a).as_secs_f64()
        } else {
            a.duration_since(b).as_secs_f64()
        }
    }
}

/// Seconds + microseconds since UNIX EPOCH. Both fields are negative when the
/// system clock is set before the EPOCH
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    pub secs: i64,
    pub micros: i64,
}

impl TimeOfDay {
    pub fn new(secs: i64, micros: i64) -> Self {
        TimeOfDay { secs, micros }
    }

    fn from_duration(d: std::time::Duration) -> Self {
        TimeOfDay {
            secs: d.as_secs().try_into().unwrap_or(i64::MAX),
            micros: d.subsec_micros().into(),
        }
    }

    fn negate(self) -> Self {
        TimeOfDay {
            secs: -self.secs,
            micros: -self.micros,
        }
    }
}

/// Time-of-day clock, backed by `std::time::SystemTime`. Readings may jump
/// backwards if the system time is adjusted
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl ClockSource for WallClock {
    type Instant = TimeOfDay;

    fn now(&self) -> Self::Instant {
        match std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
            Ok(since_epoch) => TimeOfDay::from_duration(since_epoch),
            Err(e) => {
                tracing::debug!("System clock is set before UNIX EPOCH. {}", e);
                TimeOfDay::from_duration(e.duration()).negate()
            }
        }
    }

    fn difference(&self, a: Self::Instant, b: Self::Instant) -> f64 {
        let secs = b.secs.saturating_sub(a.secs) as f64;
        let micros = b.micros.saturating_sub(a.micros) as f64;
        (secs + micros / 1e6).abs()
    }
}

/// The clock `StopWatch` uses unless told otherwise
#[cfg(any(unix, windows))]
pub type PlatformClock = MonotonicClock;

#[cfg(not(any(unix, windows)))]
pub type PlatformClock = WallClock;
