//! Elapsed time measurement: an accumulating start/stop/reset [`StopWatch`] and
//! a [`ScopedGuard`] that keeps a stopwatch ticking for exactly the lifetime of
//! a scope.
//!
//! ```
//! use timerlib::{ScopedGuard, StopWatch};
//!
//! let mut total = StopWatch::new(false);
//! for _ in 0..3 {
//!     let _guard = ScopedGuard::new(&mut total);
//!     // ...timed work
//! }
//! println!("took {:.6}s", total.elapsed_total());
//! ```

pub mod clock;
pub mod errors;
pub mod scoped;
pub mod stopwatch;

#[cfg(test)]
pub(crate) mod test_utils;

pub use clock::{ClockSource, MonotonicClock, PlatformClock, TimeOfDay, WallClock};
pub use errors::TimerError;
pub use scoped::ScopedGuard;
pub use stopwatch::*;
