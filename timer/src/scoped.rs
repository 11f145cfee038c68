use crate::stopwatch::{StopWatch, Timer};

/// Starts a timer when created and stops it when dropped, so the timed region
/// is exactly the scope of the guard, whichever way that scope is left.
///
/// ```
/// use timerlib::{ScopedGuard, StopWatch};
///
/// let mut sw = StopWatch::new(false);
/// {
///     let _guard = ScopedGuard::new(&mut sw);
///     // ...do stuff
/// }
/// assert!(!sw.is_ticking());
/// ```
#[must_use = "the timer stops as soon as the guard is dropped"]
pub struct ScopedGuard<'a, T: Timer + ?Sized = StopWatch> {
    timer: &'a mut T,
}

impl<'a, T: Timer + ?Sized> ScopedGuard<'a, T> {
    pub fn new(timer: &'a mut T) -> Self {
        timer.start();
        ScopedGuard { timer }
    }

    /// Explicit start of the timer
    pub fn start(&mut self) {
        self.timer.start();
    }

    /// Explicit stop of the timer
    pub fn stop(&mut self) {
        self.timer.stop();
    }

    /// Explicit reset of the timer
    pub fn reset(&mut self) {
        self.timer.reset();
    }

    pub fn timer(&self) -> &T {
        &*self.timer
    }
}

impl<T: Timer + ?Sized> Drop for ScopedGuard<'_, T> {
    fn drop(&mut self) {
        self.timer.stop();
    }
}
