//! Delay collaborator seam.
//!
//! All blocking in the poll loop is voluntary, bounded-duration delay:
//! debounce timing between polls and frame pacing inside animations.

/// Suspends the current activity for a bounded number of time units.
///
/// The unit is whatever the scheduling framework counts in, typically
/// milliseconds-scale ticks; the menu only relies on the delays being
/// short and bounded.
pub trait Pacer {
    /// Suspends for `ticks` time units.
    fn delay(&mut self, ticks: u32);
}

/// A pacer that sleeps the current thread.
///
/// Useful for hosted demos; embedded targets supply their own pacer
/// backed by the cooperative scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer {
    /// Duration of one tick in milliseconds.
    pub tick_ms: u64,
}

impl ThreadPacer {
    /// Creates a pacer with the given tick duration in milliseconds.
    #[must_use]
    pub fn new(tick_ms: u64) -> Self {
        Self { tick_ms }
    }
}

impl Pacer for ThreadPacer {
    fn delay(&mut self, ticks: u32) {
        std::thread::sleep(std::time::Duration::from_millis(
            u64::from(ticks) * self.tick_ms,
        ));
    }
}
