//! Cancellable timers for the carousel.
//!
//! The controller never sleeps; it asks a [`Scheduler`] for a timer and gets
//! a [`TimerHandle`] back. When the timer fires, the host hands the handle to
//! `CarouselController::on_timer`, which decides what it meant.

mod tokio_impl;
mod virtual_clock;

pub use tokio_impl::TokioScheduler;
pub use virtual_clock::VirtualClock;

use std::time::Duration;

/// Shortest period a repeating timer may have.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Opaque identifier of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Source of one-shot and repeating timers.
///
/// Implementations must never reuse a handle while it is scheduled, and
/// `cancel` must be safe to call with a handle that already fired or was
/// never issued.
pub trait Scheduler {
    /// Fire once after `delay`.
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle;

    /// Fire every `period`, first after one full period.
    fn schedule_every(&mut self, period: Duration) -> TimerHandle;

    /// Stop a timer. No-op for unknown handles.
    fn cancel(&mut self, handle: TimerHandle);
}
