use std::collections::BTreeMap;
use std::time::Duration;

use super::{Scheduler, TimerHandle, MIN_PERIOD};

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    deadline: Duration,
    period: Option<Duration>,
}

/// Deterministic scheduler driven by hand.
///
/// Time only moves when [`VirtualClock::pop_due`] or
/// [`VirtualClock::advance_to`] is called. Timers with equal deadlines fire
/// in the order they were scheduled.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerHandle, PendingTimer>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time since construction.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers currently scheduled.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle)
    }

    /// Earliest deadline among scheduled timers.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.values().map(|t| t.deadline).min()
    }

    /// Fire the earliest timer due at or before `until`.
    ///
    /// Moves the clock to that timer's deadline. Repeating timers are re-armed
    /// one period later; one-shot timers are removed.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerHandle> {
        let (handle, timer) = self
            .timers
            .iter()
            .filter(|(_, t)| t.deadline <= until)
            .min_by_key(|(handle, t)| (t.deadline, **handle))
            .map(|(handle, t)| (*handle, *t))?;

        self.now = self.now.max(timer.deadline);
        match timer.period {
            Some(period) => {
                if let Some(entry) = self.timers.get_mut(&handle) {
                    entry.deadline = timer.deadline + period;
                }
            }
            None => {
                self.timers.remove(&handle);
            }
        }
        Some(handle)
    }

    /// Move the clock forward without firing anything.
    ///
    /// Callers are expected to drain [`VirtualClock::pop_due`] first.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    fn insert(&mut self, delay: Duration, period: Option<Duration>) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle::from_raw(self.next_id);
        self.timers.insert(
            handle,
            PendingTimer {
                deadline: self.now + delay,
                period,
            },
        );
        handle
    }
}

impl Scheduler for VirtualClock {
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        self.insert(delay, None)
    }

    fn schedule_every(&mut self, period: Duration) -> TimerHandle {
        let period = period.max(MIN_PERIOD);
        self.insert(period, Some(period))
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.remove(&handle);
    }
}
