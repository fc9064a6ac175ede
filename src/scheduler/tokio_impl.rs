use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::{Scheduler, TimerHandle, MIN_PERIOD};

/// Scheduler backed by `tokio::time`.
///
/// Every timer is a spawned task that posts `wrap(handle)` into the host's
/// event channel when it fires, so the controller is only ever touched by
/// the task that owns it. Must be used from within a tokio runtime.
pub struct TokioScheduler<E> {
    tx: UnboundedSender<E>,
    wrap: fn(TimerHandle) -> E,
    next_id: u64,
    tasks: HashMap<TimerHandle, JoinHandle<()>>,
}

impl<E: Send + 'static> TokioScheduler<E> {
    pub fn new(tx: UnboundedSender<E>, wrap: fn(TimerHandle) -> E) -> Self {
        Self {
            tx,
            wrap,
            next_id: 0,
            tasks: HashMap::new(),
        }
    }

    /// Number of timer tasks not yet cancelled.
    pub fn active(&self) -> usize {
        self.tasks.len()
    }

    fn next_handle(&mut self) -> TimerHandle {
        self.next_id += 1;
        TimerHandle::from_raw(self.next_id)
    }
}

impl<E: Send + 'static> Scheduler for TokioScheduler<E> {
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        let handle = self.next_handle();
        let tx = self.tx.clone();
        let event = (self.wrap)(handle);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(event).is_err() {
                tracing::trace!(timer = handle.raw(), "Timer fired after host loop exited");
            }
        });
        self.tasks.insert(handle, task);
        handle
    }

    fn schedule_every(&mut self, period: Duration) -> TimerHandle {
        let handle = self.next_handle();
        let period = period.max(MIN_PERIOD);
        let tx = self.tx.clone();
        let wrap = self.wrap;
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(wrap(handle)).is_err() {
                    break;
                }
            }
        });
        self.tasks.insert(handle, task);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
        }
    }
}

impl<E> Drop for TokioScheduler<E> {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
