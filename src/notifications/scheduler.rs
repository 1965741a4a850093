// SPDX-License-Identifier: MPL-2.0
//! Per-toast auto-dismiss countdowns.
//!
//! Every live toast owns at most one countdown: a lightweight Tokio task that
//! sleeps until its own deadline and then reports an [`Expiry`]. Whether the
//! expiry still counts is decided by [`Scheduler::settle`], which must run
//! under the same lock as cancellation. Each countdown carries a generation
//! number, so an expiry that lost a race against `cancel` (or against a
//! re-arm of the same id) is recognised and dropped.

use crate::domain::error::ToastError;
use crate::domain::toast::{DismissDelay, ToastId};
use std::collections::HashMap;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Report sent by a countdown task when its deadline passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    pub id: ToastId,
    generation: u64,
}

/// How a countdown ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    /// Deadline passed while collapsed; the toast was removed.
    Expired,
    /// The toast was removed before the deadline.
    Cancelled,
    /// Deadline passed while the stack was expanded; nothing happened.
    Suppressed,
}

#[derive(Debug)]
struct Countdown {
    generation: u64,
    task: AbortHandle,
}

/// Owns the outstanding countdowns.
#[derive(Debug)]
pub struct Scheduler {
    delay: DismissDelay,
    runtime: Handle,
    pending: HashMap<ToastId, Countdown>,
    next_generation: u64,
}

impl Scheduler {
    /// Creates a scheduler spawning its countdowns on `runtime`.
    #[must_use]
    pub fn new(delay: DismissDelay, runtime: Handle) -> Self {
        Self {
            delay,
            runtime,
            pending: HashMap::new(),
            next_generation: 0,
        }
    }

    #[must_use]
    pub fn delay(&self) -> DismissDelay {
        self.delay
    }

    /// Starts a fresh countdown for `id`, replacing any outstanding one.
    ///
    /// The deadline is fixed now, not when the task first runs.
    /// `on_expiry` runs on the runtime once the deadline passes and should
    /// hand the [`Expiry`] back to [`settle`](Self::settle).
    pub fn arm<F>(&mut self, id: ToastId, on_expiry: F)
    where
        F: FnOnce(Expiry) + Send + 'static,
    {
        if let Some(previous) = self.pending.remove(&id) {
            previous.task.abort();
            tracing::debug!(toast = %id, "countdown restarted");
        }

        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);

        let deadline = Instant::now() + self.delay.as_duration();
        let expiry = Expiry { id, generation };
        let task = self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_expiry(expiry);
        });

        tracing::debug!(toast = %id, delay_secs = self.delay.value(), "countdown armed");
        self.pending.insert(
            id,
            Countdown {
                generation,
                task: task.abort_handle(),
            },
        );
    }

    /// Cancels the countdown for `id`.
    ///
    /// Returns `true` if one was outstanding.
    pub fn cancel(&mut self, id: ToastId) -> bool {
        match self.pending.remove(&id) {
            Some(countdown) => {
                countdown.task.abort();
                tracing::debug!(toast = %id, "countdown cancelled");
                true
            }
            None => false,
        }
    }

    /// Claims an expiry, forgetting the countdown it belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ToastError::CancellationRace`] if the countdown was cancelled
    /// or replaced after its task had already woken up.
    pub fn settle(&mut self, expiry: Expiry) -> Result<(), ToastError> {
        match self.pending.get(&expiry.id) {
            Some(countdown) if countdown.generation == expiry.generation => {
                self.pending.remove(&expiry.id);
                Ok(())
            }
            _ => Err(ToastError::CancellationRace(expiry.id)),
        }
    }

    /// Returns whether `id` has an outstanding countdown.
    #[must_use]
    pub fn is_armed(&self, id: ToastId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Returns the number of outstanding countdowns.
    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.pending.len()
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        for countdown in self.pending.values() {
            countdown.task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    type Fired = Arc<Mutex<Vec<Expiry>>>;

    fn recorder() -> (Fired, impl Fn() -> Box<dyn FnOnce(Expiry) + Send>) {
        let fired: Fired = Arc::default();
        let sink = Arc::clone(&fired);
        let make = move || {
            let sink = Arc::clone(&sink);
            Box::new(move |expiry: Expiry| sink.lock().unwrap().push(expiry))
                as Box<dyn FnOnce(Expiry) + Send>
        };
        (fired, make)
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_fires_at_deadline_and_not_before() {
        let mut scheduler = Scheduler::new(DismissDelay::new(3), Handle::current());
        let (fired, make) = recorder();
        let id = ToastId::new();

        scheduler.arm(id, make());

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(fired.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        let expiries = fired.lock().unwrap().clone();
        assert_eq!(expiries.len(), 1);
        assert_eq!(expiries[0].id, id);
        assert!(scheduler.settle(expiries[0]).is_ok());
        assert!(!scheduler.is_armed(id));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_countdown_never_fires() {
        let mut scheduler = Scheduler::new(DismissDelay::new(1), Handle::current());
        let (fired, make) = recorder();
        let id = ToastId::new();

        scheduler.arm(id, make());
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(fired.lock().unwrap().is_empty());
        assert_eq!(scheduler.armed_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn rearm_keeps_a_single_countdown() {
        let mut scheduler = Scheduler::new(DismissDelay::new(3), Handle::current());
        let (fired, make) = recorder();
        let id = ToastId::new();

        scheduler.arm(id, make());
        tokio::time::sleep(Duration::from_secs(2)).await;
        scheduler.arm(id, make());
        assert_eq!(scheduler.armed_count(), 1);

        // The first deadline (t=3s) must not fire.
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(fired.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(fired.lock().unwrap().len(), 1);
    }

    #[test]
    fn stale_expiry_is_a_cancellation_race() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .expect("runtime");
        let mut scheduler = Scheduler::new(DismissDelay::default(), runtime.handle().clone());
        let id = ToastId::new();

        scheduler.arm(id, |_| {});
        let stale = Expiry { id, generation: 0 };
        scheduler.arm(id, |_| {});

        assert_eq!(
            scheduler.settle(stale),
            Err(ToastError::CancellationRace(id))
        );
        assert!(scheduler.is_armed(id));

        let current = Expiry { id, generation: 1 };
        assert!(scheduler.settle(current).is_ok());
        assert_eq!(
            scheduler.settle(current),
            Err(ToastError::CancellationRace(id))
        );
    }

    #[test]
    fn delay_is_exposed() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .expect("runtime");
        let scheduler = Scheduler::new(DismissDelay::new(7), runtime.handle().clone());
        assert_eq!(scheduler.delay().value(), 7);
    }
}
