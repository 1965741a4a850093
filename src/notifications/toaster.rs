// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Toaster` owns the queue, the view mode and the countdowns behind a
//! single lock. Every entry point (show, drag, taps, countdown expiry) runs as
//! one critical section, so subscribers and snapshots never observe a
//! half-applied change.

use super::events::{RemovalCause, ToastEvent};
use super::gesture::{DragPhase, Gesture, GestureOutcome};
use super::layout::{exit_transition, placement, Placement, ViewMode};
use super::queue::Queue;
use super::scheduler::{CountdownOutcome, Expiry, Scheduler};
use super::toast::{ShowRequest, Toast};
use crate::config::Config;
use crate::domain::toast::ToastId;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// A toast together with where the surface should draw it.
#[derive(Debug, Clone)]
pub struct ToastView {
    pub toast: Toast,
    /// 0 for the newest toast.
    pub depth: usize,
    pub placement: Placement,
}

#[derive(Debug)]
struct State {
    queue: Queue,
    mode: ViewMode,
    scheduler: Scheduler,
    gesture: Gesture,
    subscribers: Vec<mpsc::UnboundedSender<ToastEvent>>,
}

impl State {
    fn publish(&mut self, event: ToastEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn set_mode(&mut self, mode: ViewMode) {
        if self.mode != mode {
            self.mode = mode;
            self.publish(ToastEvent::ViewModeChanged { mode });
        }
    }

    /// Removes a toast, cancelling its countdown. Unknown ids are ignored.
    fn remove(&mut self, id: ToastId, cause: RemovalCause) -> Option<Toast> {
        let toast = match self.queue.remove(id) {
            Ok(toast) => toast,
            Err(err) => {
                tracing::debug!(error = %err, ?cause, "ignoring removal");
                return None;
            }
        };

        if self.scheduler.cancel(id) {
            self.publish(ToastEvent::CountdownEnded {
                id,
                outcome: CountdownOutcome::Cancelled,
            });
        }

        tracing::debug!(toast = %id, ?cause, remaining = self.queue.len(), "toast removed");
        let transition = exit_transition(self.mode);
        self.publish(ToastEvent::Removed {
            toast: toast.clone(),
            cause,
            transition,
        });

        if self.queue.is_empty() {
            self.set_mode(ViewMode::Collapsed);
        }
        Some(toast)
    }
}

/// Entry point of the toast engine.
///
/// Cheap to clone; all clones share the same queue.
#[derive(Debug, Clone)]
pub struct Toaster {
    shared: Arc<Mutex<State>>,
}

impl Toaster {
    /// Creates a toaster whose countdowns run on `runtime`.
    #[must_use]
    pub fn new(config: &Config, runtime: Handle) -> Self {
        let state = State {
            queue: Queue::new(),
            mode: ViewMode::Collapsed,
            scheduler: Scheduler::new(config.dismissal.delay(), runtime),
            gesture: Gesture::from_config(&config.gesture),
            subscribers: Vec::new(),
        };
        Self {
            shared: Arc::new(Mutex::new(state)),
        }
    }

    /// Subscribes to change notifications.
    ///
    /// Events are delivered in the order the changes were applied.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<ToastEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.lock().subscribers.push(tx);
        rx
    }

    /// Shows a toast and starts its auto-dismiss countdown.
    pub fn show(&self, request: ShowRequest) {
        let toast = request.into_toast();
        let id = toast.id();
        let category = toast.category();

        let mut state = self.lock();
        state.queue.add(toast);
        tracing::debug!(toast = %id, ?category, queued = state.queue.len(), "toast shown");
        state.publish(ToastEvent::Added { id });
        self.arm(&mut state, id);
    }

    /// Shows a success toast, with the preset title unless `message` is given.
    pub fn success(&self, message: Option<String>) {
        self.show(ShowRequest::success().maybe_title(message));
    }

    /// Shows a warning toast, with the preset title unless `message` is given.
    pub fn warning(&self, message: Option<String>) {
        self.show(ShowRequest::warning().maybe_title(message));
    }

    /// Shows an error toast, with the preset title unless `message` is given.
    pub fn error(&self, message: Option<String>) {
        self.show(ShowRequest::error().maybe_title(message));
    }

    /// Removes a toast. Unknown ids are a no-op.
    pub fn dismiss(&self, id: ToastId) {
        self.lock().remove(id, RemovalCause::Dismissed);
    }

    /// Presses the action button of a toast.
    ///
    /// The toast is removed first; its callback then runs on the calling
    /// thread with the lock released, so it may show further toasts.
    pub fn press_action(&self, id: ToastId) {
        let action = {
            let mut state = self.lock();
            let has_button = state
                .queue
                .get(id)
                .is_some_and(|t| t.content().button.is_some());
            if !has_button {
                tracing::debug!(toast = %id, "no action button to press");
                return;
            }
            state
                .remove(id, RemovalCause::ActionPressed)
                .and_then(|t| t.content().button.as_ref().and_then(|b| b.action().cloned()))
        };

        if let Some(action) = action {
            action();
        }
    }

    /// Feeds one drag phase for a toast.
    pub fn drag(&self, id: ToastId, phase: DragPhase) {
        let mut state = self.lock();
        let gesture = state.gesture;
        let outcome = match state.queue.get_mut(id) {
            Some(toast) => gesture.apply(toast, phase),
            None => {
                tracing::debug!(toast = %id, ?phase, "drag on unknown toast ignored");
                return;
            }
        };

        match outcome {
            GestureOutcome::Ignored | GestureOutcome::Started => {}
            GestureOutcome::Moved { offset } => {
                tracing::trace!(toast = %id, offset, "drag moved");
                state.publish(ToastEvent::DragMoved { id, offset });
            }
            GestureOutcome::SnapBack => {
                state.publish(ToastEvent::SnappedBack { id });
            }
            GestureOutcome::Dismiss => {
                state.remove(id, RemovalCause::Swiped);
            }
        }
    }

    /// Handles a tap on the stack: toggles expansion when more than one toast is shown.
    pub fn tap_stack(&self) {
        let mut state = self.lock();
        if state.queue.len() <= 1 {
            return;
        }
        let mode = state.mode.toggled();
        state.set_mode(mode);
        if mode == ViewMode::Collapsed {
            self.rearm_all(&mut state);
        }
    }

    /// Handles a tap outside the stack: collapses it if expanded.
    pub fn tap_background(&self) {
        let mut state = self.lock();
        if state.mode.is_expanded() {
            state.set_mode(ViewMode::Collapsed);
            self.rearm_all(&mut state);
        }
    }

    /// Returns a consistent copy of the queue with layout, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ToastView> {
        let state = self.lock();
        let len = state.queue.len();
        state
            .queue
            .iter()
            .enumerate()
            .map(|(pos, toast)| {
                let depth = len - 1 - pos;
                ToastView {
                    placement: placement(depth, state.mode, toast.is_being_removed()),
                    depth,
                    toast: toast.clone(),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.lock().mode
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().queue.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.lock().queue.contains(id)
    }

    /// Returns whether `id` has an outstanding auto-dismiss countdown.
    #[must_use]
    pub fn is_countdown_armed(&self, id: ToastId) -> bool {
        self.lock().scheduler.is_armed(id)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // No invariant spans a panic point, so a poisoned state is still usable.
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn arm(&self, state: &mut State, id: ToastId) {
        let weak = Arc::downgrade(&self.shared);
        state
            .scheduler
            .arm(id, move |expiry| Self::on_expiry(&weak, expiry));
    }

    /// Restarts a full countdown for every live toast.
    fn rearm_all(&self, state: &mut State) {
        for id in state.queue.ids() {
            self.arm(state, id);
        }
    }

    fn on_expiry(shared: &Weak<Mutex<State>>, expiry: Expiry) {
        let Some(shared) = shared.upgrade() else {
            return;
        };
        let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
        let id = expiry.id;

        if let Err(err) = state.scheduler.settle(expiry) {
            tracing::debug!(error = %err, "stale countdown ignored");
            return;
        }

        if state.mode.is_expanded() {
            tracing::debug!(toast = %id, "countdown expired while expanded");
            state.publish(ToastEvent::CountdownEnded {
                id,
                outcome: CountdownOutcome::Suppressed,
            });
            return;
        }

        tracing::debug!(toast = %id, "countdown expired");
        state.publish(ToastEvent::CountdownEnded {
            id,
            outcome: CountdownOutcome::Expired,
        });
        state.remove(id, RemovalCause::Expired);
    }
}
