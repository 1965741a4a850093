// SPDX-License-Identifier: MPL-2.0
//! Change notifications published to the presentation surface.

use super::layout::{Transition, ViewMode};
use super::scheduler::CountdownOutcome;
use super::toast::Toast;
use crate::domain::toast::ToastId;

/// Why a toast left the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalCause {
    /// Auto-dismiss countdown ran out while collapsed.
    Expired,
    /// Flung away by a drag gesture.
    Swiped,
    /// Closed explicitly (close button or programmatic call).
    Dismissed,
    /// Its action button was pressed.
    ActionPressed,
}

/// Something the surface may need to re-render for.
#[derive(Debug, Clone)]
pub enum ToastEvent {
    /// A toast was appended to the queue.
    Added { id: ToastId },
    /// A toast left the queue; `toast` is its final state, flagged as being removed.
    Removed {
        toast: Toast,
        cause: RemovalCause,
        transition: Transition,
    },
    /// Live drag offset changed.
    DragMoved { id: ToastId, offset: f32 },
    /// A drag was released short of the threshold; animate the offset back to zero.
    SnappedBack { id: ToastId },
    /// The stack switched between collapsed and expanded.
    ViewModeChanged { mode: ViewMode },
    /// A countdown ended without being restarted.
    CountdownEnded {
        id: ToastId,
        outcome: CountdownOutcome,
    },
}

impl ToastEvent {
    /// Returns the toast the event is about, if it concerns a single toast.
    #[must_use]
    pub fn toast_id(&self) -> Option<ToastId> {
        match self {
            ToastEvent::Added { id }
            | ToastEvent::DragMoved { id, .. }
            | ToastEvent::SnappedBack { id }
            | ToastEvent::CountdownEnded { id, .. } => Some(*id),
            ToastEvent::Removed { toast, .. } => Some(toast.id()),
            ToastEvent::ViewModeChanged { .. } => None,
        }
    }
}
