// SPDX-License-Identifier: MPL-2.0
//! Swipe-to-dismiss interpretation.
//!
//! Turns a stream of drag phases for one toast into live offset updates and,
//! on release, either a dismissal or a snap back to the resting position.
//! Only upward movement counts; screen coordinates grow downwards, so
//! "upward" means negative `delta_y`.

use super::toast::Toast;
use crate::config::GestureConfig;
use crate::domain::toast::{FlingThreshold, VelocityMultiplier};

/// One phase of a drag, as forwarded by the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    /// Finger or pointer went down on the toast.
    Begin,
    /// Pointer moved; `delta_y` is the total translation since `Begin`.
    Change { delta_y: f32 },
    /// Pointer released with its final translation and vertical velocity.
    End { delta_y: f32, velocity_y: f32 },
}

/// Per-toast drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
    /// Released past the threshold; the toast is being dismissed.
    Removed,
    /// Released short of the threshold; the toast returned to rest.
    SnappedBack,
}

/// What the toast service must do after a phase was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// The toast does not accept input (already being removed).
    Ignored,
    /// Drag started; nothing to publish yet.
    Started,
    /// Live offset changed.
    Moved { offset: f32 },
    /// Release projected past the threshold: remove the toast.
    Dismiss,
    /// Release fell short: offset is back to zero.
    SnapBack,
}

/// Gesture tuning shared by every toast.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gesture {
    threshold: FlingThreshold,
    multiplier: VelocityMultiplier,
}

impl Gesture {
    #[must_use]
    pub fn new(threshold: FlingThreshold, multiplier: VelocityMultiplier) -> Self {
        Self {
            threshold,
            multiplier,
        }
    }

    /// Builds the tuning from the `[gesture]` config section.
    #[must_use]
    pub fn from_config(config: &GestureConfig) -> Self {
        Self::new(config.threshold(), config.multiplier())
    }

    /// Where the toast would come to rest if the release velocity carried it on.
    #[must_use]
    pub fn projection(&self, delta_y: f32, velocity_y: f32) -> f32 {
        delta_y + velocity_y * self.multiplier.value()
    }

    /// Returns whether a release with these values dismisses the toast.
    #[must_use]
    pub fn is_fling(&self, delta_y: f32, velocity_y: f32) -> bool {
        -self.projection(delta_y, velocity_y) >= self.threshold.value()
    }

    /// Applies one drag phase to a toast.
    ///
    /// Updates the toast's gesture state and drag offset in place. A
    /// `Change` without a preceding `Begin` starts the drag implicitly.
    pub fn apply(&self, toast: &mut Toast, phase: DragPhase) -> GestureOutcome {
        if toast.is_being_removed || toast.gesture == GestureState::Removed {
            return GestureOutcome::Ignored;
        }

        match phase {
            DragPhase::Begin => {
                toast.gesture = GestureState::Dragging;
                GestureOutcome::Started
            }
            DragPhase::Change { delta_y } => {
                // Downward movement is pinned at the resting position
                let offset = delta_y.min(0.0);
                toast.gesture = GestureState::Dragging;
                toast.drag_offset = offset;
                GestureOutcome::Moved { offset }
            }
            DragPhase::End {
                delta_y,
                velocity_y,
            } => {
                if self.is_fling(delta_y, velocity_y) {
                    toast.gesture = GestureState::Removed;
                    GestureOutcome::Dismiss
                } else {
                    toast.gesture = GestureState::SnappedBack;
                    toast.drag_offset = 0.0;
                    GestureOutcome::SnapBack
                }
            }
        }
    }
}
