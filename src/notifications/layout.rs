// SPDX-License-Identifier: MPL-2.0
//! Stack layout policy.
//!
//! Maps a toast's depth in the queue (0 = newest) and the current view mode
//! to the geometry the presentation surface should animate towards. The
//! surface owns interpolation; this module only defines the endpoints.

use crate::config::{
    ACTIVE_Z_INDEX, EXPANDED_EXIT_SCALE, REMOVING_Z_INDEX, STACK_MAX_OFFSET, STACK_OFFSET_STEP,
    STACK_SCALE_STEP,
};

pub use crate::config::EXPANDED_SPACING;

/// How the toast stack is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Fanned, depth-scaled stack with only the newest toast fully visible.
    #[default]
    Collapsed,
    /// Vertical list with every toast fully visible.
    Expanded,
}

impl ViewMode {
    #[must_use]
    pub fn is_expanded(self) -> bool {
        self == ViewMode::Expanded
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Collapsed => ViewMode::Expanded,
            ViewMode::Expanded => ViewMode::Collapsed,
        }
    }
}

/// Target geometry for one toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Vertical offset; negative values move the toast up.
    pub offset_y: f32,
    /// Scale anchored at the toast's bottom edge.
    pub scale: f32,
    /// Removing toasts render beneath active ones.
    pub z_index: i32,
}

/// Entry or exit animation hint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Slide from/to the bottom edge while fading.
    SlideFade,
    /// Shrink to `scale` while fading.
    ScaleFade { scale: f32 },
}

/// Computes the placement of a toast `depth` positions away from the newest one.
#[must_use]
pub fn placement(depth: usize, mode: ViewMode, is_being_removed: bool) -> Placement {
    let z_index = if is_being_removed {
        REMOVING_Z_INDEX
    } else {
        ACTIVE_Z_INDEX
    };

    match mode {
        ViewMode::Expanded => Placement {
            offset_y: 0.0,
            scale: 1.0,
            z_index,
        },
        ViewMode::Collapsed => {
            #[allow(clippy::cast_precision_loss)] // depth is a small queue index
            let depth = depth as f32;
            Placement {
                offset_y: -(depth * STACK_OFFSET_STEP).min(STACK_MAX_OFFSET),
                scale: 1.0 - (depth * STACK_SCALE_STEP).min(1.0),
                z_index,
            }
        }
    }
}

/// Animation used when a toast enters the stack.
#[must_use]
pub fn entry_transition() -> Transition {
    Transition::SlideFade
}

/// Animation used when a toast leaves the stack in the given mode.
#[must_use]
pub fn exit_transition(mode: ViewMode) -> Transition {
    match mode {
        ViewMode::Expanded => Transition::ScaleFade {
            scale: EXPANDED_EXIT_SCALE,
        },
        ViewMode::Collapsed => Transition::SlideFade,
    }
}
