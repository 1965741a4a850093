// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Dismissal**: Auto-dismiss countdown bounds
//! - **Gesture**: Swipe-to-dismiss projection tuning
//! - **Layout**: Collapsed stack geometry

// ==========================================================================
// Dismissal Defaults
// ==========================================================================

/// Default auto-dismiss delay for a toast (in seconds).
pub const DEFAULT_DISMISS_DELAY_SECS: u32 = 3;

/// Minimum auto-dismiss delay (in seconds).
pub const MIN_DISMISS_DELAY_SECS: u32 = 1;

/// Maximum auto-dismiss delay (in seconds).
pub const MAX_DISMISS_DELAY_SECS: u32 = 30;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Upward projected distance a drag must reach to dismiss a toast.
pub const DEFAULT_FLING_THRESHOLD: f32 = 200.0;

/// Minimum fling threshold.
pub const MIN_FLING_THRESHOLD: f32 = 1.0;

/// Maximum fling threshold.
pub const MAX_FLING_THRESHOLD: f32 = 2000.0;

/// Factor applied to the release velocity when projecting a fling.
pub const DEFAULT_VELOCITY_MULTIPLIER: f32 = 2.0;

/// Minimum velocity multiplier (velocity ignored).
pub const MIN_VELOCITY_MULTIPLIER: f32 = 0.0;

/// Maximum velocity multiplier.
pub const MAX_VELOCITY_MULTIPLIER: f32 = 10.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Scale lost per level of depth in the collapsed stack.
pub const STACK_SCALE_STEP: f32 = 0.1;

/// Upward offset added per level of depth in the collapsed stack.
pub const STACK_OFFSET_STEP: f32 = 15.0;

/// Largest upward offset a collapsed toast can receive.
pub const STACK_MAX_OFFSET: f32 = 30.0;

/// Vertical spacing between toasts in the expanded list.
pub const EXPANDED_SPACING: f32 = 10.0;

/// Z-index of toasts that are still interactive.
pub const ACTIVE_Z_INDEX: i32 = 1000;

/// Z-index of toasts playing their exit transition.
pub const REMOVING_Z_INDEX: i32 = 0;

/// Scale a toast shrinks to when leaving the expanded list.
pub const EXPANDED_EXIT_SCALE: f32 = 0.8;
