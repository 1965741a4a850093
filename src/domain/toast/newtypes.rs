// SPDX-License-Identifier: MPL-2.0
//! Toast tuning newtypes.
//!
//! This module provides type-safe wrappers for toast tuning values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_DISMISS_DELAY_SECS, DEFAULT_FLING_THRESHOLD, DEFAULT_VELOCITY_MULTIPLIER,
    MAX_DISMISS_DELAY_SECS, MAX_FLING_THRESHOLD, MAX_VELOCITY_MULTIPLIER, MIN_DISMISS_DELAY_SECS,
    MIN_FLING_THRESHOLD, MIN_VELOCITY_MULTIPLIER,
};
use std::time::Duration;

// =============================================================================
// DismissDelay
// =============================================================================

/// Auto-dismiss delay in seconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–30 seconds).
///
/// # Example
///
/// ```
/// use toast_stack::domain::toast::DismissDelay;
///
/// let delay = DismissDelay::new(5);
/// assert_eq!(delay.value(), 5);
///
/// // Values outside range are clamped
/// let too_high = DismissDelay::new(100);
/// assert_eq!(too_high.value(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissDelay(u32);

impl DismissDelay {
    /// Creates a new dismiss delay, clamping to valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(MIN_DISMISS_DELAY_SECS, MAX_DISMISS_DELAY_SECS))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for DismissDelay {
    fn default() -> Self {
        Self(DEFAULT_DISMISS_DELAY_SECS)
    }
}

// =============================================================================
// FlingThreshold
// =============================================================================

/// Upward projected distance that turns a drag into a dismissal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingThreshold(f32);

impl FlingThreshold {
    /// Creates a new threshold, clamping to valid range. NaN falls back to the default.
    #[must_use]
    pub fn new(distance: f32) -> Self {
        if distance.is_nan() {
            return Self::default();
        }
        Self(distance.clamp(MIN_FLING_THRESHOLD, MAX_FLING_THRESHOLD))
    }

    /// Returns the raw distance.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FlingThreshold {
    fn default() -> Self {
        Self(DEFAULT_FLING_THRESHOLD)
    }
}

// =============================================================================
// VelocityMultiplier
// =============================================================================

/// Factor converting release velocity into extra projected distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityMultiplier(f32);

impl VelocityMultiplier {
    /// Creates a new multiplier, clamping to valid range. NaN falls back to the default.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self::default();
        }
        Self(factor.clamp(MIN_VELOCITY_MULTIPLIER, MAX_VELOCITY_MULTIPLIER))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for VelocityMultiplier {
    fn default() -> Self {
        Self(DEFAULT_VELOCITY_MULTIPLIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_delay_clamps_to_valid_range() {
        assert_eq!(DismissDelay::new(0).value(), MIN_DISMISS_DELAY_SECS);
        assert_eq!(DismissDelay::new(100).value(), MAX_DISMISS_DELAY_SECS);
        assert_eq!(DismissDelay::new(12).value(), 12);
    }

    #[test]
    fn dismiss_delay_default_is_three_seconds() {
        assert_eq!(DismissDelay::default().as_duration(), Duration::from_secs(3));
    }

    #[test]
    fn fling_threshold_clamps_and_rejects_nan() {
        assert_eq!(FlingThreshold::new(0.0).value(), MIN_FLING_THRESHOLD);
        assert_eq!(FlingThreshold::new(1e6).value(), MAX_FLING_THRESHOLD);
        assert_eq!(FlingThreshold::new(f32::NAN), FlingThreshold::default());
        assert_eq!(FlingThreshold::default().value(), 200.0);
    }

    #[test]
    fn velocity_multiplier_clamps_and_rejects_nan() {
        assert_eq!(VelocityMultiplier::new(-1.0).value(), MIN_VELOCITY_MULTIPLIER);
        assert_eq!(VelocityMultiplier::new(99.0).value(), MAX_VELOCITY_MULTIPLIER);
        assert_eq!(
            VelocityMultiplier::new(f32::NAN),
            VelocityMultiplier::default()
        );
        assert_eq!(VelocityMultiplier::default().value(), 2.0);
    }
}
