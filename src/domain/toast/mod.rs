// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! Identity and tuning values for toasts, independent of how the queue
//! or any presentation layer uses them.

mod id;
pub mod newtypes;

pub use id::ToastId;
pub use newtypes::{DismissDelay, FlingThreshold, VelocityMultiplier};
