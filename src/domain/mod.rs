// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with no runtime dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability.
//!
//! # Modules
//!
//! - [`error`]: Lifecycle anomalies ([`ToastError`](error::ToastError))
//! - [`toast`]: Toast identity and tuning ([`ToastId`](toast::ToastId),
//!   [`DismissDelay`](toast::DismissDelay), [`FlingThreshold`](toast::FlingThreshold),
//!   [`VelocityMultiplier`](toast::VelocityMultiplier))

pub mod error;
pub mod toast;
