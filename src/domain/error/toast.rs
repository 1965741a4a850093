// SPDX-License-Identifier: MPL-2.0
//! Anomalies of the toast lifecycle.
//!
//! None of these are fatal. Callers of the public toast API never see them;
//! they exist so the queue and scheduler can report what happened and the
//! service can log it.

use crate::domain::toast::ToastId;
use std::fmt;

/// A lifecycle request that could not take effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastError {
    /// The id is no longer (or was never) in the queue.
    NotFound(ToastId),

    /// A countdown fired after it had been cancelled or superseded.
    CancellationRace(ToastId),
}

impl ToastError {
    /// Returns the toast the anomaly refers to.
    #[must_use]
    pub fn id(&self) -> ToastId {
        match self {
            ToastError::NotFound(id) | ToastError::CancellationRace(id) => *id,
        }
    }
}

impl fmt::Display for ToastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastError::NotFound(id) => write!(f, "toast {} not found", id),
            ToastError::CancellationRace(id) => {
                write!(f, "countdown for toast {} fired after cancellation", id)
            }
        }
    }
}

impl std::error::Error for ToastError {}
