// SPDX-License-Identifier: MPL-2.0
//! `toast_stack` is the state engine behind a stack of toast notifications.
//!
//! It queues short-lived status messages, dismisses them after a delay or a
//! swipe, and computes the stacked/expanded geometry, leaving rendering to
//! whatever UI toolkit hosts it.

#![doc(html_root_url = "https://docs.rs/toast_stack/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod notifications;
