// SPDX-License-Identifier: MPL-2.0
//! Toast notification engine.
//!
//! This module provides the state and interaction logic behind a stack of
//! transient notifications: queuing, auto-dismiss timing, swipe dismissal
//! and the stacked/expanded layout policy. Rendering is left to a
//! presentation surface that subscribes to [`ToastEvent`]s and forwards
//! input back into the [`Toaster`].
//!
//! # Components
//!
//! - [`toast`] - `Toast` record, category presets and `ShowRequest` builder
//! - [`queue`] - Arrival-ordered collection of live toasts
//! - [`scheduler`] - Per-toast auto-dismiss countdowns
//! - [`gesture`] - Swipe-to-dismiss interpretation
//! - [`layout`] - Collapsed/expanded stack geometry
//! - [`toaster`] - `Toaster` service tying everything together
//!
//! # Usage
//!
//! ```no_run
//! use toast_stack::config::Config;
//! use toast_stack::notifications::{DragPhase, ShowRequest, Toaster};
//!
//! # async fn run() {
//! let toaster = Toaster::new(&Config::default(), tokio::runtime::Handle::current());
//! let mut events = toaster.subscribe();
//!
//! toaster.show(ShowRequest::success().title("Image saved"));
//!
//! // Surface side: re-render on every change
//! while let Some(_event) = events.recv().await {
//!     for view in toaster.snapshot() {
//!         let _ = (view.placement.offset_y, view.placement.scale);
//!     }
//! }
//! # }
//! ```
//!
//! # Behaviour
//!
//! - Toasts auto-dismiss after 3s while the stack is collapsed
//! - Tapping a stack of two or more toasts expands it; expiries are ignored
//!   while expanded and every countdown restarts on collapse
//! - An upward fling projected past 200 units removes the toast

pub mod events;
pub mod gesture;
pub mod layout;
pub mod queue;
pub mod scheduler;
pub mod toast;
mod toaster;

pub use events::{RemovalCause, ToastEvent};
pub use gesture::{DragPhase, Gesture, GestureOutcome, GestureState};
pub use layout::{Placement, Transition, ViewMode};
pub use scheduler::CountdownOutcome;
pub use toast::{ActionButton, Category, Content, ShowRequest, Tint, Toast};
pub use toaster::{ToastView, Toaster};
