// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` record, the `Category` presets and the
//! `ShowRequest` builder used to create toasts.

use super::gesture::GestureState;
use crate::domain::toast::ToastId;
use std::fmt;
use std::sync::Arc;

/// Named tints understood by the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    Green,
    Yellow,
    Red,
    Black,
    /// The surface's accent colour.
    #[default]
    Accent,
    /// Explicit sRGB colour.
    Rgb(u8, u8, u8),
}

/// Toast category, which determines the default icon, title and tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Success,
    Warning,
    Error,
    /// Caller supplies the whole content.
    Custom,
}

impl Category {
    /// Returns the default icon reference (a symbol name) for this category.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Success => "checkmark",
            Category::Warning => "exclamationmark.triangle",
            Category::Error => "xmark",
            Category::Custom => "",
        }
    }

    /// Returns the default title for this category.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Category::Success => "Success",
            Category::Warning => "Warning",
            Category::Error => "Error",
            Category::Custom => "",
        }
    }

    /// Returns the default tint for this category.
    #[must_use]
    pub fn tint(&self) -> Tint {
        match self {
            Category::Success => Tint::Green,
            Category::Warning => Tint::Yellow,
            Category::Error => Tint::Red,
            Category::Custom => Tint::Accent,
        }
    }
}

/// Callback run when a toast's action button is pressed.
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// Optional button rendered inside a toast.
#[derive(Clone)]
pub struct ActionButton {
    title: String,
    tint: Tint,
    action: Option<Action>,
}

impl ActionButton {
    /// Title shown when the caller does not provide one.
    pub const DEFAULT_TITLE: &'static str = "N/A";

    /// Creates a button with the default title and tint and no callback.
    ///
    /// Pressing it still removes the toast.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            tint: Tint::Green,
            action: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }

    /// Sets the callback invoked when the button is pressed.
    #[must_use]
    pub fn on_press<F>(mut self, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn tint(&self) -> Tint {
        self.tint
    }

    /// Returns the callback, if any.
    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }
}

impl Default for ActionButton {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ActionButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionButton")
            .field("title", &self.title)
            .field("tint", &self.tint)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// Rendering payload of a toast, fully resolved.
#[derive(Debug, Clone)]
pub struct Content {
    pub icon: String,
    pub title: String,
    pub tint: Tint,
    pub button: Option<ActionButton>,
}

impl Content {
    /// Returns whether the surface should offer a close button.
    ///
    /// Only custom toasts without an action button get one.
    #[must_use]
    pub fn shows_close_button(&self, category: Category) -> bool {
        category == Category::Custom && self.button.is_none()
    }
}

/// Request to show a toast.
///
/// Fields left unset fall back to the category presets.
#[derive(Debug, Clone, Default)]
pub struct ShowRequest {
    category: Category,
    icon: Option<String>,
    title: Option<String>,
    tint: Option<Tint>,
    button: Option<ActionButton>,
}

impl ShowRequest {
    /// Creates a request for the given category.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    /// Creates a success request.
    pub fn success() -> Self {
        Self::new(Category::Success)
    }

    /// Creates a warning request.
    pub fn warning() -> Self {
        Self::new(Category::Warning)
    }

    /// Creates an error request.
    pub fn error() -> Self {
        Self::new(Category::Error)
    }

    /// Creates a custom request.
    pub fn custom() -> Self {
        Self::new(Category::Custom)
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the title only when one is given.
    #[must_use]
    pub fn maybe_title(mut self, title: Option<String>) -> Self {
        self.title = title.or(self.title);
        self
    }

    #[must_use]
    pub fn tint(mut self, tint: Tint) -> Self {
        self.tint = Some(tint);
        self
    }

    #[must_use]
    pub fn button(mut self, button: ActionButton) -> Self {
        self.button = Some(button);
        self
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Resolves the request into a fresh toast record.
    pub(crate) fn into_toast(self) -> Toast {
        let category = self.category;
        let content = Content {
            icon: self.icon.unwrap_or_else(|| category.icon().to_string()),
            title: self.title.unwrap_or_else(|| category.title().to_string()),
            tint: self.tint.unwrap_or_else(|| category.tint()),
            button: self.button,
        };
        Toast::new(category, content)
    }
}

/// A toast in the queue.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    category: Category,
    content: Content,
    /// Live vertical offset from an in-progress drag (never positive).
    pub(crate) drag_offset: f32,
    /// Set once removal has started; the toast no longer reacts to input.
    pub(crate) is_being_removed: bool,
    pub(crate) gesture: GestureState,
}

impl Toast {
    /// Creates a toast with a fresh id.
    pub fn new(category: Category, content: Content) -> Self {
        Self {
            id: ToastId::new(),
            category,
            content,
            drag_offset: 0.0,
            is_being_removed: false,
            gesture: GestureState::Idle,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    #[must_use]
    pub fn is_being_removed(&self) -> bool {
        self.is_being_removed
    }

    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    #[must_use]
    pub fn shows_close_button(&self) -> bool {
        self.content.shows_close_button(self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn toast_ids_are_unique() {
        let t1 = ShowRequest::success().into_toast();
        let t2 = ShowRequest::success().into_toast();
        assert_ne!(t1.id(), t2.id());
    }

    #[test]
    fn category_presets_are_distinct() {
        let tints = [
            Category::Success.tint(),
            Category::Warning.tint(),
            Category::Error.tint(),
            Category::Custom.tint(),
        ];
        for (i, a) in tints.iter().enumerate() {
            for b in &tints[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(Category::Warning.icon(), "exclamationmark.triangle");
        assert_eq!(Category::Error.title(), "Error");
    }

    #[test]
    fn preset_categories_default_missing_fields() {
        let toast = ShowRequest::warning().into_toast();
        let content = toast.content();

        assert_eq!(content.icon, "exclamationmark.triangle");
        assert_eq!(content.title, "Warning");
        assert_eq!(content.tint, Tint::Yellow);
        assert!(content.button.is_none());
    }

    #[test]
    fn overrides_win_over_presets() {
        let toast = ShowRequest::success()
            .title("Saved")
            .tint(Tint::Black)
            .into_toast();

        assert_eq!(toast.content().title, "Saved");
        assert_eq!(toast.content().tint, Tint::Black);
        assert_eq!(toast.content().icon, "checkmark");
    }

    #[test]
    fn custom_without_fields_resolves_to_empty_content() {
        let toast = ShowRequest::custom().into_toast();

        assert_eq!(toast.content().icon, "");
        assert_eq!(toast.content().title, "");
        assert_eq!(toast.content().tint, Tint::Accent);
        assert!(toast.shows_close_button());
    }

    #[test]
    fn close_button_only_for_custom_without_action() {
        let with_button = ShowRequest::custom()
            .button(ActionButton::new())
            .into_toast();
        assert!(!with_button.shows_close_button());

        let preset = ShowRequest::error().into_toast();
        assert!(!preset.shows_close_button());
    }

    #[test]
    fn maybe_title_keeps_preset_when_none() {
        let toast = ShowRequest::error().maybe_title(None).into_toast();
        assert_eq!(toast.content().title, "Error");

        let toast = ShowRequest::error()
            .maybe_title(Some("Disk full".to_string()))
            .into_toast();
        assert_eq!(toast.content().title, "Disk full");
    }

    #[test]
    fn action_button_defaults_and_callback() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let button = ActionButton::new().on_press(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(button.title(), ActionButton::DEFAULT_TITLE);
        assert_eq!(button.tint(), Tint::Green);

        let action = button.action().expect("callback set");
        action();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(format!("{button:?}").contains("has_action: true"));
    }

    #[test]
    fn new_toast_starts_idle_and_interactive() {
        let toast = ShowRequest::success().into_toast();
        assert_eq!(toast.drag_offset(), 0.0);
        assert!(!toast.is_being_removed());
        assert_eq!(toast.gesture(), GestureState::Idle);
    }
}
