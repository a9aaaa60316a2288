//! Toast domain models.

use serde::{Deserialize, Serialize};

/// A notification waiting in, or shown from, the shared toast list.
///
/// `title` is the identity of the toast: destroy events are matched by it,
/// so two live toasts must not share a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastRecord {
    pub title: String,
    pub body: String,
    /// Glyph name, e.g. `info-circle`
    pub icon: String,
    /// Severity style name, e.g. `primary`, `warning`, `danger`
    pub style: String,
}

impl ToastRecord {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        icon: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon: icon.into(),
            style: style.into(),
        }
    }
}

/// Lifecycle state of a rendered toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastState {
    /// Enqueued, not rendered yet
    Created,
    /// Visible until dismissed
    Showing,
    /// Hidden and reported as destroyed
    Dismissed,
}

/// Options passed to the visual effect when a toast is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectOptions {
    pub autohide: bool,
}

impl EffectOptions {
    /// Toasts stay on screen until the user or the host dismisses them.
    pub fn persistent() -> Self {
        Self { autohide: false }
    }
}
