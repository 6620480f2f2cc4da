//! View ports
//!
//! Controllers render through these traits instead of touching any
//! global UI state. A real frontend binds them to its widgets; tests
//! bind them to recording fakes. Every method takes `&self` so views
//! can be shared with deferred callbacks.

use crate::progress::Progress;

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// One clickable row of the employee directory list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// One label/value row of the employee detail table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// View port for the profile page.
pub trait ProfileView: Send + Sync {
    /// Show or hide the profile trigger button.
    fn show_trigger(&self, visible: bool);
    /// Show or hide the save action.
    fn show_save(&self, visible: bool);
    /// Set or clear the fixed advisory shown to read-only viewers.
    fn set_notice(&self, notice: Option<&str>);
    /// Render the completion percentage.
    fn render_progress(&self, progress: Progress);
    /// Show the save result message.
    fn show_message(&self, notice: Notice);
    /// Close the profile modal.
    fn close_modal(&self);
}

/// View port for the admin employee directory.
pub trait DirectoryView: Send + Sync {
    /// Replace the list container with one row per employee.
    fn render_employees(&self, rows: &[ListRow]);
    /// Replace the list container with a single placeholder row.
    fn render_empty(&self, text: &str);
    /// Replace the list container with an error state.
    fn render_list_error(&self, message: &str);
    /// Replace the detail container with the fixed-schema table.
    fn render_detail(&self, rows: &[DetailRow]);
    /// Replace the detail container with an error state.
    fn render_detail_error(&self, message: &str);
}

/// View port for the login/signup pages.
///
/// `inline_notice` returns `false` when no inline message element is
/// available; the controller then falls back to `alert`, so a failure
/// is never silent.
pub trait AuthView: Send + Sync {
    fn inline_notice(&self, notice: &Notice) -> bool;
    fn alert(&self, message: &str);
    fn navigate(&self, target: &str);
}

/// View port for the transient toast notification.
///
/// Implementations whose underlying element has already been removed
/// must treat both calls as no-ops.
pub trait ToastView: Send + Sync {
    /// Start the fade-in with the given message.
    fn toast_show(&self, message: &str);
    /// Start the fade-out.
    fn toast_hide(&self);
}
