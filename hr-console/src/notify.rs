//! Toast notifications
//!
//! A transient notification that fades in, holds, fades out, and then
//! runs a completion callback (typically a navigation). All phases run
//! through the [`Timer`] port; cancelling the returned handle before
//! the hold elapses stops the remaining phases.

use crate::timer::{Timer, TimerHandle};
use crate::view::ToastView;
use std::sync::Arc;
use std::time::Duration;

/// Default hold duration.
pub const DEFAULT_TOAST_MS: u64 = 1500;
/// Fade-in/fade-out transition time.
pub const TOAST_FADE_MS: u64 = 200;

/// Toast configuration: message and hold duration.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: Duration::from_millis(DEFAULT_TOAST_MS),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Show a toast, then run `on_done` once the fade-out has finished.
///
/// The returned handle cancels the hide and everything after it; a view
/// whose element is already gone no-ops the show/hide calls itself.
pub fn show_toast<V, T, F>(view: Arc<V>, timer: &T, toast: Toast, on_done: F) -> TimerHandle
where
    V: ToastView + 'static,
    T: Timer + Clone + 'static,
    F: FnOnce() + Send + 'static,
{
    let fade = Duration::from_millis(TOAST_FADE_MS);
    view.toast_show(&toast.message);

    let chained = timer.clone();
    timer.schedule(
        fade + toast.duration,
        Box::new(move || {
            view.toast_hide();
            chained.schedule(fade, Box::new(on_done));
        }),
    )
}
