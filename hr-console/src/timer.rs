//! Cancellable timer port
//!
//! Timed UI effects (toast fades, delayed modal close) are scheduled
//! through this port. [`TokioTimer`] drives them on the runtime;
//! [`ManualTimer`] lets tests fast-forward virtual time instead of
//! sleeping. A cancelled handle guarantees the callback never runs.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

type Callback = Box<dyn FnOnce() + Send>;

/// Schedules a one-shot callback after a delay.
pub trait Timer: Send + Sync {
    fn schedule(&self, delay: Duration, callback: Callback) -> TimerHandle;
}

/// Handle to a scheduled callback. Dropping the handle does not cancel
/// it; only an explicit `cancel` does.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    token: CancellationToken,
}

impl TimerHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Real-time timer backed by the tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    fn schedule(&self, delay: Duration, callback: Callback) -> TimerHandle {
        let token = CancellationToken::new();
        let fired = token.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = fired.cancelled() => {}
                _ = tokio::time::sleep(delay) => callback(),
            }
        });
        TimerHandle { token }
    }
}

struct Entry {
    due: Duration,
    token: CancellationToken,
    callback: Option<Callback>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    pending: Vec<Entry>,
}

/// Virtual-time timer for tests.
///
/// Nothing fires until [`advance`](ManualTimer::advance) moves the
/// clock; callbacks scheduled by other callbacks fire in the same
/// advance when already due.
#[derive(Clone, Default)]
pub struct ManualTimer {
    state: Arc<Mutex<ManualState>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward, firing due, uncancelled callbacks in
    /// due-time order.
    pub fn advance(&self, delta: Duration) {
        let target = {
            let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.now + delta
        };
        loop {
            // take one due entry at a time; its callback may schedule more
            let next = {
                let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
                let due_index = state
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due <= target)
                    .min_by_key(|(_, e)| e.due)
                    .map(|(i, _)| i);
                match due_index {
                    Some(i) => {
                        let mut entry = state.pending.remove(i);
                        state.now = entry.due;
                        entry.callback.take().map(|cb| (entry.token, cb))
                    }
                    None => {
                        state.now = target;
                        break;
                    }
                }
            };
            if let Some((token, callback)) = next
                && !token.is_cancelled()
            {
                callback();
            }
        }
    }

    /// Number of callbacks still waiting to fire.
    pub fn pending(&self) -> usize {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state
            .pending
            .iter()
            .filter(|e| !e.token.is_cancelled())
            .count()
    }
}

impl Timer for ManualTimer {
    fn schedule(&self, delay: Duration, callback: Callback) -> TimerHandle {
        let token = CancellationToken::new();
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let due = state.now + delay;
        state.pending.push(Entry {
            due,
            token: token.clone(),
            callback: Some(callback),
        });
        TimerHandle { token }
    }
}
