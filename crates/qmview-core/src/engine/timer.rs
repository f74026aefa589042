//! A cancellable, single-shot settling timer.
//!
//! [`SettlingTimer`] holds at most one pending completion. Arming it while a completion
//! is still pending discards the old one: its payload is dropped without ever being
//! published, and only the most recent arm can reach the [`TimerState::Fired`] state.
//!
//! Each arm gets a fresh generation number. The spawned sleeper publishes through a
//! compare-and-set on the shared watch state, so a sleeper whose generation is no
//! longer the pending one cannot publish even if it wakes up before it is aborted.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tokio::time::Instant;
use tracing::{debug, trace};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("Settling timer must be armed from within a Tokio runtime")]
    NoRuntime,
}

/// Observable state of a [`SettlingTimer`].
#[derive(Debug, Clone, PartialEq)]
pub enum TimerState<T> {
    /// Never armed, or the pending completion was cancelled.
    Idle,
    /// Armed; the window of `generation` has not closed yet.
    Pending { generation: u64 },
    /// The window of `generation` closed and its payload is final.
    Fired { generation: u64, payload: T },
}

impl<T> TimerState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, TimerState::Pending { .. })
    }

    pub fn is_fired(&self) -> bool {
        matches!(self, TimerState::Fired { .. })
    }

    pub fn generation(&self) -> Option<u64> {
        match self {
            TimerState::Idle => None,
            TimerState::Pending { generation } | TimerState::Fired { generation, .. } => {
                Some(*generation)
            }
        }
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            TimerState::Fired { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

pub struct SettlingTimer<T> {
    state: Arc<watch::Sender<TimerState<T>>>,
    generation: u64,
    sleeper: Option<AbortHandle>,
}

impl<T> SettlingTimer<T>
where
    T: Send + Sync + 'static,
{
    pub fn new() -> Self {
        let (state, _) = watch::channel(TimerState::Idle);
        Self {
            state: Arc::new(state),
            generation: 0,
            sleeper: None,
        }
    }

    /// Arms the timer: once `window` has elapsed from this call, `payload` is published
    /// as fired.
    ///
    /// Any completion still pending is cancelled first. Returns the generation of the
    /// new window.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NoRuntime`] when called outside a Tokio runtime; the timer
    /// is left untouched in that case.
    pub fn arm(&mut self, window: Duration, payload: T) -> Result<u64, TimerError> {
        let handle = Handle::try_current().map_err(|_| TimerError::NoRuntime)?;

        let deadline = Instant::now() + window;
        self.abort_sleeper();
        self.generation += 1;
        let generation = self.generation;
        self.state.send_replace(TimerState::Pending { generation });

        let state = Arc::clone(&self.state);
        let task = handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let published = state.send_if_modified(move |current| match current {
                TimerState::Pending { generation: pending } if *pending == generation => {
                    *current = TimerState::Fired {
                        generation,
                        payload,
                    };
                    true
                }
                _ => false,
            });
            trace!(generation, published, "Settling window closed.");
        });
        self.sleeper = Some(task.abort_handle());

        debug!(
            generation,
            window_ms = window.as_millis() as u64,
            "Settling timer armed."
        );
        Ok(generation)
    }

    /// Cancels the pending completion, if any. A fired state is left in place.
    pub fn cancel(&mut self) {
        self.abort_sleeper();
        let cancelled = self.state.send_if_modified(|current| match current {
            TimerState::Pending { .. } => {
                *current = TimerState::Idle;
                true
            }
            _ => false,
        });
        if cancelled {
            debug!(generation = self.generation, "Settling timer cancelled.");
        }
    }

    /// Generation of the most recent arm (0 if never armed).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().is_pending()
    }

    pub fn subscribe(&self) -> watch::Receiver<TimerState<T>> {
        self.state.subscribe()
    }

    fn abort_sleeper(&mut self) {
        if let Some(sleeper) = self.sleeper.take() {
            sleeper.abort();
        }
    }
}

impl<T> SettlingTimer<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn state(&self) -> TimerState<T> {
        self.state.borrow().clone()
    }

    pub fn fired(&self) -> Option<T> {
        self.state.borrow().payload().cloned()
    }
}

impl<T> Default for SettlingTimer<T>
where
    T: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SettlingTimer<T> {
    fn drop(&mut self) {
        if let Some(sleeper) = self.sleeper.take() {
            sleeper.abort();
        }
    }
}
