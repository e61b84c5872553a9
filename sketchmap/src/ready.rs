//! One-shot readiness signal of a viewport.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::error::SceneError;

/// State of a [`ReadySignal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    /// The engine has not finished initialization yet.
    Pending,
    /// The engine reported that the viewport is ready.
    Ready,
    /// Nobody should wait for readiness anymore.
    Cancelled,
}

/// Single-fire signal that the mapping engine finished initializing a viewport.
///
/// The signal leaves the `Pending` state exactly once, either to `Ready` or to `Cancelled`.
/// Clones share the same state.
#[derive(Debug, Clone)]
pub struct ReadySignal {
    state: Arc<watch::Sender<ReadyState>>,
}

impl Default for ReadySignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadySignal {
    /// Creates a pending signal.
    pub fn new() -> Self {
        let (state, _) = watch::channel(ReadyState::Pending);
        Self {
            state: Arc::new(state),
        }
    }

    /// Current state.
    pub fn state(&self) -> ReadyState {
        *self.state.borrow()
    }

    /// Returns true if the signal has fired.
    pub fn is_ready(&self) -> bool {
        self.state() == ReadyState::Ready
    }

    /// Fires the signal. Returns false if it was already settled.
    pub fn mark_ready(&self) -> bool {
        self.settle(ReadyState::Ready)
    }

    /// Cancels all waiting. Returns false if the signal was already settled.
    pub fn cancel(&self) -> bool {
        self.settle(ReadyState::Cancelled)
    }

    fn settle(&self, target: ReadyState) -> bool {
        self.state.send_if_modified(|state| {
            if *state == ReadyState::Pending {
                *state = target;
                true
            } else {
                false
            }
        })
    }

    /// Waits until the signal settles.
    ///
    /// Returns `Ok` when ready, [`SceneError::ReadyCancelled`] when cancelled and
    /// [`SceneError::ReadyTimeout`] if `timeout` elapses first.
    pub async fn wait(&self, timeout: Option<Duration>) -> Result<(), SceneError> {
        let mut receiver = self.state.subscribe();
        let settled = match timeout {
            Some(timeout) => tokio::time::timeout(timeout, settled(&mut receiver))
                .await
                .map_err(|_| SceneError::ReadyTimeout(timeout))?,
            None => settled(&mut receiver).await,
        };

        match settled {
            ReadyState::Ready => Ok(()),
            ReadyState::Pending | ReadyState::Cancelled => Err(SceneError::ReadyCancelled),
        }
    }
}

async fn settled(receiver: &mut watch::Receiver<ReadyState>) -> ReadyState {
    // The sender lives as long as any `ReadySignal` clone, and the caller holds one.
    receiver
        .wait_for(|state| *state != ReadyState::Pending)
        .await
        .map(|state| *state)
        .unwrap_or(ReadyState::Cancelled)
}
