use crate::core::Result;
use log::debug;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

struct DebounceState {
    delivered_first: bool,
    pending: Option<JoinHandle<()>>,
}

/// Delivers pushed values to a sink with "immediate first, debounced
/// thereafter" semantics.
///
/// The first value ever pushed is delivered synchronously, with no delay,
/// so the initial render is never held back. Every later value is delivered
/// only once the input has been quiet for the full quiescence window; a
/// newer push cancels the pending delivery, so superseded values are never
/// delivered.
///
/// No internal lock is held while the sink runs, so the sink (or anything
/// it calls) may push again reentrantly. Delayed deliveries run on a
/// spawned tokio task, so pushes after the first must happen inside a tokio
/// runtime. [`DebounceAfterFirst::cancel`] releases any pending timer;
/// dropping the debouncer does the same.
pub struct DebounceAfterFirst<T> {
    window: Duration,
    sink: Arc<dyn Fn(T) + Send + Sync>,
    state: Mutex<DebounceState>,
}

impl<T: Send + 'static> DebounceAfterFirst<T> {
    pub fn new<F>(window: Duration, sink: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            window,
            sink: Arc::new(sink),
            state: Mutex::new(DebounceState {
                delivered_first: false,
                pending: None,
            }),
        }
    }

    /// Accepts a new value, superseding any value still waiting out its
    /// quiescence window.
    pub fn push(&self, value: T) -> Result<()> {
        let mut state = self.state.lock()?;
        if let Some(pending) = state.pending.take() {
            pending.abort();
            debug!("superseded pending debounced value");
        }

        if !state.delivered_first {
            state.delivered_first = true;
            drop(state);
            (self.sink)(value);
            return Ok(());
        }

        let sink = Arc::clone(&self.sink);
        let window = self.window;
        state.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            sink(value);
        }));
        Ok(())
    }

    /// Whether a value is still waiting out its quiescence window.
    pub fn is_pending(&self) -> Result<bool> {
        Ok(self
            .state
            .lock()?
            .pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished()))
    }

    /// Drops any pending delivery without delivering it. Used on teardown.
    pub fn cancel(&self) -> Result<()> {
        if let Some(pending) = self.state.lock()?.pending.take() {
            pending.abort();
        }
        Ok(())
    }
}

impl<T> Drop for DebounceAfterFirst<T> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock()
            && let Some(pending) = state.pending.take()
        {
            pending.abort();
        }
    }
}
