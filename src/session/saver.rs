//! Debounced persistence scheduling.
//!
//! Changes to the session state are saved as one whole blob after a
//! quiet period (600 ms by default). The debounce is an explicit
//! cancellable delayed task: scheduling a newer snapshot aborts any
//! armed save, so at most one save is outstanding per session and the
//! last snapshot wins.
//!
//! A failed save is logged and dropped; the next change schedules a
//! fresh attempt. There is no retry queue.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::UserData;
use crate::testing::UserDataBackend;

/// Default quiet period before a scheduled save fires.
pub const DEFAULT_SAVE_DEBOUNCE_MS: u64 = 600;

/// Cancel-on-supersede delayed saver.
///
/// # Example
///
/// ```rust,ignore
/// let mut saver = DebouncedSaver::new(backend);
/// saver.schedule(session.snapshot());
/// // ...more edits within the quiet period...
/// saver.schedule(session.snapshot()); // supersedes the armed save
/// ```
pub struct DebouncedSaver {
    backend: Arc<dyn UserDataBackend>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for DebouncedSaver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebouncedSaver")
            .field("delay", &self.delay)
            .field("pending", &self.has_pending())
            .finish()
    }
}

impl DebouncedSaver {
    /// Create a saver with the default quiet period.
    #[must_use]
    pub fn new(backend: Arc<dyn UserDataBackend>) -> Self {
        Self {
            backend,
            delay: Duration::from_millis(DEFAULT_SAVE_DEBOUNCE_MS),
            pending: None,
        }
    }

    /// Set the quiet period.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Arm a save for `data`, superseding any armed save.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, data: UserData) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let backend = Arc::clone(&self.backend);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(err) = backend.save(&data).await {
                // Dropped on purpose: the next change retries
                tracing::warn!("user-data save dropped: {err:#}");
            }
        }));
    }

    /// Abort any armed save without running it (logout).
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Wait for the armed save to run, if one is armed.
    pub async fn flush(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }

    /// Check whether a save is armed and not yet finished.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

// ============================================================================
// Tests
// ============================================================================
