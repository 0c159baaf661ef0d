//! Copy Feedback - Transient "Copied!" indicator
//!
//! At most one prompt shows the indicator at a time. Each `show` schedules
//! a revert on the tokio runtime; the revert only clears the slot if no
//! newer `show` or `clear` happened in the meantime.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::domain::RecordId;

/// How long the indicator stays up
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(1500);

/// Text shown in place of the prompt body
pub const COPIED_LABEL: &str = "Copied!";

#[derive(Debug, Default)]
struct Slot {
    active: Option<RecordId>,
    generation: u64,
}

/// Feedback id holder with a cancellable revert task
#[derive(Debug)]
pub struct CopyFeedback {
    slot: Arc<Mutex<Slot>>,
    duration: Duration,
    revert: Option<JoinHandle<()>>,
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            duration,
            revert: None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn cancel_revert(&mut self) {
        if let Some(handle) = self.revert.take() {
            handle.abort();
        }
    }

    /// Drop any active indicator immediately
    pub fn clear(&mut self) {
        self.cancel_revert();
        let mut slot = self.lock();
        slot.active = None;
        slot.generation += 1;
    }

    /// Show the indicator for `id` and schedule its revert.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&mut self, id: RecordId) {
        self.cancel_revert();
        let generation = {
            let mut slot = self.lock();
            slot.generation += 1;
            slot.active = Some(id);
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        let duration = self.duration;
        self.revert = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut slot = slot.lock().unwrap_or_else(PoisonError::into_inner);
            if slot.generation == generation {
                slot.active = None;
                tracing::debug!(%id, "Copy feedback reverted");
            }
        }));
    }

    /// Record currently showing the indicator
    pub fn current(&self) -> Option<RecordId> {
        self.lock().active
    }

    pub fn is_showing(&self, id: &RecordId) -> bool {
        self.current().as_ref() == Some(id)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(FEEDBACK_DURATION)
    }
}

impl Drop for CopyFeedback {
    fn drop(&mut self) {
        self.cancel_revert();
    }
}
