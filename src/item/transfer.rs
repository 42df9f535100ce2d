//! A byte counter advanced by whoever performs the actual work.
//!
//! The renderer only polls; the producer (a network task, a copy loop, a
//! test) calls [`TransferProgress::advance`] and, on error,
//! [`TransferProgress::fail`]. The item is shared through an [`Arc`] so the
//! producer keeps its handle while the renderer holds another.
//!
//! ```rust
//! use std::sync::Arc;
//! use twirl::item::{ItemStatus, ProgressItem, TransferProgress};
//!
//! let transfer = Arc::new(TransferProgress::new(200).with_title("archive.zip"));
//! transfer.start();
//! transfer.advance(50);
//! assert_eq!(transfer.normalized_progress(), 0.25);
//!
//! transfer.fail("connection reset");
//! assert_eq!(transfer.status(), ItemStatus::Failed("connection reset".into()));
//! assert!(transfer.is_completed());
//! ```
//!
//! [`Arc`]: std::sync::Arc

use super::{ItemId, ItemStatus, ProgressItem};

use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

#[derive(Debug)]
struct State {
    started: bool,
    transferred: u64,
    failure: Option<String>,
}

/// Progress of a transfer of a known number of bytes.
#[derive(Debug)]
pub struct TransferProgress {
    id: ItemId,
    title: Option<String>,
    total: u64,
    state: Mutex<State>,
}

impl TransferProgress {
    /// Track a transfer of `total` bytes. A zero-byte transfer is complete as
    /// soon as it is polled.
    pub fn new(total: u64) -> Self {
        Self {
            id: ItemId::new(),
            title: None,
            total,
            state: Mutex::new(State {
                started: false,
                transferred: 0,
                failure: None,
            }),
        }
    }

    /// Use `title` instead of the identity when rendering.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Total number of bytes expected.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Bytes transferred so far.
    pub fn transferred(&self) -> u64 {
        self.lock().transferred
    }

    /// Record `bytes` more transferred bytes. Ignored once the transfer failed.
    pub fn advance(&self, bytes: u64) {
        let mut state = self.lock();
        if state.failure.is_some() {
            return;
        }
        state.transferred = state.transferred.saturating_add(bytes).min(self.total);
    }

    /// Mark the transfer as failed. Ignored once the transfer completed or
    /// already failed, so the first terminal state wins.
    pub fn fail(&self, reason: impl Into<String>) {
        let mut state = self.lock();
        if state.failure.is_some() || state.transferred >= self.total {
            return;
        }
        let reason = reason.into();
        debug!(id = %self.id, %reason, "transfer failed");
        state.failure = Some(reason);
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ProgressItem for TransferProgress {
    fn id(&self) -> ItemId {
        self.id
    }

    fn start(&self) {
        let mut state = self.lock();
        if state.started {
            warn!(id = %self.id, "transfer started more than once");
        }
        state.started = true;
    }

    fn normalized_progress(&self) -> f64 {
        let state = self.lock();
        if self.total == 0 {
            return if state.failure.is_some() { 0.0 } else { 1.0 };
        }
        (state.transferred as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    fn status(&self) -> ItemStatus {
        let state = self.lock();
        match &state.failure {
            Some(reason) => ItemStatus::Failed(reason.clone()),
            None if state.transferred >= self.total => ItemStatus::Completed,
            None => ItemStatus::InProgress,
        }
    }

    fn display_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => self.id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_clamped_to_total() {
        let t = TransferProgress::new(10);
        t.start();
        t.advance(7);
        t.advance(7);
        assert_eq!(t.transferred(), 10);
        assert_eq!(t.normalized_progress(), 1.0);
        assert_eq!(t.status(), ItemStatus::Completed);
    }

    #[test]
    fn test_fail_after_completion_is_ignored() {
        let t = TransferProgress::new(4);
        t.start();
        t.advance(4);
        t.fail("too late");
        assert_eq!(t.status(), ItemStatus::Completed);
    }

    #[test]
    fn test_progress_freezes_after_failure() {
        let t = TransferProgress::new(100);
        t.start();
        t.advance(30);
        t.fail("disk full");
        t.advance(50);
        assert_eq!(t.transferred(), 30);
        assert!(t.status().is_failed());
    }

    #[test]
    fn test_zero_byte_transfer_is_complete() {
        let t = TransferProgress::new(0);
        t.start();
        assert!(t.is_completed());
        assert_eq!(t.normalized_progress(), 1.0);
    }
}
