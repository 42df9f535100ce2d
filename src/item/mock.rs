//! A simulated download whose progress is a function of elapsed time.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use twirl::clock::ManualClock;
//! use twirl::item::{MockDownload, ProgressItem};
//!
//! let clock = ManualClock::shared();
//! let download = MockDownload::new(50.0, 10.0, clock.clone())?;
//! assert_eq!(download.expected_duration(), Duration::from_secs(5));
//!
//! download.start();
//! clock.advance(Duration::from_millis(2500));
//! assert_eq!(download.normalized_progress(), 0.5);
//!
//! clock.advance(Duration::from_secs(3));
//! assert!(download.is_completed());
//! assert_eq!(download.normalized_progress(), 1.0);
//! # Ok::<(), twirl::Error>(())
//! ```

use super::{ItemId, ItemStatus, ProgressItem};
use crate::clock::SharedClock;
use crate::{Error, Result};

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// A transfer of `size` megabytes at a constant `bandwidth` in MB/s.
pub struct MockDownload {
    id: ItemId,
    title: Option<String>,
    size: f64,
    bandwidth: f64,
    expected_duration: Duration,
    clock: SharedClock,
    started_at: OnceLock<Instant>,
    /// Latched once elapsed time reaches the expected duration.
    finished: AtomicBool,
}

impl MockDownload {
    /// Create a new simulated download.
    ///
    /// `size` must be finite and non-negative, `bandwidth` finite and
    /// strictly positive.
    pub fn new(size: f64, bandwidth: f64, clock: SharedClock) -> Result<Self> {
        if !size.is_finite() || size < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "download size must be a non-negative number, got {size}"
            )));
        }
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "bandwidth must be a positive number, got {bandwidth}"
            )));
        }
        let expected_duration = Duration::try_from_secs_f64(size / bandwidth)
            .map_err(|e| Error::InvalidConfig(format!("expected duration out of range: {e}")))?;
        Ok(Self::build(size, bandwidth, expected_duration, clock))
    }

    /// Create a download that takes exactly `duration` to complete.
    pub fn with_duration(duration: Duration, clock: SharedClock) -> Self {
        let secs = duration.as_secs_f64();
        Self::build(secs, 1.0, duration, clock)
    }

    fn build(size: f64, bandwidth: f64, expected_duration: Duration, clock: SharedClock) -> Self {
        Self {
            id: ItemId::new(),
            title: None,
            size,
            bandwidth,
            expected_duration,
            clock,
            started_at: OnceLock::new(),
            finished: AtomicBool::new(false),
        }
    }

    /// Use `title` instead of the identity when rendering.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Size in megabytes.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Bandwidth in megabytes per second.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Time the transfer takes from `start` to completion.
    pub fn expected_duration(&self) -> Duration {
        self.expected_duration
    }

    fn elapsed(&self) -> Option<Duration> {
        let started_at = self.started_at.get()?;
        Some(self.clock.elapsed_since(*started_at))
    }

    /// Latch `finished` when the deadline has passed. Returns the latch.
    fn latch(&self, elapsed: Duration) -> bool {
        if elapsed >= self.expected_duration {
            if !self.finished.swap(true, Ordering::AcqRel) {
                debug!(id = %self.id, "mock download finished");
            }
            return true;
        }
        false
    }
}

impl ProgressItem for MockDownload {
    fn id(&self) -> ItemId {
        self.id
    }

    fn start(&self) {
        if self.started_at.set(self.clock.now()).is_err() {
            warn!(id = %self.id, "mock download started more than once, keeping first start");
            return;
        }
        debug!(id = %self.id, expected = ?self.expected_duration, "mock download started");
    }

    fn normalized_progress(&self) -> f64 {
        if self.finished.load(Ordering::Acquire) {
            return 1.0;
        }
        let Some(elapsed) = self.elapsed() else {
            warn!(id = %self.id, "progress queried before start");
            return 0.0;
        };
        if self.latch(elapsed) {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.expected_duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    fn status(&self) -> ItemStatus {
        let finished = self.finished.load(Ordering::Acquire)
            || self.elapsed().is_some_and(|elapsed| self.latch(elapsed));
        if finished {
            ItemStatus::Completed
        } else {
            ItemStatus::InProgress
        }
    }

    fn display_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => self.id.to_string(),
        }
    }
}

impl fmt::Debug for MockDownload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MockDownload(size={}MB, bandwidth={}MBps)",
            self.size, self.bandwidth
        )
    }
}
