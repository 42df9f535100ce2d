//! Time sources shared by items and the renderer.
//!
//! Progress of simulated items is a pure function of elapsed time, and the
//! renderer paces frames and refresh cycles against the same source. Keeping
//! both behind [`Clock`] lets the whole loop run against virtual time.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use twirl::clock::{Clock, ManualClock};
//!
//! let clock = ManualClock::new();
//! let before = clock.now();
//! clock.sleep(Duration::from_millis(250));
//! assert_eq!(clock.now() - before, Duration::from_millis(250));
//! ```

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Shared handle to a clock.
pub type SharedClock = Arc<dyn Clock>;

/// A monotonic time source with a blocking pause.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> Instant;

    /// Pause the calling thread for `duration`.
    fn sleep(&self, duration: Duration);

    /// Time elapsed since `earlier`, saturating at zero.
    fn elapsed_since(&self, earlier: Instant) -> Duration {
        self.now().saturating_duration_since(earlier)
    }
}

/// The operating system's monotonic clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    /// Create a shared handle to the system clock.
    pub fn shared() -> SharedClock {
        Arc::new(SystemClock)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// A virtual clock that only moves when told to.
///
/// [`Clock::sleep`] advances virtual time by the requested duration and
/// returns immediately, so a full render run completes without waiting.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Mutex<Duration>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    /// Create a virtual clock anchored at the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    /// Create a shared virtual clock.
    pub fn shared() -> Arc<ManualClock> {
        Arc::new(Self::new())
    }

    /// Move virtual time forward.
    pub fn advance(&self, duration: Duration) {
        let mut offset = self.offset.lock().unwrap_or_else(|e| e.into_inner());
        *offset += duration;
    }

    /// Total virtual time elapsed since creation.
    pub fn elapsed(&self) -> Duration {
        *self.offset.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}

/// Tokio's clock, which honours `tokio::time::pause`.
///
/// Use together with [`ProgressRenderer::run_async`] so that items and the
/// frame pacer agree on time, including under paused test time. The blocking
/// `sleep` is only meant for synchronous callers outside the runtime.
///
/// [`ProgressRenderer::run_async`]: crate::renderer::ProgressRenderer::run_async
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_only_moves_on_sleep() {
        let clock = ManualClock::new();
        let t0 = clock.now();
        assert_eq!(clock.now(), t0);
        clock.sleep(Duration::from_secs(2));
        assert_eq!(clock.elapsed_since(t0), Duration::from_secs(2));
    }

    #[test]
    fn test_elapsed_since_saturates() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_secs(1));
        let later = clock.now() + Duration::from_secs(5);
        assert_eq!(clock.elapsed_since(later), Duration::ZERO);
    }
}
