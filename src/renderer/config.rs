//! Configuration structures and defaults for the renderer.
//!
//! This module provides the configuration used by [`ProgressRenderer`] and
//! [`RendererBuilder`]: the two pacing tunables, the line style, the shared
//! time source and the cancellation token.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use twirl::renderer::RendererConfig;
//!
//! let config = RendererConfig::default();
//! assert_eq!(config.refresh_interval, Duration::from_millis(1500));
//! assert!(config.validate().is_ok());
//! ```
//!
//! [`ProgressRenderer`]: crate::renderer::ProgressRenderer
//! [`RendererBuilder`]: crate::renderer::RendererBuilder

use super::cancel::CancellationToken;
use crate::clock::{SharedClock, SystemClock};
use crate::progress::StyleOptions;
use crate::{Error, Result};

use std::time::Duration;

/// Configuration structure for the renderer
#[derive(Clone)]
pub struct RendererConfig {
    /// Time between two recomputations of the active subset.
    pub refresh_interval: Duration,
    /// Pause between two redraws within a refresh interval.
    pub frame_duration: Duration,
    /// Renderer style options.
    pub style_options: StyleOptions,
    /// Time source for frame pacing and cycle timing.
    pub clock: SharedClock,
    /// Checked at every frame and cycle boundary.
    pub cancellation: CancellationToken,
}

impl RendererConfig {
    /// Default refresh interval: 1.5 s.
    pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(1500);
    /// Default frame duration: 1/30 s.
    pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 30);

    /// Check that the tunables can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.refresh_interval.is_zero() {
            return Err(Error::InvalidConfig(
                "refresh interval must be greater than zero".into(),
            ));
        }
        if self.frame_duration.is_zero() {
            return Err(Error::InvalidConfig(
                "frame duration must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for RendererConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererConfig")
            .field("refresh_interval", &self.refresh_interval)
            .field("frame_duration", &self.frame_duration)
            .field("style_options", &self.style_options)
            .field("cancelled", &self.cancellation.is_cancelled())
            .finish()
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Self::DEFAULT_REFRESH_INTERVAL,
            frame_duration: Self::DEFAULT_FRAME_DURATION,
            style_options: StyleOptions::default(),
            clock: SystemClock::shared(),
            cancellation: CancellationToken::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_durations_are_rejected() {
        let config = RendererConfig {
            frame_duration: Duration::ZERO,
            ..RendererConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = RendererConfig {
            refresh_interval: Duration::ZERO,
            ..RendererConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_default_frame_is_a_thirtieth_of_a_second() {
        let frame = RendererConfig::DEFAULT_FRAME_DURATION.as_secs_f64();
        assert!((frame - 1.0 / 30.0).abs() < 1e-9);
    }
}
