//! Builder pattern implementation for creating ProgressRenderer instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use std::time::Duration;
//! use twirl::renderer::RendererBuilder;
//!
//! let renderer = RendererBuilder::new()
//!     .refresh_interval(Duration::from_millis(200))
//!     .frame_duration(Duration::from_millis(50))
//!     .build(Vec::new())?;
//! # Ok::<(), twirl::Error>(())
//! ```
//!
//! ## Plain Output
//!
//! ```rust
//! use twirl::renderer::RendererBuilder;
//!
//! // No colors, only cursor control sequences.
//! let renderer = RendererBuilder::plain().build(Vec::new())?;
//! assert!(!renderer.config().style_options.colors());
//! # Ok::<(), twirl::Error>(())
//! ```

use super::{cancel::CancellationToken, config::RendererConfig, renderer::ProgressRenderer};
use crate::clock::SharedClock;
use crate::item::SharedItem;
use crate::progress::StyleOptions;
use crate::Result;

use std::time::Duration;

/// A builder used to create a [`ProgressRenderer`].
#[derive(Default)]
pub struct RendererBuilder {
    config: RendererConfig,
}

impl RendererBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        RendererBuilder::default()
    }

    /// Convenience function to disable colors.
    pub fn plain() -> Self {
        let mut builder = RendererBuilder::default();
        builder.config.style_options = StyleOptions::plain();
        builder
    }

    /// Set the time between two recomputations of the active items.
    pub fn refresh_interval(mut self, refresh_interval: Duration) -> Self {
        self.config.refresh_interval = refresh_interval;
        self
    }

    /// Set the pause between two redraws.
    pub fn frame_duration(mut self, frame_duration: Duration) -> Self {
        self.config.frame_duration = frame_duration;
        self
    }

    /// Set the renderer style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Set the time source. Items measuring elapsed time should share it.
    pub fn clock(mut self, clock: SharedClock) -> Self {
        self.config.clock = clock;
        self
    }

    /// Use an existing cancellation token, e.g. one wired to Ctrl-C.
    pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.config.cancellation = token;
        self
    }

    /// Create the [`ProgressRenderer`] over `items` with the specified
    /// options.
    pub fn build(self, items: impl IntoIterator<Item = SharedItem>) -> Result<ProgressRenderer> {
        self.config.validate()?;
        Ok(ProgressRenderer::new(self.config, items.into_iter().collect()))
    }
}
