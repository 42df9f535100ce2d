//! Core renderer implementation.
//!
//! This module contains the [`ProgressRenderer`] that owns a fixed set of
//! items, starts them, and drives the in-place redraw loop until every one of
//! them reached a terminal state.
//!
//! # Examples
//!
//! ## Blocking Run
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use twirl::clock::ManualClock;
//! use twirl::item::{MockDownload, SharedItem};
//! use twirl::renderer::RendererBuilder;
//!
//! let clock = ManualClock::shared();
//! let items: Vec<SharedItem> = (1..=3)
//!     .map(|secs| {
//!         Arc::new(MockDownload::with_duration(Duration::from_secs(secs), clock.clone()))
//!             as SharedItem
//!     })
//!     .collect();
//!
//! let mut renderer = RendererBuilder::plain().clock(clock).build(items)?;
//! renderer.initialize()?;
//!
//! let mut out = Vec::new();
//! let summary = renderer.run(&mut out)?;
//! assert_eq!(summary.succeeded(), 3);
//! # Ok::<(), twirl::Error>(())
//! ```

use super::cancel::CancellationToken;
use super::config::RendererConfig;
use super::session::{Session, Tick};
use super::summary::Summary;
use crate::item::SharedItem;
use crate::{Error, Result};

use std::fmt;
use std::fmt::Debug;
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Initialized,
    Ran,
}

/// Represents the progress renderer.
///
/// A renderer can be created via its builder:
///
/// ```rust
/// # fn main() -> Result<(), twirl::Error> {
/// use twirl::renderer::RendererBuilder;
///
/// let r = RendererBuilder::new().build(Vec::new())?;
/// assert!(r.items().is_empty());
/// # Ok(())
/// # }
/// ```
pub struct ProgressRenderer {
    config: RendererConfig,
    items: Vec<SharedItem>,
    lifecycle: Lifecycle,
}

impl Debug for ProgressRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressRenderer")
            .field("config", &self.config)
            .field("items", &self.items.len())
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}

impl ProgressRenderer {
    /// Creates a new renderer with the given configuration.
    pub(crate) fn new(config: RendererConfig, items: Vec<SharedItem>) -> Self {
        Self {
            config,
            items,
            lifecycle: Lifecycle::Created,
        }
    }

    /// Gets the tracked items, in construction order.
    pub fn items(&self) -> &[SharedItem] {
        &self.items
    }

    /// Gets the renderer configuration.
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Gets a handle to cancel the run from elsewhere.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.config.cancellation.clone()
    }

    /// Start every item, in order. Must be called exactly once, before
    /// [`run`](Self::run).
    pub fn initialize(&mut self) -> Result<()> {
        if self.lifecycle != Lifecycle::Created {
            return Err(Error::InvalidState("renderer already initialized".into()));
        }
        debug!(items = self.items.len(), "starting items");
        for item in &self.items {
            item.start();
        }
        self.lifecycle = Lifecycle::Initialized;
        Ok(())
    }

    /// Open the single run of this renderer, to be driven tick by tick.
    pub fn session<'a, W: Write>(&'a mut self, out: &'a mut W) -> Result<Session<'a, W>> {
        match self.lifecycle {
            Lifecycle::Created => {
                return Err(Error::InvalidState(
                    "renderer must be initialized before running".into(),
                ))
            }
            Lifecycle::Ran => return Err(Error::InvalidState("renderer already ran".into())),
            Lifecycle::Initialized => {}
        }
        self.lifecycle = Lifecycle::Ran;
        Ok(Session::new(&self.items, &self.config, out))
    }

    /// Drive the display loop to completion, pausing with the configured
    /// clock between frames.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Summary> {
        let clock = Arc::clone(&self.config.clock);
        let mut session = self.session(out)?;
        loop {
            match session.tick()? {
                Tick::Sleep(frame) => clock.sleep(frame),
                Tick::Finished(summary) => return Ok(summary),
            }
        }
    }

    /// Same as [`run`](Self::run), but yields to the tokio runtime between
    /// frames instead of blocking the thread.
    pub async fn run_async<W: Write>(&mut self, out: &mut W) -> Result<Summary> {
        let mut session = self.session(out)?;
        loop {
            match session.tick()? {
                Tick::Sleep(frame) => tokio::time::sleep(frame).await,
                Tick::Finished(summary) => return Ok(summary),
            }
        }
    }
}
