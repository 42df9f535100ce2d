//! Trackable units of work.
//!
//! A [`ProgressItem`] exposes a normalized progress fraction, a terminal
//! status and a start trigger. The renderer only ever talks to items through
//! this trait, so new kinds of work can be tracked without touching it.
//!
//! # Overview
//!
//! - [`mock`] - A simulated, time-based transfer
//! - [`transfer`] - A byte counter driven by an external producer
//!
//! # Examples
//!
//! ## Implementing a Custom Item
//!
//! ```rust
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use twirl::item::{ItemId, ItemStatus, ProgressItem};
//!
//! struct Flag {
//!     id: ItemId,
//!     done: AtomicBool,
//! }
//!
//! impl ProgressItem for Flag {
//!     fn id(&self) -> ItemId {
//!         self.id
//!     }
//!
//!     fn start(&self) {}
//!
//!     fn normalized_progress(&self) -> f64 {
//!         if self.done.load(Ordering::Acquire) { 1.0 } else { 0.0 }
//!     }
//!
//!     fn status(&self) -> ItemStatus {
//!         if self.done.load(Ordering::Acquire) {
//!             ItemStatus::Completed
//!         } else {
//!             ItemStatus::InProgress
//!         }
//!     }
//! }
//!
//! let flag = Flag { id: ItemId::new(), done: AtomicBool::new(false) };
//! assert!(flag.is_not_completed());
//! flag.done.store(true, Ordering::Release);
//! assert!(flag.is_completed());
//! ```

pub mod mock;
pub mod transfer;

pub use mock::MockDownload;
pub use transfer::TransferProgress;

use crate::progress::display::{self, Spinner};
use crate::progress::StyleOptions;

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use uuid::Uuid;

/// Shared handle to an item, as held by the renderer.
pub type SharedItem = Arc<dyn ProgressItem>;

/// Opaque identity of an item, used for display and log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a new random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle state of an item.
///
/// `Completed` and `Failed` are terminal: once reported, an item keeps
/// reporting the same state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// Work is still ongoing.
    InProgress,
    /// Work finished successfully.
    Completed,
    /// Work stopped with the given reason.
    Failed(String),
}

impl ItemStatus {
    /// `true` for `Completed` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ItemStatus::InProgress)
    }

    /// `true` only for `Failed`.
    pub fn is_failed(&self) -> bool {
        matches!(self, ItemStatus::Failed(_))
    }
}

/// A trackable unit of work.
///
/// Implementations use interior mutability: progress queries may latch a
/// finished state so that later checks are cheap and stable.
pub trait ProgressItem: Send + Sync {
    /// Identity assigned at creation.
    fn id(&self) -> ItemId;

    /// Record the reference point progress is measured from.
    ///
    /// Called exactly once by the renderer before any progress query.
    fn start(&self);

    /// Progress in `[0.0, 1.0]`. Never decreases, and is exactly `1.0` once
    /// the item has completed.
    fn normalized_progress(&self) -> f64;

    /// Current lifecycle state. Never leaves a terminal state.
    fn status(&self) -> ItemStatus;

    /// Whether the item reached a terminal state, successful or not.
    fn is_completed(&self) -> bool {
        self.status().is_terminal()
    }

    fn is_not_completed(&self) -> bool {
        !self.is_completed()
    }

    /// Label shown next to the progress. Defaults to the identity.
    fn display_title(&self) -> String {
        self.id().to_string()
    }

    /// Write exactly one line describing this item to `out`.
    ///
    /// The spinner is owned by the caller and advanced once per call, so all
    /// items rendered in a frame share a single visual heartbeat.
    fn render_line(
        &self,
        out: &mut dyn Write,
        spinner: &mut Spinner,
        style: &StyleOptions,
    ) -> io::Result<()> {
        let glyph = spinner.advance();
        let status = self.status();
        let line = display::item_line(
            &status,
            self.normalized_progress(),
            &self.display_title(),
            glyph,
            style,
        );
        writeln!(out, "{line}")
    }
}
