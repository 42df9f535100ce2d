//! Twirl is a crate drawing the progress of many concurrently progressing
//! items in place in a terminal: a header bar summarizing how many items are
//! done, and one spinner line per unfinished item, sorted by progress.
//!
//! # Quick Start
//!
//! ```rust
//! use twirl::clock::ManualClock;
//! use twirl::renderer::RendererBuilder;
//! use twirl::workload::Workload;
//! use twirl::Error;
//!
//! # fn main() -> Result<(), Error> {
//! // A virtual clock makes the run finish instantly.
//! let clock = ManualClock::shared();
//! let items = Workload::new(10, 100.0).seed(1).generate_items(clock.clone())?;
//!
//! let mut renderer = RendererBuilder::new().clock(clock).build(items)?;
//! renderer.initialize()?;
//! let summary = renderer.run(&mut std::io::sink())?;
//! assert_eq!(summary.succeeded(), 10);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`item`] - The `ProgressItem` trait and its variants
//! - [`renderer`] - The `ProgressRenderer` redraw loop and its builder
//! - [`progress`] - Line layout, styling and terminal control sequences
//! - [`clock`] - Time sources shared by items and the renderer
//! - [`workload`] - Random mock download workloads
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod clock;
pub mod error;
pub mod item;
pub mod progress;
pub mod renderer;
pub mod workload;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock, TokioClock};
pub use error::{Error, Result};
pub use item::{ItemId, ItemStatus, MockDownload, ProgressItem, SharedItem, TransferProgress};
pub use progress::StyleOptions;
pub use renderer::{CancellationToken, ProgressRenderer, RendererBuilder, RendererConfig, Summary};
pub use workload::Workload;
