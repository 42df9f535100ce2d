//! Renderer module containing the redraw loop, its builder and configuration.
//!
//! This module provides the [`ProgressRenderer`] and its builder. The
//! renderer starts a fixed set of items, then redraws a header bar and one
//! line per unfinished item in place until all of them completed.
//!
//! # Overview
//!
//! - `renderer` - The ProgressRenderer with its lifecycle and run drivers
//! - `session` - The tick-by-tick redraw state machine
//! - `builder` - RendererBuilder for flexible configuration
//! - `config` - Configuration structure and defaults
//! - `cancel` - Cooperative cancellation
//! - `summary` - Run outcome
//!
//! # Examples
//!
//! ## Async Run
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use twirl::clock::TokioClock;
//! use twirl::item::{MockDownload, SharedItem};
//! use twirl::renderer::RendererBuilder;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), twirl::Error> {
//! let clock = Arc::new(TokioClock);
//! let item: SharedItem = Arc::new(MockDownload::with_duration(Duration::from_millis(30), clock.clone()));
//! let mut renderer = RendererBuilder::plain()
//!     .clock(clock)
//!     .refresh_interval(Duration::from_millis(20))
//!     .frame_duration(Duration::from_millis(5))
//!     .build(vec![item])?;
//! renderer.initialize()?;
//! let summary = renderer.run_async(&mut std::io::sink()).await?;
//! assert!(summary.is_success());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod cancel;
pub mod config;
pub mod renderer;
pub mod session;
pub mod summary;

pub use builder::RendererBuilder;
pub use cancel::CancellationToken;
pub use config::RendererConfig;
pub use renderer::ProgressRenderer;
pub use session::{Session, Tick};
pub use summary::{Failure, Summary};
