//! The redraw loop, one scheduler tick at a time.
//!
//! A [`Session`] owns the terminal region for the duration of a run. Each
//! call to [`Session::tick`] advances the loop up to its next suspension
//! point and tells the driver what to do: pause for one frame, or stop.
//!
//! ```text
//!   Header ──> Frame ──(sleep)──> Erase ──> Frame ... ──(interval elapsed)──> CycleDone
//!     ^                                                                         │
//!     └──────────────────────── active subset not empty ───────────────────────┤
//!                                                                               v
//!                                                                            Finish
//! ```
//!
//! Driving it by hand:
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use twirl::clock::{Clock, ManualClock};
//! use twirl::item::{MockDownload, SharedItem};
//! use twirl::renderer::{RendererBuilder, Tick};
//!
//! let clock = ManualClock::shared();
//! let item: SharedItem = Arc::new(MockDownload::with_duration(Duration::from_secs(1), clock.clone()));
//! let mut renderer = RendererBuilder::new().clock(clock.clone()).build(vec![item])?;
//! renderer.initialize()?;
//!
//! let mut out = Vec::new();
//! let mut session = renderer.session(&mut out)?;
//! let summary = loop {
//!     match session.tick()? {
//!         Tick::Sleep(frame) => clock.sleep(frame),
//!         Tick::Finished(summary) => break summary,
//!     }
//! };
//! assert_eq!(summary.succeeded(), 1);
//! # Ok::<(), twirl::Error>(())
//! ```

use super::config::RendererConfig;
use super::summary::{Failure, Summary};
use crate::item::{ItemStatus, SharedItem};
use crate::progress::display::{HeaderBar, Spinner, INDENT};
use crate::progress::{StyleOptions, Terminal};
use crate::{Error, Result};

use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// What the driver of a [`Session`] should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Pause for one frame, then tick again.
    Sleep(Duration),
    /// Every item reached a terminal state.
    Finished(Summary),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Header,
    Frame,
    /// Lines of the previous frame still on screen.
    Erase(usize),
    CycleDone,
    Finish,
    Done,
}

/// A single run over a renderer's items.
pub struct Session<'a, W: Write> {
    items: &'a [SharedItem],
    config: &'a RendererConfig,
    term: Terminal<'a, W>,
    active: Vec<SharedItem>,
    cycle_start: Instant,
    spinner: Spinner,
    phase: Phase,
}

impl<'a, W: Write> Session<'a, W> {
    pub(crate) fn new(items: &'a [SharedItem], config: &'a RendererConfig, out: &'a mut W) -> Self {
        let phase = if items.is_empty() {
            Phase::Finish
        } else {
            Phase::Header
        };
        Self {
            items,
            config,
            term: Terminal::new(out),
            active: items.to_vec(),
            cycle_start: config.clock.now(),
            spinner: Spinner::new(),
            phase,
        }
    }

    /// Advance the loop to its next suspension point.
    pub fn tick(&mut self) -> Result<Tick> {
        loop {
            match self.phase {
                Phase::Header => {
                    self.check_cancelled(false)?;
                    self.ensure_cursor_hidden()?;
                    let line = self.header_bar().render(self.style());
                    self.term.write_line(&line)?;
                    self.phase = Phase::Frame;
                }
                Phase::Frame => {
                    let elapsed = self.config.clock.elapsed_since(self.cycle_start);
                    if elapsed >= self.config.refresh_interval {
                        self.phase = Phase::CycleDone;
                        continue;
                    }
                    self.check_cancelled(true)?;
                    let lines = self.render_frame()?;
                    self.phase = Phase::Erase(lines);
                    return Ok(Tick::Sleep(self.config.frame_duration));
                }
                Phase::Erase(lines) => {
                    self.term.erase_lines(lines)?;
                    self.phase = Phase::Frame;
                }
                Phase::CycleDone => {
                    self.recompute_active();
                    self.term.delete_line()?;
                    self.check_cancelled(false)?;
                    self.phase = if self.active.is_empty() {
                        Phase::Finish
                    } else {
                        Phase::Header
                    };
                }
                Phase::Finish => {
                    let summary = self.finish()?;
                    self.phase = Phase::Done;
                    return Ok(Tick::Finished(summary));
                }
                Phase::Done => {
                    return Err(Error::InvalidState("session already finished".into()));
                }
            }
        }
    }

    /// Items not yet completed, in the order of the last frame.
    pub fn active(&self) -> &[SharedItem] {
        &self.active
    }

    /// The output sink.
    pub fn get_ref(&self) -> &W {
        self.term.get_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    fn style(&self) -> &'a StyleOptions {
        &self.config.style_options
    }

    fn ensure_cursor_hidden(&mut self) -> Result<()> {
        if !self.term.is_cursor_hidden() {
            self.term.hide_cursor()?;
        }
        Ok(())
    }

    fn header_bar(&self) -> HeaderBar {
        let mut done = 0;
        let mut failed = 0;
        for item in self.items {
            match item.status() {
                ItemStatus::InProgress => {}
                ItemStatus::Completed => done += 1,
                ItemStatus::Failed(_) => {
                    done += 1;
                    failed += 1;
                }
            }
        }
        HeaderBar::new(done, failed, self.items.len())
    }

    /// Sort the active subset by descending progress and draw one line each.
    fn render_frame(&mut self) -> Result<usize> {
        let mut ranked: Vec<(f64, SharedItem)> = self
            .active
            .iter()
            .map(|item| (item.normalized_progress(), Arc::clone(item)))
            .collect();
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
        self.active = ranked.into_iter().map(|(_, item)| item).collect();

        let style = self.style();
        for item in &self.active {
            item.render_line(self.term.sink(), &mut self.spinner, style)?;
        }
        self.term.flush()?;
        Ok(self.active.len())
    }

    fn recompute_active(&mut self) {
        let before = self.active.len();
        self.active = self
            .items
            .iter()
            .filter(|item| item.is_not_completed())
            .cloned()
            .collect();
        self.cycle_start = self.config.clock.now();
        debug!(
            active = self.active.len(),
            newly_completed = before.saturating_sub(self.active.len()),
            total = self.items.len(),
            "recomputed active items"
        );
    }

    fn summary(&self) -> Summary {
        let mut succeeded = 0;
        let mut failures = Vec::new();
        for item in self.items {
            match item.status() {
                ItemStatus::Failed(reason) => {
                    failures.push(Failure::new(item.display_title(), reason));
                }
                _ => succeeded += 1,
            }
        }
        Summary::new(succeeded, failures)
    }

    fn finish(&mut self) -> Result<Summary> {
        self.ensure_cursor_hidden()?;
        let style = self.style();
        let header = self.header_bar();
        self.term.write_line(&header.render(style))?;
        self.term.delete_line()?;
        self.term.erase_line()?;

        let summary = self.summary();
        let mut marker = style.success(StyleOptions::COMPLETED_MARKER);
        if !summary.is_success() {
            marker.push(' ');
            marker.push_str(&style.failure(&format!("with {} failed", summary.failed())));
        }
        self.term.write_str(INDENT)?;
        self.term.write_str(&marker)?;
        self.term.show_cursor()?;
        self.term.write_str("\n")?;
        self.term.flush()?;

        info!(
            succeeded = summary.succeeded(),
            failed = summary.failed(),
            "all items completed"
        );
        Ok(summary)
    }

    /// Stop the run if cancellation was requested. `frame_pending` tells
    /// whether the cursor sits below a visible header.
    fn check_cancelled(&mut self, frame_pending: bool) -> Result<()> {
        if !self.config.cancellation.is_cancelled() {
            return Ok(());
        }
        if frame_pending {
            self.term.delete_line()?;
        }
        self.term.erase_line()?;
        let marker = self.style().failure(StyleOptions::CANCELLED_MARKER);
        self.term.write_str(INDENT)?;
        self.term.write_str(&marker)?;
        if self.term.is_cursor_hidden() {
            self.term.show_cursor()?;
        }
        self.term.write_str("\n")?;
        self.term.flush()?;
        self.phase = Phase::Done;
        info!(active = self.active.len(), "run cancelled");
        Err(Error::Cancelled)
    }
}
