//! Text layout for the header bar and the per-item lines.
//!
//! Everything here is pure formatting: the functions build strings and leave
//! writing, cursor movement and erasing to the [`Terminal`].
//!
//! ```text
//!     Downloading  [=============>                ] [4 / 9 downloaded]
//!     ◓ 83.10 % [6d7c1f2e-…]
//!     ✔ Done! [9a01be77-…]
//! ```
//!
//! [`Terminal`]: crate::progress::terminal::Terminal

use crate::item::ItemStatus;
use crate::progress::StyleOptions;

/// Prefix of every rendered line.
pub const INDENT: &str = "    ";

/// Number of cells inside the header bar brackets.
pub const HEADER_BAR_WIDTH: usize = 30;

/// Spinner rotation, shared by all in-progress lines.
pub const SPINNER_GLYPHS: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Rotating spinner advanced once per rendered line.
#[derive(Debug, Default, Clone)]
pub struct Spinner {
    step: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current glyph and move to the next one.
    pub fn advance(&mut self) -> char {
        let glyph = SPINNER_GLYPHS[self.step % SPINNER_GLYPHS.len()];
        self.step = self.step.wrapping_add(1);
        glyph
    }

    /// Number of times the spinner was advanced.
    pub fn steps(&self) -> usize {
        self.step
    }
}

/// Format a normalized progress value as a percentage, e.g. `04.29 %`.
pub fn format_percentage(progress: f64) -> String {
    format!("{:05.2} %", progress.clamp(0.0, 1.0) * 100.0)
}

/// Header summary of how many items reached a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderBar {
    /// Items that completed, successfully or not.
    pub done: usize,
    /// Subset of `done` that failed.
    pub failed: usize,
    /// All items of the run.
    pub total: usize,
}

impl HeaderBar {
    pub fn new(done: usize, failed: usize, total: usize) -> Self {
        Self {
            done,
            failed,
            total,
        }
    }

    /// Number of filled cells. An empty run counts as complete.
    pub fn filled(&self) -> usize {
        if self.total == 0 {
            return HEADER_BAR_WIDTH;
        }
        let ratio = self.done.min(self.total) as f64 / self.total as f64;
        ((ratio * HEADER_BAR_WIDTH as f64).ceil() as usize).min(HEADER_BAR_WIDTH)
    }

    /// Bar interior: `=` cells ending in a `>` marker, padded with blanks.
    pub fn bar(&self) -> String {
        let filled = self.filled();
        let mut bar = String::with_capacity(HEADER_BAR_WIDTH);
        bar.push_str(&"=".repeat(filled.saturating_sub(1)));
        bar.push('>');
        bar.push_str(&" ".repeat(HEADER_BAR_WIDTH - filled.max(1)));
        bar
    }

    /// Full header line, without the trailing newline.
    pub fn render(&self, style: &StyleOptions) -> String {
        let counts = if self.failed > 0 {
            format!(
                "{} / {} {}, {} failed",
                self.done,
                self.total,
                style.verb(),
                self.failed
            )
        } else {
            format!("{} / {} {}", self.done, self.total, style.verb())
        };
        format!(
            "{INDENT}{}  [{}] [{counts}]  ",
            style.success(style.header_label()),
            self.bar()
        )
    }
}

/// Line for a single item, without the trailing newline.
pub fn item_line(
    status: &ItemStatus,
    progress: f64,
    title: &str,
    glyph: char,
    style: &StyleOptions,
) -> String {
    match status {
        ItemStatus::Completed => {
            format!("{INDENT}{} [{title}]", style.success(StyleOptions::DONE_MARKER))
        }
        ItemStatus::Failed(reason) => format!(
            "{INDENT}{} {reason} [{title}]",
            style.failure(StyleOptions::FAILED_MARKER)
        ),
        ItemStatus::InProgress => {
            format!("{INDENT}{glyph} {} [{title}]", format_percentage(progress))
        }
    }
}
