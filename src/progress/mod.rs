//! Progress module containing the text layout and terminal plumbing.
//!
//! This module provides line styling, the layout of the header bar and item
//! lines, and the cursor-control writer used to redraw them in place.
//!
//! # Overview
//!
//! The progress module is organized into three components:
//!
//! - `style` - Colors and labels
//! - `display` - Header bar, spinner and item line layout
//! - `terminal` - ANSI escape sequences and cursor restoration
//!
//! # Examples
//!
//! ## Rendering a Header Line
//!
//! ```rust
//! use twirl::progress::{HeaderBar, StyleOptions};
//!
//! let line = HeaderBar::new(10, 0, 10).render(&StyleOptions::plain());
//! assert!(line.contains("[10 / 10 downloaded]"));
//! ```
//!
//! ## Formatting Percentages
//!
//! ```rust
//! use twirl::progress::format_percentage;
//!
//! assert_eq!(format_percentage(0.04291), "04.29 %");
//! ```

pub mod display;
pub(crate) mod style;
pub mod terminal;

pub use display::{format_percentage, HeaderBar, Spinner};
pub use style::StyleOptions;
pub use terminal::Terminal;
