//! Styling options for rendered lines.
//!
//! Colors are applied with [`console`] and can be switched off entirely, for
//! instance when the output is captured or piped. Cursor control sequences
//! are not affected by these options.
//!
//! # Examples
//!
//! ## Default Styling
//!
//! ```rust
//! use twirl::progress::StyleOptions;
//!
//! // Bold green header label and done marker, red failures.
//! let style = StyleOptions::default();
//! assert!(style.colors());
//! ```
//!
//! ## Plain Output
//!
//! ```rust
//! use twirl::progress::StyleOptions;
//!
//! let style = StyleOptions::plain().with_label("Syncing").with_verb("synced");
//! assert_eq!(style.header_label(), "Syncing");
//! ```

use console::style;

/// Define the renderer style options.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Emit ANSI colors.
    colors: bool,
    /// Word shown at the start of the header line.
    label: String,
    /// Past participle shown after the header counts.
    verb: String,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            colors: true,
            label: StyleOptions::DEFAULT_LABEL.into(),
            verb: StyleOptions::DEFAULT_VERB.into(),
        }
    }
}

impl StyleOptions {
    /// Header label used by default.
    pub const DEFAULT_LABEL: &'static str = "Downloading";
    /// Header verb used by default.
    pub const DEFAULT_VERB: &'static str = "downloaded";
    /// Marker for successfully completed items.
    pub const DONE_MARKER: &'static str = "\u{2714} Done!";
    /// Marker for failed items.
    pub const FAILED_MARKER: &'static str = "\u{2718} Failed:";
    /// Final line of a run.
    pub const COMPLETED_MARKER: &'static str = "Completed";
    /// Final line of a cancelled run.
    pub const CANCELLED_MARKER: &'static str = "Cancelled";

    /// Create new [`StyleOptions`].
    pub fn new(colors: bool, label: impl Into<String>, verb: impl Into<String>) -> Self {
        Self {
            colors,
            label: label.into(),
            verb: verb.into(),
        }
    }

    /// Default labels without any color.
    pub fn plain() -> Self {
        Self {
            colors: false,
            ..StyleOptions::default()
        }
    }

    /// Set the header label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the header verb.
    pub fn with_verb(mut self, verb: impl Into<String>) -> Self {
        self.verb = verb.into();
        self
    }

    /// Enable or disable colors.
    pub fn set_colors(&mut self, colors: bool) {
        self.colors = colors;
    }

    pub fn colors(&self) -> bool {
        self.colors
    }

    pub fn header_label(&self) -> &str {
        &self.label
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Bold green text.
    pub(crate) fn success(&self, text: &str) -> String {
        style(text)
            .green()
            .bold()
            .force_styling(self.colors)
            .to_string()
    }

    /// Bold red text.
    pub(crate) fn failure(&self, text: &str) -> String {
        style(text)
            .red()
            .bold()
            .force_styling(self.colors)
            .to_string()
    }
}
