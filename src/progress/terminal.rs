//! Cursor control on top of any [`Write`] sink.
//!
//! [`Terminal`] hides the cursor while a redraw region is active and shows it
//! again when dropped, so the cursor comes back even when the run ends early
//! through an error, a cancellation or a panic.

use std::io::{self, Write};
use tracing::warn;

/// Erase the whole current line.
pub const ERASE_LINE: &str = "\x1b[2K";
/// Move the cursor up by one line.
pub const CURSOR_UP: &str = "\x1b[1A";
/// Hide the cursor.
pub const HIDE_CURSOR: &str = "\x1b[?25l";
/// Show the cursor.
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Writer wrapper that keeps track of cursor visibility.
pub struct Terminal<'a, W: Write> {
    out: &'a mut W,
    cursor_hidden: bool,
}

impl<'a, W: Write> Terminal<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self {
            out,
            cursor_hidden: false,
        }
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        self.out.write_all(HIDE_CURSOR.as_bytes())?;
        self.cursor_hidden = true;
        Ok(())
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        self.out.write_all(SHOW_CURSOR.as_bytes())?;
        self.cursor_hidden = false;
        Ok(())
    }

    pub fn is_cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    /// Erase the current line and move up to the previous one.
    pub fn delete_line(&mut self) -> io::Result<()> {
        self.out.write_all(ERASE_LINE.as_bytes())?;
        self.out.write_all(CURSOR_UP.as_bytes())
    }

    /// Erase the current line, leaving the cursor where it is.
    pub fn erase_line(&mut self) -> io::Result<()> {
        self.out.write_all(ERASE_LINE.as_bytes())
    }

    /// Remove the `count` lines just written above the cursor, plus the blank
    /// line the cursor sits on.
    pub fn erase_lines(&mut self, count: usize) -> io::Result<()> {
        for _ in 0..count {
            self.delete_line()?;
        }
        self.erase_line()
    }

    /// Write `line` followed by a newline.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")
    }

    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// The underlying sink, for items that render themselves.
    pub fn sink(&mut self) -> &mut W {
        &mut *self.out
    }

    pub fn get_ref(&self) -> &W {
        &*self.out
    }
}

impl<W: Write> Drop for Terminal<'_, W> {
    fn drop(&mut self) {
        if !self.cursor_hidden {
            return;
        }
        if let Err(e) = self.show_cursor().and_then(|_| self.out.flush()) {
            warn!(error = %e, "failed to restore cursor visibility");
        }
    }
}
