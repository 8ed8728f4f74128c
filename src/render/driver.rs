//! Crossterm terminal output backend.
//!
//! The `Driver` wraps a buffered stdout writer and paints rendered strips to
//! the terminal. Color strings resolve through [`crate::style::parse_color`];
//! a color that fails to parse paints as the terminal default rather than
//! failing the frame.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::trace;

use crate::render::strip::{CellStyle, Strip};
use crate::style::parse_color;

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Terminal output backend using crossterm.
///
/// Wraps a `BufWriter<Stdout>` for batched writes. The driver does NOT
/// automatically enter alternate screen on creation — call
/// `enter_alt_screen` explicitly.
pub struct Driver {
    writer: BufWriter<Stdout>,
}

impl Driver {
    /// Create a new driver wrapping stdout.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(io::stdout()),
        })
    }

    /// Enter alternate screen and enable raw mode.
    pub fn enter_alt_screen(&mut self) -> io::Result<()> {
        execute!(self.writer, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        Ok(())
    }

    /// Leave alternate screen and disable raw mode.
    pub fn leave_alt_screen(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.writer, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Clear the whole screen.
    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.writer, Clear(ClearType::All))
    }

    /// Paint a batch of strips to the terminal.
    ///
    /// Strips are painted in order, so later strips overwrite earlier cells
    /// at the same position. Uses `queue!` for batching; call `flush()`
    /// afterward to send to the terminal.
    pub fn paint(&mut self, strips: &[Strip]) -> io::Result<()> {
        trace!(strips = strips.len(), "painting strip batch");
        for strip in strips {
            if strip.y < 0 || strip.cells.is_empty() {
                continue;
            }
            for (i, cell) in strip.cells.iter().enumerate() {
                let x = strip.x_offset + i as i32;
                if x < 0 {
                    continue;
                }
                queue!(self.writer, cursor::MoveTo(x as u16, strip.y as u16))?;
                self.apply_cell_style(&cell.style)?;
                queue!(self.writer, Print(cell.ch))?;
                queue!(self.writer, ResetColor)?;
                queue!(self.writer, SetAttribute(Attribute::Reset))?;
            }
        }
        Ok(())
    }

    /// Flush the internal write buffer to the terminal.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Get the terminal size (columns, rows) via crossterm.
    pub fn terminal_size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Hide the cursor.
    pub fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Hide)
    }

    /// Show the cursor.
    pub fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Show)
    }

    /// Queue crossterm style commands for a given `CellStyle`.
    ///
    /// Unknown colors are skipped, leaving the terminal default in place.
    fn apply_cell_style(&mut self, style: &CellStyle) -> io::Result<()> {
        if let Some(ref fg) = style.fg {
            if let Ok(color) = parse_color(fg) {
                queue!(self.writer, SetForegroundColor(color))?;
            }
        }
        if let Some(ref bg) = style.bg {
            if let Ok(color) = parse_color(bg) {
                queue!(self.writer, SetBackgroundColor(color))?;
            }
        }
        if style.bold {
            queue!(self.writer, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.writer, SetAttribute(Attribute::Dim))?;
        }
        if style.strikethrough {
            queue!(self.writer, SetAttribute(Attribute::CrossedOut))?;
        }
        Ok(())
    }
}
