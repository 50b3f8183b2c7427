// Console abstraction module
// Keeps the rendering logic testable without a real terminal

use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Stdout, Write};

use super::format::FALLBACK_WIDTH;

/// Minimal terminal surface used by the renderer
///
/// Implementations are best-effort: a failed write to the display is
/// cosmetic and must not abort the run.
pub trait Console {
    /// Current width in columns, or a fixed fallback when undetectable
    fn width(&self) -> u16;
    /// Move the cursor up by the given number of lines
    fn cursor_up(&mut self, lines: u16);
    /// Clear the current line and return the cursor to column zero
    fn clear_line(&mut self);
    /// Write text at the cursor position
    fn write(&mut self, text: &str);
    /// Advance to the next line
    fn newline(&mut self);
    /// Flush any queued output
    fn flush(&mut self);
}

/// ANSI console over stdout
pub struct AnsiConsole {
    out: Stdout,
}

impl AnsiConsole {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for AnsiConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for AnsiConsole {
    fn width(&self) -> u16 {
        terminal::size().map(|(w, _)| w).unwrap_or(FALLBACK_WIDTH)
    }

    fn cursor_up(&mut self, lines: u16) {
        let _ = queue!(self.out, MoveUp(lines));
    }

    fn clear_line(&mut self) {
        let _ = queue!(self.out, Clear(ClearType::CurrentLine), MoveToColumn(0));
    }

    fn write(&mut self, text: &str) {
        let _ = queue!(self.out, Print(text));
    }

    fn newline(&mut self) {
        let _ = queue!(self.out, Print("\n"));
    }

    fn flush(&mut self) {
        let _ = self.out.flush();
    }
}
