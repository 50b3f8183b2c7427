// In-place two-line renderer
// Status line (spinner + last item) above a bar/timing line

use super::console::Console;
use super::format::{eta_secs, format_duration, percent, render_bar, truncate_line};
use super::Snapshot;

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Stateful renderer for the two-line progress block
///
/// Each draw repositions the cursor to the start of the block, clears both
/// lines and rewrites them padded to the widest content rendered so far on
/// that line, so a shorter redraw never leaves residue from a longer one.
/// The renderer owns the spinner phase and the width high-water marks; the
/// shared run state never sees them.
pub struct Renderer<C: Console> {
    console: C,
    spinner: usize,
    max_widths: [usize; 2],
}

impl<C: Console> Renderer<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            spinner: 0,
            max_widths: [0, 0],
        }
    }

    /// Print the two blank lines the display block will overwrite
    pub fn reserve(&mut self) {
        self.console.newline();
        self.console.newline();
        self.console.flush();
    }

    /// Redraw the block from a state snapshot
    pub fn draw(&mut self, snap: &Snapshot) {
        let width = self.console.width();

        let glyph = if snap.finished {
            "OK".to_string()
        } else {
            let frame = SPINNER_FRAMES[self.spinner % SPINNER_FRAMES.len()];
            self.spinner = self.spinner.wrapping_add(1);
            frame.to_string()
        };

        let label = snap.message.replace('\n', " ");
        let status_raw = format!("{} sweeping | last: {}", glyph, label);

        let pct = percent(snap.done, snap.total);
        let elapsed_secs = snap.elapsed.as_secs_f64();
        let eta = eta_secs(elapsed_secs, snap.done, snap.total);
        let progress_raw = format!(
            "{} | elapsed {} | remaining {}",
            render_bar(pct, width),
            format_duration(elapsed_secs.round() as u64),
            format_duration(eta.round() as u64),
        );

        let status = self.pad(0, truncate_line(&status_raw, width));
        let progress = self.pad(1, truncate_line(&progress_raw, width));

        self.console.cursor_up(2);
        self.console.clear_line();
        self.console.write(&status);
        self.console.newline();
        self.console.clear_line();
        self.console.write(&progress);
        self.console.newline();
        self.console.flush();
    }

    /// Pad a line to its width high-water mark, updating the mark
    fn pad(&mut self, line: usize, text: String) -> String {
        let len = text.chars().count();
        if len > self.max_widths[line] {
            self.max_widths[line] = len;
        }
        format!("{:<width$}", text, width = self.max_widths[line])
    }
}
