// Formatting helpers for the progress display
// Pure functions so the rendering math is testable without a terminal

/// Terminal width assumed when the real width cannot be detected
pub const FALLBACK_WIDTH: u16 = 120;

/// Narrowest bar the display will draw, regardless of terminal width
const MIN_BAR_WIDTH: usize = 10;
/// Widest bar the display will draw on very wide terminals
const MAX_BAR_WIDTH: usize = 100;
/// Columns reserved around the bar for brackets and separators
const BAR_MARGIN: usize = 10;

/// Format whole seconds as `HHhMMmSSs`
///
/// The hour field is omitted when zero, and the minute field is omitted when
/// hour and minute are both zero. Each field is zero-padded to two digits:
/// `125 -> "02m05s"`, `3725 -> "01h02m05s"`, `9 -> "09s"`.
pub fn format_duration(secs: u64) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{:02}h{:02}m{:02}s", h, m, s)
    } else if m > 0 {
        format!("{:02}m{:02}s", m, s)
    } else {
        format!("{:02}s", s)
    }
}

/// Completion percentage in [0, 100]
///
/// A zero total is treated as one so the percentage stays well-defined for
/// an empty scan.
pub fn percent(done: usize, total: usize) -> f64 {
    let ratio = done as f64 / total.max(1) as f64;
    (ratio * 100.0).clamp(0.0, 100.0)
}

/// Estimated seconds remaining, by linear extrapolation
///
/// `elapsed * remaining / done`; zero while nothing has completed yet, so
/// there is no division by zero. Noisy early in a run, by construction.
pub fn eta_secs(elapsed_secs: f64, done: usize, total: usize) -> f64 {
    if done == 0 {
        return 0.0;
    }
    let remaining = total.saturating_sub(done);
    elapsed_secs * remaining as f64 / done as f64
}

/// Render the progress bar with its percentage suffix
///
/// The bar width adapts to the terminal width within fixed floor and cap
/// bounds; fill length is proportional to the percentage and monotonic in
/// it.
pub fn render_bar(pct: f64, term_width: u16) -> String {
    let pct = pct.clamp(0.0, 100.0);
    let suffix = format!(" {:5.1}%", pct);

    let available = (term_width as usize).saturating_sub(suffix.len() + BAR_MARGIN);
    let bar_len = available.clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH);

    let filled = ((pct / 100.0 * bar_len as f64).round() as usize).min(bar_len);
    let empty = bar_len - filled;

    format!("[{}{}]{}", "#".repeat(filled), "-".repeat(empty), suffix)
}

/// Truncate a line to the terminal width, marking the cut with an ellipsis
pub fn truncate_line(text: &str, width: u16) -> String {
    let width = width as usize;
    if width == 0 || text.chars().count() < width {
        return text.to_string();
    }
    let cut = width.saturating_sub(4).max(1);
    let mut out: String = text.chars().take(cut).collect();
    out.push_str("...");
    out
}
