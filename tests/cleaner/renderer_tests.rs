// Tests for the in-place two-line renderer, via a capturing fake console

use crate::support::FakeConsole;
use dirsweep::progress::{Renderer, Snapshot};
use std::time::Duration;

fn snapshot(message: &str, done: usize, total: usize) -> Snapshot {
    Snapshot {
        message: message.to_string(),
        done,
        total,
        elapsed: Duration::from_secs(10),
        finished: false,
    }
}

#[test]
fn test_draw_emits_a_two_line_block() {
    let console = FakeConsole::new(200);
    let mut renderer = Renderer::new(console.clone());

    renderer.reserve();
    renderer.draw(&snapshot("a/node_modules/", 1, 4));

    let ops = console.ops();
    // Reserve prints the block placeholder.
    assert_eq!(&ops[..3], &["newline", "newline", "flush"]);
    // Each draw repositions to the block start, then clears and rewrites
    // both lines.
    assert_eq!(ops[3], "up:2");
    assert_eq!(ops[4], "clear");
    assert!(ops[5].starts_with("write:"));
    assert_eq!(ops[6], "newline");
    assert_eq!(ops[7], "clear");
    assert!(ops[8].starts_with("write:"));
    assert_eq!(ops[9], "newline");
    assert_eq!(ops[10], "flush");
}

#[test]
fn test_shorter_redraw_is_padded_to_previous_width() {
    let console = FakeConsole::new(200);
    let mut renderer = Renderer::new(console.clone());

    renderer.draw(&snapshot("a/very/long/path/to/node_modules/", 1, 4));
    renderer.draw(&snapshot("b/venv/", 2, 4));

    let writes = console.writes();
    let first_status = &writes[0];
    let second_status = &writes[2];
    assert_eq!(first_status.chars().count(), second_status.chars().count());
    assert!(second_status.ends_with(' '));
    assert!(second_status.contains("b/venv/"));
}

#[test]
fn test_lines_are_truncated_to_terminal_width() {
    let console = FakeConsole::new(30);
    let mut renderer = Renderer::new(console.clone());

    renderer.draw(&snapshot(&"x".repeat(100), 1, 4));

    let writes = console.writes();
    assert!(writes[0].contains("..."));
    assert!(writes[0].chars().count() < 30);
}

#[test]
fn test_spinner_cycles_between_draws() {
    let console = FakeConsole::new(200);
    let mut renderer = Renderer::new(console.clone());

    for i in 0..4 {
        renderer.draw(&snapshot("entry/", i, 4));
    }

    let writes = console.writes();
    let glyphs: Vec<char> = writes
        .iter()
        .step_by(2)
        .map(|line| line.chars().next().unwrap())
        .collect();
    assert_eq!(glyphs, vec!['|', '/', '-', '\\']);
}

#[test]
fn test_finished_snapshot_renders_ok_glyph() {
    let console = FakeConsole::new(200);
    let mut renderer = Renderer::new(console.clone());

    let mut snap = snapshot("manifest update complete", 4, 4);
    snap.finished = true;
    renderer.draw(&snap);

    let writes = console.writes();
    assert!(writes[0].starts_with("OK "));
}

#[test]
fn test_timing_fields_use_compact_format() {
    let console = FakeConsole::new(200);
    let mut renderer = Renderer::new(console.clone());

    // Ten seconds elapsed, half done: ten seconds remaining.
    renderer.draw(&snapshot("entry/", 5, 10));

    let progress_line = &console.writes()[1];
    assert!(progress_line.contains("elapsed 10s"));
    assert!(progress_line.contains("remaining 10s"));
    assert!(progress_line.contains("50.0%"));
}

#[test]
fn test_newlines_in_labels_do_not_break_the_block() {
    let console = FakeConsole::new(200);
    let mut renderer = Renderer::new(console.clone());

    renderer.draw(&snapshot("weird\nname/", 1, 2));

    let status_line = &console.writes()[0];
    assert!(!status_line.contains('\n'));
    assert!(status_line.contains("weird name/"));
}
