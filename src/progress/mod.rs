//! Progress module - live two-line terminal display
//!
//! A background thread redraws a spinner/status line and a bar/timing line
//! in place on a fixed tick, reading atomic snapshots of the shared run
//! state. The renderer is the sole stdout writer while it is running.

pub mod console;
pub mod format;
pub mod renderer;

pub use console::{AnsiConsole, Console};
pub use renderer::Renderer;

use crossbeam_channel::{bounded, select, tick, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Redraw period for the render thread
pub const TICK_PERIOD: Duration = Duration::from_millis(50);

/// Mutable run state shared between the worker and the render thread
///
/// The worker updates all fields of one item as a single step under the
/// lock, so the renderer always observes a consistent count/label pair.
pub struct ProgressState {
    message: String,
    done: usize,
    total: usize,
    started_at: Instant,
    finished: bool,
}

/// Immutable view of the run state taken once per tick
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub message: String,
    pub done: usize,
    pub total: usize,
    pub elapsed: Duration,
    pub finished: bool,
}

impl ProgressState {
    pub fn new(total: usize) -> Self {
        Self {
            message: "waiting".to_string(),
            done: 0,
            total,
            started_at: Instant::now(),
            finished: false,
        }
    }

    /// Record one completed item and its label, atomically under the lock
    pub fn advance(&mut self, message: String) {
        self.done += 1;
        self.message = message;
    }

    /// Mark the run finished with a final status message
    pub fn complete(&mut self, message: String) {
        self.message = message;
        self.finished = true;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            message: self.message.clone(),
            done: self.done,
            total: self.total,
            elapsed: self.started_at.elapsed(),
            finished: self.finished,
        }
    }
}

/// Shared handle to the run state
pub type SharedProgress = Arc<Mutex<ProgressState>>;

/// Running render thread, stopped and joined via [`ProgressHandle::stop`]
pub struct ProgressHandle {
    stop_tx: Sender<()>,
    thread: JoinHandle<()>,
}

impl ProgressHandle {
    /// Signal the render thread to draw one final frame and exit, then join
    pub fn stop(self) {
        let _ = self.stop_tx.send(());
        let _ = self.thread.join();
    }
}

/// Spawn the render thread over the given console
///
/// Reserves the two-line display block, then redraws it on every tick until
/// stopped. The final frame is always drawn on stop so the last state is
/// visible after the thread exits.
pub fn spawn<C>(state: SharedProgress, console: C) -> ProgressHandle
where
    C: Console + Send + 'static,
{
    let (stop_tx, stop_rx) = bounded::<()>(1);
    let ticker = tick(TICK_PERIOD);

    let thread = thread::spawn(move || {
        let mut renderer = Renderer::new(console);
        renderer.reserve();
        loop {
            select! {
                recv(ticker) -> _ => {
                    let snap = state.lock().unwrap().snapshot();
                    renderer.draw(&snap);
                }
                recv(stop_rx) -> _ => {
                    let snap = state.lock().unwrap().snapshot();
                    renderer.draw(&snap);
                    break;
                }
            }
        }
    });

    ProgressHandle { stop_tx, thread }
}
