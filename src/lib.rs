// Library module for dirsweep
// Re-exports modules for use in integration tests and external crates

pub mod app;
pub mod cleaner;
pub mod progress;
