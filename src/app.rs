// Orchestrator module
// Sequences scanning, per-target actions and the progress display

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::cleaner::{delete_tree, manifest_entry, Config, Manifest, Scanner, Stats, SweepError};
use crate::progress::{self, Console, ProgressState, SharedProgress};

/// Action applied to each target hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Append targets to the root's ignore manifest
    Manifest,
    /// Recursively delete targets
    Delete,
}

/// Outcome of one sweep run
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub mode: Mode,
    /// Targets found by the scan
    pub found: usize,
    /// Manifest entries written, or targets actually removed
    pub changes: usize,
    /// Deletion accounting; empty in manifest mode
    pub stats: Stats,
}

/// One validated scan-and-act run
///
/// The run moves through scanning, acting and done. Scanning materializes
/// the full hit list before any action; acting dispatches each hit to the
/// selected strategy and advances the shared progress state in one locked
/// step per item, while the render thread is the sole stdout writer.
pub struct App {
    root: PathBuf,
    mode: Mode,
    config: Config,
}

impl App {
    /// Validate the root and build a run
    ///
    /// A missing or non-directory root is fatal before any work is done.
    pub fn new(root: PathBuf, mode: Mode, config: Config) -> Result<Self, SweepError> {
        if !root.is_dir() {
            return Err(SweepError::InvalidRoot { path: root });
        }
        Ok(Self { root, mode, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Run the sweep, rendering progress on the given console
    ///
    /// The render thread is stopped and joined on every exit path before
    /// this returns, including a fatal manifest failure mid-run.
    pub fn run_with_console<C>(&self, console: C) -> Result<RunReport, SweepError>
    where
        C: Console + Send + 'static,
    {
        let scanner = Scanner::new(self.config.matcher());
        let hits = scanner.scan(&self.root);

        let state: SharedProgress = Arc::new(Mutex::new(ProgressState::new(hits.len())));
        let handle = progress::spawn(Arc::clone(&state), console);

        let outcome = self.act(&hits, &state);

        {
            let mut st = state.lock().unwrap();
            let message = match &outcome {
                Ok((changes, _)) => self.final_message(*changes),
                Err(_) => "aborted".to_string(),
            };
            st.complete(message);
        }
        handle.stop();

        let (changes, stats) = outcome?;
        Ok(RunReport {
            mode: self.mode,
            found: hits.len(),
            changes,
            stats,
        })
    }

    fn act(&self, hits: &[PathBuf], state: &SharedProgress) -> Result<(usize, Stats), SweepError> {
        let mut changes = 0;
        let mut stats = Stats::new();

        match self.mode {
            Mode::Manifest => {
                let mut manifest = Manifest::open(&self.root)?;
                for hit in hits {
                    let entry = manifest_entry(&self.root, hit);
                    if manifest.append(&entry)? {
                        changes += 1;
                    }
                    state.lock().unwrap().advance(entry);
                }
            }
            Mode::Delete => {
                for hit in hits {
                    let entry = manifest_entry(&self.root, hit);
                    if hit.exists() {
                        stats.merge(delete_tree(hit));
                        changes += 1;
                    }
                    state.lock().unwrap().advance(entry);
                }
            }
        }

        Ok((changes, stats))
    }

    fn final_message(&self, changes: usize) -> String {
        match (self.mode, changes) {
            (Mode::Manifest, 0) => "no new entries".to_string(),
            (Mode::Manifest, _) => "manifest update complete".to_string(),
            (Mode::Delete, 0) => "nothing removed".to_string(),
            (Mode::Delete, _) => "removal complete".to_string(),
        }
    }
}
