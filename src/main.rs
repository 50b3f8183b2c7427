use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use humansize::{format_size, BINARY};
use std::path::PathBuf;

use dirsweep::app::{App, Mode, RunReport};
use dirsweep::cleaner::Config;
use dirsweep::progress::AnsiConsole;

/// Scan a directory tree for dependency folders and ignore or delete them
#[derive(Parser)]
#[command(name = "dirsweep", version, about)]
struct Cli {
    /// Root directory to scan
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Delete matched folders instead of appending them to .gitignore
    #[arg(long)]
    delete: bool,

    /// Path to a config file overriding the target folder names
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let mode = if cli.delete {
        Mode::Delete
    } else {
        Mode::Manifest
    };

    let app = App::new(cli.root, mode, config)?;
    println!("Sweeping {}", app.root().display());

    let report = app.run_with_console(AnsiConsole::new())?;
    print_summary(&report);

    Ok(())
}

fn print_summary(report: &RunReport) {
    println!("Scan finished: {} target folders found", report.found);
    match report.mode {
        Mode::Manifest => {
            if report.changes == 0 {
                println!("{}", "No new folders to ignore".yellow());
            } else {
                let line = format!("Ignore manifest updated: {} new entries", report.changes);
                println!("{}", line.green());
            }
        }
        Mode::Delete => {
            if report.changes == 0 {
                println!("{}", "Nothing to remove".yellow());
            } else {
                let line = format!(
                    "Removed {} folders ({} freed)",
                    report.changes,
                    format_size(report.stats.bytes(), BINARY)
                );
                println!("{}", line.green());
            }
        }
    }
}
