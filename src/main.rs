//! minipad - a minimal terminal text editor with regex syntax coloring
//!
//! Files are opened by dropping them onto the terminal window.

mod command;
mod config;
mod display;
mod drop;
mod editor;
mod error;
mod find;
mod input;
mod line;
mod logging;
mod surface;
mod syntax;
mod terminal;
mod window;

use std::env;
use std::process;

use config::Config;
use display::Display;
use editor::EditorState;
use error::{EditorError, Result};
use terminal::Terminal;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command line arguments
    let args: Vec<String> = env::args().skip(1).collect();

    // Handle --help and --version
    match args.first().map(String::as_str) {
        None => {}
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some("--version" | "-V") => {
            print_version();
            return Ok(());
        }
        Some(other) => {
            print_usage();
            return Err(EditorError::Message(format!("unexpected argument '{}'", other)));
        }
    }

    let (config, config_error) = Config::load();
    let log_path = logging::init(config.log_file.as_deref())?;
    if let Some(path) = &log_path {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), log = %path.display(), "minipad starting");
    }
    if let Some(e) = &config_error {
        tracing::warn!(error = %e, "config file ignored");
    }

    // Initialize terminal
    let mut terminal = Terminal::new()?;
    let mut display = Display::new();

    // Create editor state
    let mut editor = EditorState::new(&config, terminal.cols(), terminal.rows());
    match config_error {
        Some(e) => editor.set_message(format!("{} (using defaults)", e)),
        None => editor.set_message("Drop a file onto the window to open it. F1 for help."),
    }

    // Run the editor
    let result = editor.run(&mut terminal, &mut display);
    tracing::info!(ok = result.is_ok(), "minipad exiting");
    result
}

fn print_usage() {
    println!("minipad {} - minimal text editor with syntax coloring", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: minipad [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!();
    println!("Open a file by dropping it onto the terminal window.");
    println!();
    println!("Key bindings:");
    println!("  C-f            Show/hide the find bar");
    println!("  Enter, F3      Find next (in the find bar / anywhere)");
    println!("  C-l            Toggle syntax coloring");
    println!("  C-a            Select all");
    println!("  S-arrows       Extend the selection");
    println!("  C-q            Quit");
    println!();
    println!("Press F1 in editor for complete key binding list");
    println!();
    println!("Settings are read from ~/.minipad.toml.");
}

fn print_version() {
    println!("minipad {}", env!("CARGO_PKG_VERSION"));
}
