//! Admin TUI Library
//!
//! Terminal admin console for a headless CMS backend. Exposes all modules so
//! integration tests can drive the table engine and session guard directly.

use std::sync::atomic::{AtomicBool, Ordering};

pub mod api;
pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod resources;
pub mod services;
pub mod session;
pub mod table;
pub mod ui;
pub mod utils;

// Global flag for debug mode
pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Append a line to the debug log file when --debug is active
pub fn log_debug(msg: &str) {
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}
