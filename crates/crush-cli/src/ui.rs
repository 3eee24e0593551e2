//! Terminal status messages.
//!
//! Thin stderr helpers colored with `owo-colors`, which itself respects
//! `NO_COLOR` and terminal capabilities.

use owo_colors::OwoColorize;

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

/// Initialize color support based on environment. Should be called early in
/// the application lifecycle.
pub fn init_colors() {
    let _ = crate::logger::should_use_colors();
}
