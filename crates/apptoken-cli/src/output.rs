//! Terminal output formatting utilities.
//!
//! stdout carries workflow commands and essential results; everything
//! informational goes through here so `--quiet` can silence it.

use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Set quiet mode globally. Call once at startup.
pub fn set_quiet(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

/// Print a success message (suppressed in quiet mode).
pub fn success(msg: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "✓".green(), msg);
    }
}

/// Print an error message (always prints to stderr).
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning message (always prints to stderr).
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an info message (suppressed in quiet mode).
pub fn info(msg: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "→".blue(), msg);
    }
}

/// Print essential machine-readable output (always prints).
///
/// Use for results that should be available for piping, like ids.
pub fn essential(msg: &str) {
    println!("{msg}");
}

/// Tell the Actions runner to redact `secret` from all later log output.
///
/// Always printed, quiet or not.
pub fn mask(secret: &str) {
    println!("{}", mask_directive(secret));
}

/// The `::add-mask::` workflow command for `secret`.
#[must_use]
pub fn mask_directive(secret: &str) -> String {
    format!("::add-mask::{secret}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_directive() {
        assert_eq!(mask_directive("ghs_abc"), "::add-mask::ghs_abc");
    }
}
