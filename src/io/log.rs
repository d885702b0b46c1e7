//! Diagnostics on stderr, gated by verbosity.

use std::fmt::Display;

use xlate::types::Verbosity;

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print a warning (suppressed in quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Print an error (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}
