//! Feedback rendering strategies.
//!
//! ARCHITECTURE
//! ============
//! The two historical login entry points rendered results differently: one as
//! a blocking alert, the other as an inline colored status line. Both now run
//! the same flow and differ only in which [`Feedback`] implementation is
//! injected.

use std::io::{self, IsTerminal, Write};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Injectable rendering strategy for flow outcomes.
pub trait Feedback {
    fn registration_failed(&mut self);
    fn login_succeeded(&mut self);
    fn login_failed(&mut self);
}

/// Alert-style feedback: one plain line per failure, nothing on success
/// (the alert variant navigated away without a message).
#[derive(Debug)]
pub struct AlertFeedback<W: Write> {
    out: W,
}

impl AlertFeedback<io::Stderr> {
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> AlertFeedback<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Feedback for AlertFeedback<W> {
    fn registration_failed(&mut self) {
        let _ = writeln!(self.out, "Registration failed!");
    }

    fn login_succeeded(&mut self) {}

    fn login_failed(&mut self) {
        let _ = writeln!(self.out, "Login failed!");
    }
}

/// Inline status-line feedback: green on success, red on failure.
#[derive(Debug)]
pub struct StatusLineFeedback<W: Write> {
    out: W,
    color: bool,
}

impl StatusLineFeedback<io::Stdout> {
    /// Stdout-backed status line; color only when attached to a terminal.
    #[must_use]
    pub fn stdout() -> Self {
        let color = io::stdout().is_terminal();
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> StatusLineFeedback<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    fn status(&mut self, color: &str, message: &str) {
        if self.color {
            let _ = writeln!(self.out, "{color}{message}{RESET}");
        } else {
            let _ = writeln!(self.out, "{message}");
        }
    }
}

impl<W: Write> Feedback for StatusLineFeedback<W> {
    fn registration_failed(&mut self) {
        self.status(RED, "Registration failed!");
    }

    fn login_succeeded(&mut self) {
        self.status(GREEN, "Login successful!");
    }

    fn login_failed(&mut self) {
        self.status(RED, "Login failed. Check your credentials.");
    }
}

#[cfg(test)]
#[path = "feedback_test.rs"]
mod tests;
