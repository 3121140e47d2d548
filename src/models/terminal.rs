//! Terminal line types for output rendering.

use std::sync::atomic::{AtomicUsize, Ordering};

/// What kind of content a terminal line carries.
///
/// The kind determines styling in the output view: commands echo the
/// prompt, errors render red, output renders plain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Raw user input (reserved for echoing input without a prompt)
    Input,
    /// Plain text output
    Output,
    /// Error message (red)
    Error,
    /// Echoed command with prompt (`$ help`)
    Command,
}

/// A single line displayed in the terminal, with a unique ID.
///
/// Lines are immutable once created; the buffer they live in is
/// append-only except for an explicit clear.
#[derive(Clone, Debug)]
pub struct Line {
    /// Unique ID for efficient keying in For loops
    pub id: usize,
    pub kind: LineKind,
    pub text: String,
}

// Global counter for generating unique IDs
static LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl Line {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            id: LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            kind,
            text: text.into(),
        }
    }

    #[allow(dead_code)]
    pub fn input(s: impl Into<String>) -> Self {
        Self::new(LineKind::Input, s)
    }

    pub fn output(s: impl Into<String>) -> Self {
        Self::new(LineKind::Output, s)
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(LineKind::Error, s)
    }

    pub fn command(s: impl Into<String>) -> Self {
        Self::new(LineKind::Command, s)
    }

    /// Create a blank output line.
    pub fn empty() -> Self {
        Self::new(LineKind::Output, "")
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        // Only compare content, not ID
        self.kind == other.kind && self.text == other.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_constructors() {
        assert_eq!(Line::output("hello").kind, LineKind::Output);
        assert_eq!(Line::output("hello").text, "hello");
        assert_eq!(Line::error("oops").kind, LineKind::Error);
        assert_eq!(Line::command("$ ls").kind, LineKind::Command);
        assert_eq!(Line::input("raw").kind, LineKind::Input);
    }

    #[test]
    fn test_empty_line() {
        let line = Line::empty();
        assert_eq!(line.kind, LineKind::Output);
        assert!(line.text.is_empty());
    }

    #[test]
    fn test_unique_ids() {
        let line1 = Line::output("first");
        let line2 = Line::output("second");
        let line3 = Line::output("first"); // Same content as line1

        assert_ne!(line1.id, line2.id);
        assert_ne!(line1.id, line3.id);
        assert_ne!(line2.id, line3.id);

        // But content equality works
        assert_eq!(line1, line3);
        assert_ne!(line1, line2);
    }
}
