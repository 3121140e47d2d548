//! Terminal session state: line buffer, command history, and dispatch.
//!
//! [`Session`] owns everything the terminal shows and remembers. It is
//! plain data with no browser dependencies, so the whole dispatch and
//! history-recall behavior is testable on the host; the component layer
//! wraps it in a signal and performs the side effects it reports back
//! (opening external links).

use crate::config::{MAX_COMMAND_HISTORY, MAX_OUTPUT_LINES, WELCOME_LINES};
use crate::core::commands::{Command, execute};
use crate::models::Line;
use crate::utils::RingBuffer;

/// State of one terminal session.
///
/// Lives for the duration of the page; nothing is persisted.
#[derive(Clone, Debug)]
pub struct Session {
    /// Displayed lines, oldest first. Append-only except for `clear`.
    lines: RingBuffer<Line>,
    /// Raw submitted inputs, oldest first.
    history: Vec<String>,
    /// Position in `history` for up/down recall.
    ///
    /// Always within `[0, history.len()]`; `history.len()` means no entry
    /// is selected (fresh input).
    cursor: usize,
}

impl Session {
    /// Create a session seeded with the welcome message.
    pub fn new() -> Self {
        let mut lines = RingBuffer::new(MAX_OUTPUT_LINES);
        lines.extend(WELCOME_LINES.iter().copied().map(Line::output));

        Self {
            lines,
            history: Vec::new(),
            cursor: 0,
        }
    }

    /// Lines to display, oldest first.
    pub fn lines(&self) -> Vec<Line> {
        self.lines.to_vec()
    }

    #[cfg(test)]
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Submit one line of input.
    ///
    /// Empty or whitespace-only input is ignored entirely. Otherwise the
    /// trimmed input is recorded in history, echoed as a command line, and
    /// dispatched. Returns a URL the caller should open in a new tab, if
    /// the command requested one.
    pub fn submit(&mut self, raw: &str) -> Option<&'static str> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.history.push(trimmed.to_string());
        if self.history.len() > MAX_COMMAND_HISTORY {
            self.history.remove(0);
        }
        self.cursor = self.history.len();

        self.lines.push(Line::command(format!("$ {}", trimmed)));

        // First token names the command; handlers take no arguments, so
        // the rest of the input is ignored.
        let lowered = trimmed.to_lowercase();
        let name = lowered.split_whitespace().next().unwrap_or_default();

        let result = execute(Command::parse(name));
        if result.clear_screen {
            self.lines.clear();
        }
        self.lines.extend(result.lines);

        result.open_url
    }

    /// Recall the previous history entry (ArrowUp).
    ///
    /// Returns `None` at the oldest entry or when there is no history;
    /// the caller keeps the current input in that case. Never wraps.
    pub fn recall_previous(&mut self) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.history[self.cursor].clone())
    }

    /// Recall the next history entry (ArrowDown).
    ///
    /// Walking past the newest entry deselects history and returns an
    /// empty string so the caller clears the input. Returns `None` only
    /// when there is no history at all.
    pub fn recall_next(&mut self) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }
        if self.cursor + 1 < self.history.len() {
            self.cursor += 1;
            Some(self.history[self.cursor].clone())
        } else {
            self.cursor = self.history.len();
            Some(String::new())
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineKind;

    fn command_lines(session: &Session) -> Vec<String> {
        session
            .lines()
            .into_iter()
            .filter(|l| l.kind == LineKind::Command)
            .map(|l| l.text)
            .collect()
    }

    #[test]
    fn test_starts_with_welcome_message() {
        let session = Session::new();
        let lines = session.lines();
        assert_eq!(lines.len(), WELCOME_LINES.len());
        assert!(lines[0].text.contains("Welcome to the terminal"));
        assert!(lines.iter().all(|l| l.kind == LineKind::Output));
    }

    #[test]
    fn test_submit_appends_one_command_line_and_one_history_entry() {
        let mut session = Session::new();
        session.submit("help");

        assert_eq!(command_lines(&session), vec!["$ help"]);
        assert_eq!(session.history, vec!["help"]);
    }

    #[test]
    fn test_submit_trims_input() {
        let mut session = Session::new();
        session.submit("   help   ");

        assert_eq!(command_lines(&session), vec!["$ help"]);
        assert_eq!(session.history, vec!["help"]);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = Session::new();
        let before = session.line_count();

        assert_eq!(session.submit(""), None);
        assert_eq!(session.submit("   \t  "), None);

        assert_eq!(session.line_count(), before);
        assert!(session.history.is_empty());
    }

    #[test]
    fn test_help_lists_available_commands() {
        let mut session = Session::new();
        session.submit("help");

        assert!(
            session
                .lines()
                .iter()
                .any(|l| l.text.contains("Available commands:"))
        );
    }

    #[test]
    fn test_clear_empties_the_buffer() {
        let mut session = Session::new();
        session.submit("about");
        session.submit("clear");

        assert_eq!(session.line_count(), 0);
        // History survives the clear
        assert_eq!(session.history, vec!["about", "clear"]);
    }

    #[test]
    fn test_unknown_command() {
        let mut session = Session::new();
        session.submit("bogus");

        let lines = session.lines();
        let error_pos = lines
            .iter()
            .position(|l| l.kind == LineKind::Error)
            .expect("error line present");
        assert!(lines[error_pos].text.contains("Command not found: bogus"));

        // Followed by exactly one blank output line
        let trailing = &lines[error_pos + 1];
        assert_eq!(trailing.kind, LineKind::Output);
        assert!(trailing.text.is_empty());
        assert_eq!(lines.len(), error_pos + 2);
    }

    #[test]
    fn test_arguments_after_command_are_ignored() {
        let mut session = Session::new();
        let result = session.submit("help extra args");

        assert_eq!(result, None);
        assert!(
            session
                .lines()
                .iter()
                .any(|l| l.text.contains("Available commands:"))
        );
        // The full input is still echoed and recorded
        assert_eq!(command_lines(&session), vec!["$ help extra args"]);
        assert_eq!(session.history, vec!["help extra args"]);
    }

    #[test]
    fn test_case_insensitive_dispatch() {
        let mut upper = Session::new();
        upper.submit("HELP");
        let mut lower = Session::new();
        lower.submit("help");

        let output = |s: &Session| {
            s.lines()
                .into_iter()
                .filter(|l| l.kind == LineKind::Output)
                .map(|l| l.text)
                .collect::<Vec<_>>()
        };
        assert_eq!(output(&upper), output(&lower));
    }

    #[test]
    fn test_link_commands_return_url() {
        let mut session = Session::new();
        assert_eq!(
            session.submit("github"),
            Some(crate::config::GITHUB_URL)
        );
        assert_eq!(
            session.submit("linkedin"),
            Some(crate::config::LINKEDIN_URL)
        );
        assert!(
            session
                .lines()
                .iter()
                .any(|l| l.text == "Opening GitHub profile...")
        );
    }

    #[test]
    fn test_recall_walks_history_in_both_directions() {
        let mut session = Session::new();
        session.submit("help");
        session.submit("about");
        session.submit("skills");

        // Up recalls in reverse submission order
        assert_eq!(session.recall_previous(), Some("skills".to_string()));
        assert_eq!(session.recall_previous(), Some("about".to_string()));
        assert_eq!(session.recall_previous(), Some("help".to_string()));
        // Oldest entry: no wrap
        assert_eq!(session.recall_previous(), None);

        // Down walks forward again
        assert_eq!(session.recall_next(), Some("about".to_string()));
        assert_eq!(session.recall_next(), Some("skills".to_string()));
        // Past the newest: empty string clears the input
        assert_eq!(session.recall_next(), Some(String::new()));
    }

    #[test]
    fn test_recall_on_empty_history() {
        let mut session = Session::new();
        assert_eq!(session.recall_previous(), None);
        assert_eq!(session.recall_next(), None);
    }

    #[test]
    fn test_submit_resets_cursor() {
        let mut session = Session::new();
        session.submit("help");
        session.submit("about");

        assert_eq!(session.recall_previous(), Some("about".to_string()));
        assert_eq!(session.recall_previous(), Some("help".to_string()));

        session.submit("skills");
        // Cursor is back past the end; Up starts from the newest entry
        assert_eq!(session.recall_previous(), Some("skills".to_string()));
    }

    #[test]
    fn test_duplicate_submissions_are_kept() {
        let mut session = Session::new();
        session.submit("help");
        session.submit("help");

        assert_eq!(session.history, vec!["help", "help"]);
    }

    #[test]
    fn test_history_is_capped() {
        let mut session = Session::new();
        for i in 0..(MAX_COMMAND_HISTORY + 10) {
            session.submit(&format!("echo{}", i));
        }

        assert_eq!(session.history.len(), MAX_COMMAND_HISTORY);
        assert_eq!(session.history[0], "echo10");
        assert_eq!(session.recall_previous().as_deref(), Some("echo109"));
    }
}
