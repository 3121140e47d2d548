//! Command registry: the closed set of named, zero-argument response
//! producers.
//!
//! User input is parsed into the [`Command`] enum, then run through
//! [`execute`], which returns a [`CommandResult`]. Handlers cannot fail;
//! unknown names are carried through as [`Command::Unknown`] and produce
//! an error line.

use crate::config::{
    ABOUT_TEXT, CONTACT_TEXT, EXPERIENCE_TEXT, GITHUB_URL, HELP_TEXT, LINKEDIN_URL, PROJECTS_TEXT,
    SKILLS_TEXT,
};
use crate::models::Line;

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Skills,
    Projects,
    Contact,
    Experience,
    Clear,
    Github,
    Linkedin,
    Unknown(String),
}

impl Command {
    /// All registered command names.
    pub fn names() -> &'static [&'static str] {
        &[
            "about",
            "clear",
            "contact",
            "experience",
            "github",
            "help",
            "linkedin",
            "projects",
            "skills",
        ]
    }

    /// Parse a command from its name.
    ///
    /// Matching is case-insensitive and exact; there are no prefixes or
    /// aliases. Arguments after the name are ignored by every handler, so
    /// the parser never sees them.
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "help" => Self::Help,
            "about" => Self::About,
            "skills" => Self::Skills,
            "projects" => Self::Projects,
            "contact" => Self::Contact,
            "experience" => Self::Experience,
            "clear" => Self::Clear,
            "github" => Self::Github,
            "linkedin" => Self::Linkedin,
            _ => Self::Unknown(name.to_lowercase()),
        }
    }
}

// =============================================================================
// Command Result
// =============================================================================

/// Result of executing a command.
///
/// Besides output lines, a command may request that the screen be cleared
/// or that an external URL be opened. Opening the URL is left to the
/// component layer so the core stays free of browser APIs.
#[derive(Clone, Debug, Default)]
pub struct CommandResult {
    /// Output lines to display
    pub lines: Vec<Line>,
    /// Empty the line buffer before appending `lines`
    pub clear_screen: bool,
    /// External URL to open in a new tab
    pub open_url: Option<&'static str>,
}

impl CommandResult {
    /// Create a result with just output lines.
    pub fn output(lines: Vec<Line>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    /// Create a result that clears the screen.
    pub fn clear() -> Self {
        Self {
            clear_screen: true,
            ..Self::default()
        }
    }

    /// Create a result that opens a URL, with acknowledgment lines.
    pub fn open(url: &'static str, lines: Vec<Line>) -> Self {
        Self {
            lines,
            clear_screen: false,
            open_url: Some(url),
        }
    }
}

// =============================================================================
// Execution
// =============================================================================

/// Execute a parsed command.
pub fn execute(cmd: Command) -> CommandResult {
    match cmd {
        Command::Help => CommandResult::output(text_block(HELP_TEXT)),
        Command::About => CommandResult::output(text_block(ABOUT_TEXT)),
        Command::Skills => CommandResult::output(text_block(SKILLS_TEXT)),
        Command::Projects => CommandResult::output(text_block(PROJECTS_TEXT)),
        Command::Contact => CommandResult::output(text_block(CONTACT_TEXT)),
        Command::Experience => CommandResult::output(text_block(EXPERIENCE_TEXT)),
        Command::Clear => CommandResult::clear(),
        Command::Github => CommandResult::open(
            GITHUB_URL,
            vec![Line::output("Opening GitHub profile..."), Line::empty()],
        ),
        Command::Linkedin => CommandResult::open(
            LINKEDIN_URL,
            vec![Line::output("Opening LinkedIn profile..."), Line::empty()],
        ),
        Command::Unknown(name) => CommandResult::output(vec![
            Line::error(format!(
                "Command not found: {}. Type \"help\" for available commands.",
                name
            )),
            Line::empty(),
        ]),
    }
}

/// Turn a compile-time text asset into output lines.
fn text_block(text: &str) -> Vec<Line> {
    text.lines().map(Line::output).collect()
}

// =============================================================================
// Tests
// =============================================================================
