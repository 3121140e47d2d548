//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Canned command responses are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Help text for the `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Biography for the `about` command.
pub const ABOUT_TEXT: &str = include_str!("../assets/text/about.txt");

/// Skill listing for the `skills` command.
pub const SKILLS_TEXT: &str = include_str!("../assets/text/skills.txt");

/// Project listing for the `projects` command.
pub const PROJECTS_TEXT: &str = include_str!("../assets/text/projects.txt");

/// Contact details for the `contact` command.
pub const CONTACT_TEXT: &str = include_str!("../assets/text/contact.txt");

/// Work history for the `experience` command.
pub const EXPERIENCE_TEXT: &str = include_str!("../assets/text/experience.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown in the terminal window chrome.
pub const APP_NAME: &str = "ankit@portfolio";

// =============================================================================
// External Links
// =============================================================================

/// URL opened by the `github` command.
pub const GITHUB_URL: &str = "https://github.com/ankitdhar07";

/// URL opened by the `linkedin` command.
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/ankit-kumar-dhar/";

/// Allowed domains for external link redirects (security).
/// Links to other domains will be blocked.
pub const ALLOWED_REDIRECT_DOMAINS: &[&str] = &["github.com", "linkedin.com"];

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of terminal output lines to keep in the buffer.
pub const MAX_OUTPUT_LINES: usize = 1000;

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// Lines shown when the terminal first loads.
pub const WELCOME_LINES: &[&str] = &[
    "Welcome to the terminal. Type \"help\" for a list of commands.",
    "Type \"help\" to see available commands.",
    "",
];
