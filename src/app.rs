//! Root application module.
//!
//! Contains the main App component, AppContext definition, TerminalState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::terminal::Terminal;
use crate::core::Session;
use crate::models::Line;
use crate::utils::dom;

// ============================================================================
// TerminalState
// ============================================================================

/// Terminal state managed with Leptos signals.
///
/// Wraps the pure [`Session`] in a signal so the output view re-renders on
/// every mutation, and performs the browser side effects the session
/// reports back.
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal, which
/// is cheap to copy (a pointer to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct TerminalState {
    session: RwSignal<Session>,
}

impl TerminalState {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::new()),
        }
    }

    /// Current output lines, oldest first.
    pub fn lines(&self) -> Vec<Line> {
        self.session.with(|s| s.lines())
    }

    /// Track the session signal without reading it (for effects).
    pub fn track(&self) {
        self.session.track();
    }

    /// Submit one line of input, opening an external link if the command
    /// asked for one.
    pub fn submit(&self, input: &str) {
        let mut url = None;
        self.session.update(|s| url = s.submit(input));
        if let Some(url) = url {
            dom::open_in_new_tab(url);
        }
    }

    /// Navigate command history. Negative direction recalls older entries,
    /// positive recalls newer ones.
    ///
    /// Returns the input field's new content, or `None` to leave it as is.
    pub fn navigate_history(&self, direction: i32) -> Option<String> {
        let mut recalled = None;
        self.session.update(|s| {
            recalled = if direction < 0 {
                s.recall_previous()
            } else {
                s.recall_next()
            };
        });
        recalled
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component via `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Terminal state (output lines, command history, navigation).
    pub terminal: TerminalState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            terminal: TerminalState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0a0e27;
                    color: #e0e0e0;
                    font-family: 'Courier New', monospace;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #a0a0a0; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #ff6b6b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Terminal />
        </ErrorBoundary>
    }
}
