//! Terminal view component.
//!
//! The terminal interface with output history and command input.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::config::APP_NAME;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

/// Auto-scroll the output to the bottom whenever the session changes.
fn setup_autoscroll_effect(
    terminal: crate::app::TerminalState,
    output_ref: NodeRef<leptos::html::Div>,
) {
    Effect::new(move || {
        terminal.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let output_ref = NodeRef::<leptos::html::Div>::new();
    setup_autoscroll_effect(ctx.terminal, output_ref);

    // Callbacks
    let on_submit = Callback::new(move |input: String| ctx.terminal.submit(&input));
    let on_history_nav =
        Callback::new(move |direction: i32| ctx.terminal.navigate_history(direction));

    // Clicking anywhere in the terminal focuses the input
    let handle_click = move |_| dom::focus_terminal_input();

    view! {
        <div class=css::container on:click=handle_click>
            <div class=css::titleBar>
                <span class=css::titleDot></span>
                <span class=css::titleDot></span>
                <span class=css::titleDot></span>
                <span class=css::title>{APP_NAME}</span>
            </div>

            <div node_ref=output_ref class=css::output>
                <For
                    each=move || ctx.terminal.lines()
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
            </div>

            <div class=css::inputArea>
                <Input on_submit=on_submit on_history_nav=on_history_nav />
            </div>
        </div>
    }
}
