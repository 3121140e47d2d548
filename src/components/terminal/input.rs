//! Terminal input component with history navigation.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Terminal input field with Enter-to-submit and Up/Down history recall.
#[component]
pub fn Input(
    on_submit: Callback<String>,
    on_history_nav: Callback<i32, Option<String>>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (input_value, set_input_value) = signal(String::new());

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    // Helper to move cursor to end of input
    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        match ev.key().as_str() {
            "Enter" => {
                let value = input_value.get();
                on_submit.run(value);
                set_input_value.set(String::new());
            }
            "ArrowUp" => {
                ev.prevent_default();
                if let Some(cmd) = on_history_nav.run(-1) {
                    set_input_value.set(cmd);
                    move_cursor_to_end();
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                if let Some(cmd) = on_history_nav.run(1) {
                    set_input_value.set(cmd);
                    move_cursor_to_end();
                }
            }
            "c" if ev.ctrl_key() => {
                set_input_value.set(String::new());
            }
            "l" if ev.ctrl_key() => {
                ev.prevent_default();
                on_submit.run("clear".to_string());
            }
            _ => {}
        }
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_input_value.set(input.value());
    };

    view! {
        <div class=css::line>
            <span class=css::prompt>"$ "</span>
            <input
                node_ref=input_ref
                type="text"
                class=css::input
                autocomplete="off"
                spellcheck="false"
                prop:value=input_value
                on:input=handle_input
                on:keydown=handle_keydown
            />
        </div>
    }
}
