use leptos::prelude::*;

use crate::models::{Line, LineKind};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// Get the CSS class for a line kind.
fn kind_class(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Input | LineKind::Output => css::textFg,
        LineKind::Error => css::textRed,
        LineKind::Command => css::textGreen,
    }
}

#[component]
pub fn Output(line: Line) -> impl IntoView {
    if line.text.is_empty() {
        view! { <div class=css::lineEmpty></div> }.into_any()
    } else {
        view! {
            <div class=format!("{} {}", css::line, kind_class(line.kind))>
                {line.text}
            </div>
        }
        .into_any()
    }
}
