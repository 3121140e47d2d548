//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::utils::url::{UrlValidation, validate_redirect_url};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Focus the terminal input element.
#[inline]
pub fn focus_terminal_input() {
    focus_element("input");
}

/// Open a URL in a new browser tab.
///
/// The URL must pass the redirect allowlist; anything else is silently
/// dropped. Returns `true` if the browser accepted the request.
pub fn open_in_new_tab(url: &str) -> bool {
    let UrlValidation::Valid(url) = validate_redirect_url(url) else {
        return false;
    };

    window()
        .and_then(|w| w.open_with_url_and_target(&url, "_blank").ok())
        .flatten()
        .is_some()
}
