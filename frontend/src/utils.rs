use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Current value of the `<input>` or `<textarea>` that fired `e`.
pub fn input_value(e: &InputEvent) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
        .unwrap_or_default()
}

/// Current value of the `<select>` that fired `e`.
pub fn select_value(e: &Event) -> String {
    e.target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

/// `value` unless it is missing or blank.
pub fn or_fallback(value: Option<&str>, fallback: &'static str) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => fallback.to_string(),
    }
}

/// Opens `url` in a new browser tab.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        web_sys::console::error_1(&e);
    }
}
