//! Thin wrappers over the browser dialogs and form events.

use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::events::{Event, InputEvent};

/// Ask the visitor to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window()
        && window.alert_with_message(message).is_err()
    {
        log::warn!("alert dialog unavailable: {message}");
    }
}

/// Current value of the input or textarea that raised `event`.
pub fn input_value(event: &InputEvent) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}

/// Current value of the select that raised `event`.
pub fn select_value(event: &Event) -> Option<String> {
    event
        .target()?
        .dyn_ref::<HtmlSelectElement>()
        .map(HtmlSelectElement::value)
}
