use gloo_timers::callback::Timeout;
use yew::{Callback, Html, Properties, function_component, html, use_effect_with};

use super::alert::{AlertBanner, AlertKind};

/// How long a notice stays on screen.
const TOAST_MILLIS: u32 = 3_000;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<String>,
    pub on_dismiss: Callback<()>,
}

/// Short-lived success notice anchored to the bottom corner.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.message.clone(), move |message| {
            let timeout = message
                .is_some()
                .then(|| Timeout::new(TOAST_MILLIS, move || on_dismiss.emit(())));
            move || drop(timeout)
        });
    }

    match props.message.clone() {
        Some(message) => html! {
            <div class="toast toast-end">
                <AlertBanner {message} kind={AlertKind::Success} />
            </div>
        },
        None => html! {},
    }
}
