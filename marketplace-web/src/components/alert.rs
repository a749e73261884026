use yew::{Callback, Html, Properties, classes, function_component, html};

/// Visual flavour of an [`AlertBanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Error,
    Success,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "alert-error",
            Self::Success => "alert-success",
            Self::Info => "alert-info",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertBannerProps {
    pub message: String,
    #[prop_or_default]
    pub kind: AlertKind,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

#[function_component(AlertBanner)]
pub fn alert_banner(props: &AlertBannerProps) -> Html {
    html! {
        <div role="alert" class={classes!("alert", props.kind.class(), "my-2")}>
            <span>{props.message.clone()}</span>
            if let Some(on_close) = props.on_close.clone() {
                <button class="btn btn-ghost btn-xs" onclick={move |_| on_close.emit(())}>{"✕"}</button>
            }
        </div>
    }
}
