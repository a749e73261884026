use crate::{
    api::shared_client, components::alert::AlertBanner, models::app_state::AppState,
    routes::MainRoute, session::BrowserSessionStore,
};
use i18nrs::yew::use_translation;
use shared::actions::{self, ActionError};
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_dispatch;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let invalid_text = i18n.t("login.invalid");
        let missing_token_text = i18n.t("login.no_token");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let credentials = LoginRequest {
                email: (*email_handle).clone(),
                password: (*password_handle).clone(),
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            let dispatch = dispatch.clone();
            let invalid_text = invalid_text.clone();
            let missing_token_text = missing_token_text.clone();
            spawn_local(async move {
                match actions::login(&shared_client(), &BrowserSessionStore, &credentials).await {
                    Ok((session, landing)) => {
                        dispatch.set(AppState::signed_in(session));
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::from_landing(landing));
                        }
                    }
                    Err(err) => {
                        let message = match err {
                            ActionError::Api(api) if api.is_unauthorized() => invalid_text,
                            ActionError::MissingToken => missing_token_text,
                            other => other.to_string(),
                        };
                        error_ref.set(Some(message));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center py-12">
            <div class="card w-full max-w-md shadow-lg bg-base-200">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{i18n.t("login.title")}</h2>
                    if let Some(message) = (*error).clone() {
                        <AlertBanner {message} />
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{i18n.t("login.email")}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{i18n.t("login.password")}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { i18n.t("login.submitting") } else { i18n.t("login.submit") }}
                        </button>
                    </div>
                    <p class="text-sm text-center">
                        {i18n.t("login.no_account")}{" "}
                        <Link<MainRoute> to={MainRoute::Register} classes="link link-primary">
                            {i18n.t("header.register")}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
