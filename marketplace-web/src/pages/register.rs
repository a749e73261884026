use i18nrs::yew::use_translation;
use shared::actions;
use shared::forms::RegisterForm;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::api::shared_client;
use crate::browser::alert;
use crate::components::alert::AlertBanner;
use crate::components::text_field::TextField;
use crate::routes::MainRoute;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let (i18n, ..) = use_translation();
    let form = use_state(RegisterForm::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let field = |update: fn(&mut RegisterForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            update(&mut next, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let loading = loading.clone();
        let done_text = i18n.t("register.done");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let form = (*form).clone();
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            let done_text = done_text.clone();
            loading.set(true);
            spawn_local(async move {
                match actions::register(&shared_client(), &form).await {
                    Ok(user) => {
                        log::info!("registered {}", user.email);
                        alert(&done_text);
                        if let Some(navigator) = navigator {
                            navigator.push(&MainRoute::Login);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="flex items-center justify-center py-8">
            <div class="card w-full max-w-lg shadow-lg bg-base-200">
                <form class="card-body gap-1" {onsubmit}>
                    <h2 class="card-title text-2xl">{i18n.t("register.title")}</h2>
                    if let Some(message) = (*error).clone() {
                        <AlertBanner {message} />
                    }
                    <div class="grid grid-cols-2 gap-2">
                        <TextField id="reg-name" label={i18n.t("profile.name")} value={form.name.clone()}
                            on_input={field(|f, v| f.name = v)} required=true />
                        <TextField id="reg-last-name" label={i18n.t("profile.last_name")} value={form.last_name.clone()}
                            on_input={field(|f, v| f.last_name = v)} required=true />
                    </div>
                    <TextField id="reg-email" kind="email" label={i18n.t("login.email")} value={form.email.clone()}
                        on_input={field(|f, v| f.email = v)} required=true />
                    <div class="grid grid-cols-2 gap-2">
                        <TextField id="reg-cpf" label={i18n.t("profile.cpf")} value={form.cpf.clone()}
                            on_input={field(|f, v| f.cpf = v)} required=true />
                        <TextField id="reg-phone" label={i18n.t("profile.phone")} value={form.phone.clone()}
                            on_input={field(|f, v| f.phone = v)} />
                    </div>
                    <TextField id="reg-password" kind="password" label={i18n.t("login.password")}
                        value={form.password.clone()} on_input={field(|f, v| f.password = v)} required=true />
                    <TextField id="reg-confirm" kind="password" label={i18n.t("profile.confirm_password")}
                        value={form.confirm_password.clone()} on_input={field(|f, v| f.confirm_password = v)} required=true />
                    <button class="btn btn-primary mt-4" type="submit" disabled={*loading}>
                        {i18n.t("register.submit")}
                    </button>
                </form>
            </div>
        </div>
    }
}
