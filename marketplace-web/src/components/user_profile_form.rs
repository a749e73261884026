use i18nrs::yew::use_translation;
use shared::actions;
use shared::forms::ProfileForm;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::use_client;
use crate::components::alert::AlertBanner;
use crate::components::loading::Loading;
use crate::components::text_field::TextField;
use crate::components::toast::Toast;

/// The signed-in user's own profile editor.
#[function_component(UserProfileForm)]
pub fn user_profile_form() -> Html {
    let (i18n, ..) = use_translation();
    let client = use_client();
    let form = use_state(|| None::<ProfileForm>);
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);

    {
        let client = client.clone();
        let form = form.clone();
        let email = email.clone();
        let error = error.clone();
        use_effect_with(client.token().map(str::to_string), move |_| {
            spawn_local(async move {
                match client.me().await {
                    Ok(user) => {
                        email.set(user.email.clone());
                        form.set(Some(ProfileForm::from_user(&user)));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    let Some(current) = (*form).clone() else {
        return match (*error).clone() {
            Some(message) => html! { <AlertBanner {message} /> },
            None => html! { <Loading /> },
        };
    };

    let field = |update: fn(&mut ProfileForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            if let Some(mut next) = (*form).clone() {
                update(&mut next, value);
                form.set(Some(next));
            }
        })
    };

    let onsubmit = {
        let error = error.clone();
        let notice = notice.clone();
        let form = form.clone();
        let saved_text = i18n.t("profile.saved");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(submitted) = (*form).clone() else {
                return;
            };
            let client = client.clone();
            let error = error.clone();
            let notice = notice.clone();
            let form = form.clone();
            let saved_text = saved_text.clone();
            spawn_local(async move {
                match actions::save_profile(&client, &submitted).await {
                    Ok(user) => {
                        error.set(None);
                        notice.set(Some(saved_text));
                        form.set(Some(ProfileForm::from_user(&user)));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let dismiss = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    html! {
        <form class="space-y-2 max-w-xl" {onsubmit}>
            if let Some(message) = (*error).clone() {
                <AlertBanner {message} />
            }
            <p class="text-sm opacity-70">{(*email).clone()}</p>
            <TextField id="profile-name" label={i18n.t("profile.name")} value={current.name.clone()}
                on_input={field(|f, v| f.name = v)} required=true />
            <TextField id="profile-last-name" label={i18n.t("profile.last_name")} value={current.last_name.clone()}
                on_input={field(|f, v| f.last_name = v)} required=true />
            <TextField id="profile-phone" label={i18n.t("profile.phone")} value={current.phone.clone()}
                on_input={field(|f, v| f.phone = v)} />
            <TextField id="profile-cpf" label={i18n.t("profile.cpf")} value={current.cpf.clone()}
                on_input={field(|f, v| f.cpf = v)} />
            <TextField id="profile-password" kind="password" label={i18n.t("profile.new_password")}
                value={current.password.clone()} on_input={field(|f, v| f.password = v)} />
            <TextField id="profile-confirm" kind="password" label={i18n.t("profile.confirm_password")}
                value={current.confirm_password.clone()} on_input={field(|f, v| f.confirm_password = v)} />
            <button type="submit" class="btn btn-primary mt-4">{i18n.t("common.save")}</button>
            <Toast message={(*notice).clone()} on_dismiss={dismiss} />
        </form>
    }
}
