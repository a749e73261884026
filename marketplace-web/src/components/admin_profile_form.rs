use i18nrs::yew::use_translation;
use shared::actions;
use shared::forms::ProfileForm;
use shared::models::{Role, User};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::use_client;
use crate::browser::select_value;
use crate::components::alert::AlertBanner;
use crate::components::text_field::TextField;

#[derive(Properties, PartialEq)]
pub struct AdminProfileFormProps {
    pub user: User,
    pub on_saved: Callback<User>,
    pub on_cancel: Callback<()>,
}

/// Admin editor for any account, role included.
#[function_component(AdminProfileForm)]
pub fn admin_profile_form(props: &AdminProfileFormProps) -> Html {
    let (i18n, ..) = use_translation();
    let client = use_client();
    let form = use_state(|| ProfileForm::for_admin(&props.user));
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let field = |update: fn(&mut ProfileForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            update(&mut next, value);
            form.set(next);
        })
    };

    let on_role = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            if let Some(role) = select_value(&event).and_then(|value| value.parse::<Role>().ok()) {
                form.set(ProfileForm {
                    role: Some(role),
                    ..(*form).clone()
                });
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let saving = saving.clone();
        let on_saved = props.on_saved.clone();
        let id = props.user.id;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let client = client.clone();
            let form = (*form).clone();
            let error = error.clone();
            let saving = saving.clone();
            let on_saved = on_saved.clone();
            saving.set(true);
            spawn_local(async move {
                match actions::save_user(&client, id, &form).await {
                    Ok(user) => {
                        error.set(None);
                        on_saved.emit(user);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        })
    };

    let current_role = form.role.unwrap_or_default();
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <form class="space-y-2" {onsubmit}>
            if let Some(message) = (*error).clone() {
                <AlertBanner {message} />
            }
            <p class="text-sm opacity-70">{props.user.email.clone()}</p>
            <TextField id="admin-name" label={i18n.t("profile.name")} value={form.name.clone()}
                on_input={field(|f, v| f.name = v)} required=true />
            <TextField id="admin-last-name" label={i18n.t("profile.last_name")} value={form.last_name.clone()}
                on_input={field(|f, v| f.last_name = v)} required=true />
            <TextField id="admin-phone" label={i18n.t("profile.phone")} value={form.phone.clone()}
                on_input={field(|f, v| f.phone = v)} />
            <TextField id="admin-cpf" label={i18n.t("profile.cpf")} value={form.cpf.clone()}
                on_input={field(|f, v| f.cpf = v)} />
            <div class="form-control">
                <label class="label" for="admin-role">
                    <span class="label-text">{i18n.t("profile.role")}</span>
                </label>
                <select id="admin-role" class="select select-bordered" onchange={on_role}>
                    {
                        for Role::iter().map(|role| html! {
                            <option value={role.as_str()} selected={role == current_role}>{role.as_str()}</option>
                        })
                    }
                </select>
            </div>
            <TextField id="admin-password" kind="password" label={i18n.t("profile.new_password")}
                value={form.password.clone()} on_input={field(|f, v| f.password = v)} />
            <TextField id="admin-confirm" kind="password" label={i18n.t("profile.confirm_password")}
                value={form.confirm_password.clone()} on_input={field(|f, v| f.confirm_password = v)} />
            <div class="modal-action">
                <button type="button" class="btn" onclick={on_cancel}>{i18n.t("common.cancel")}</button>
                <button type="submit" class="btn btn-primary" disabled={*saving}>{i18n.t("common.save")}</button>
            </div>
        </form>
    }
}
