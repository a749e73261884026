use i18nrs::yew::use_translation;
use shared::actions;
use shared::forms::StoreForm;
use shared::models::Store;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::use_client;
use crate::components::alert::AlertBanner;
use crate::components::modal::Modal;
use crate::components::text_field::TextField;

#[derive(Properties, PartialEq)]
pub struct StoreFormModalProps {
    pub open: bool,
    /// Store being edited; `None` creates a new one.
    #[prop_or_default]
    pub store: Option<Store>,
    pub on_close: Callback<()>,
    pub on_saved: Callback<Store>,
}

#[function_component(StoreFormModal)]
pub fn store_form_modal(props: &StoreFormModalProps) -> Html {
    let (i18n, ..) = use_translation();
    let client = use_client();
    let form = use_state(StoreForm::default);
    let error = use_state(|| None::<String>);

    {
        let form = form.clone();
        let error = error.clone();
        use_effect_with((props.open, props.store.clone()), move |(_, store)| {
            form.set(store.as_ref().map(StoreForm::from).unwrap_or_default());
            error.set(None);
            || ()
        });
    }

    let field = |update: fn(&mut StoreForm, String)| {
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
        let on_saved = props.on_saved.clone();
        let id = props.store.as_ref().map(|store| store.id);
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let client = client.clone();
            let form = (*form).clone();
            let error = error.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                match actions::save_store(&client, id, &form).await {
                    Ok(store) => on_saved.emit(store),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let title = if props.store.is_some() {
        i18n.t("stores.edit")
    } else {
        i18n.t("stores.new")
    };
    let on_cancel = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal open={props.open} {title} on_close={props.on_close.clone()}>
            <form class="space-y-2" {onsubmit}>
                if let Some(message) = (*error).clone() {
                    <AlertBanner {message} />
                }
                <TextField id="store-name" label={i18n.t("stores.name")} value={form.name.clone()}
                    on_input={field(|f, v| f.name = v)} required=true />
                <TextField id="store-address" label={i18n.t("stores.address")} value={form.address.clone()}
                    on_input={field(|f, v| f.address = v)} required=true />
                <TextField id="store-contact" label={i18n.t("stores.contact")} value={form.contact.clone()}
                    on_input={field(|f, v| f.contact = v)} required=true />
                <TextField id="store-image" kind="url" label={i18n.t("stores.image_url")} value={form.image_url.clone()}
                    on_input={field(|f, v| f.image_url = v)} />
                <TextField id="store-description" label={i18n.t("stores.description")} value={form.description.clone()}
                    on_input={field(|f, v| f.description = v)} multiline=true />
                <div class="modal-action">
                    <button type="button" class="btn" onclick={on_cancel}>{i18n.t("common.cancel")}</button>
                    <button type="submit" class="btn btn-primary">{i18n.t("common.save")}</button>
                </div>
            </form>
        </Modal>
    }
}
