use i18nrs::yew::use_translation;
use shared::actions;
use shared::models::{Id, Store};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::use_client;
use crate::browser::confirm;
use crate::components::alert::AlertBanner;
use crate::components::loading::Loading;
use crate::components::store_form_modal::StoreFormModal;
use crate::components::stores_table::StoresTable;

/// Editing state of the store modal.
#[derive(Clone, PartialEq)]
enum Editing {
    Closed,
    New,
    Existing(Store),
}

/// The signed-in user's own stores.
#[function_component(StoreManager)]
pub fn store_manager() -> Html {
    let (i18n, ..) = use_translation();
    let client = use_client();
    let stores = use_state(|| None::<Vec<Store>>);
    let error = use_state(|| None::<String>);
    let editing = use_state(|| Editing::Closed);

    {
        let client = client.clone();
        let stores = stores.clone();
        let error = error.clone();
        use_effect_with(client.token().map(str::to_string), move |_| {
            spawn_local(async move {
                match client.my_stores().await {
                    Ok(list) => stores.set(Some(list)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    let on_delete = {
        let stores = stores.clone();
        let error = error.clone();
        let prompt = i18n.t("stores.confirm_delete");
        Callback::from(move |id: Id| {
            let client = client.clone();
            let stores = stores.clone();
            let error = error.clone();
            let prompt = prompt.clone();
            let mut list = (*stores).clone().unwrap_or_default();
            spawn_local(async move {
                match actions::delete_store(&client, &mut list, id, || confirm(&prompt)).await {
                    Ok(true) => stores.set(Some(list)),
                    Ok(false) => {}
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_saved = {
        let stores = stores.clone();
        let editing = editing.clone();
        Callback::from(move |saved: Store| {
            let mut list = (*stores).clone().unwrap_or_default();
            match list.iter_mut().find(|store| store.id == saved.id) {
                Some(existing) => *existing = saved,
                None => list.push(saved),
            }
            stores.set(Some(list));
            editing.set(Editing::Closed);
        })
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |store: Store| editing.set(Editing::Existing(store)))
    };
    let on_new = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(Editing::New))
    };
    let on_close = {
        let editing = editing.clone();
        Callback::from(move |()| editing.set(Editing::Closed))
    };
    let on_dismiss = {
        let error = error.clone();
        Callback::from(move |()| error.set(None))
    };

    let (open, edited) = match &*editing {
        Editing::Closed => (false, None),
        Editing::New => (true, None),
        Editing::Existing(store) => (true, Some(store.clone())),
    };

    html! {
        <div class="space-y-4">
            <div class="flex justify-between items-center">
                <h2 class="text-xl font-bold">{i18n.t("stores.mine")}</h2>
                <button class="btn btn-primary btn-sm" onclick={on_new}>{i18n.t("stores.new")}</button>
            </div>
            if let Some(message) = (*error).clone() {
                <AlertBanner {message} on_close={on_dismiss} />
            }
            {
                match (*stores).clone() {
                    Some(list) => html! { <StoresTable stores={list} {on_delete} {on_edit} /> },
                    None => html! { <Loading /> },
                }
            }
            <StoreFormModal {open} store={edited} {on_close} {on_saved} />
        </div>
    }
}
