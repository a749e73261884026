use i18nrs::yew::use_translation;
use shared::actions;
use shared::catalog::{filter_by_name, filter_users};
use shared::models::{Id, Store, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::use_client;
use crate::browser::{confirm, input_value};
use crate::components::admin_profile_form::AdminProfileForm;
use crate::components::alert::AlertBanner;
use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::components::stores_table::StoresTable;
use crate::components::users_table::UsersTable;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Users,
    Stores,
}

/// Administration of every user and every store.
#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page() -> Html {
    let (i18n, ..) = use_translation();
    let tab = use_state(|| Tab::Users);

    let tab_button = |target: Tab, label: String| {
        let tab = tab.clone();
        let class = classes!("tab", (*tab == target).then_some("tab-active"));
        html! {
            <a role="tab" {class} onclick={move |_| tab.set(target)}>{label}</a>
        }
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{i18n.t("admin.title")}</h1>
            <div role="tablist" class="tabs tabs-boxed w-fit">
                {tab_button(Tab::Users, i18n.t("admin.users"))}
                {tab_button(Tab::Stores, i18n.t("admin.stores"))}
            </div>
            {
                match *tab {
                    Tab::Users => html! { <UsersAdmin /> },
                    Tab::Stores => html! { <StoresAdmin /> },
                }
            }
        </div>
    }
}

#[function_component(UsersAdmin)]
fn users_admin() -> Html {
    let (i18n, ..) = use_translation();
    let client = use_client();
    let users = use_state(|| None::<Vec<User>>);
    let error = use_state(|| None::<String>);
    let search = use_state(String::new);
    let editing = use_state(|| None::<User>);

    {
        let client = client.clone();
        let users = users.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match client.list_users().await {
                    Ok(list) => users.set(Some(list)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    let on_delete = {
        let users = users.clone();
        let error = error.clone();
        let prompt = i18n.t("users.confirm_delete");
        Callback::from(move |id: Id| {
            let client = client.clone();
            let users = users.clone();
            let error = error.clone();
            let prompt = prompt.clone();
            let mut list = (*users).clone().unwrap_or_default();
            spawn_local(async move {
                match actions::delete_user(&client, &mut list, id, || confirm(&prompt)).await {
                    Ok(true) => users.set(Some(list)),
                    Ok(false) => {}
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };
    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |user: User| editing.set(Some(user)))
    };
    let on_close = {
        let editing = editing.clone();
        Callback::from(move |()| editing.set(None))
    };
    let on_saved = {
        let users = users.clone();
        let editing = editing.clone();
        Callback::from(move |saved: User| {
            let mut list = (*users).clone().unwrap_or_default();
            if let Some(existing) = list.iter_mut().find(|user| user.id == saved.id) {
                *existing = saved;
            }
            users.set(Some(list));
            editing.set(None);
        })
    };
    let oninput = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                search.set(value);
            }
        })
    };

    html! {
        <div class="space-y-4">
            if let Some(message) = (*error).clone() {
                <AlertBanner {message} />
            }
            <input
                class="input input-bordered w-full"
                type="search"
                placeholder={i18n.t("users.search")}
                value={(*search).clone()}
                {oninput}
            />
            {
                match (*users).as_ref() {
                    Some(list) => html! {
                        <UsersTable users={filter_users(list, &search)} {on_edit} {on_delete} />
                    },
                    None => html! { <Loading /> },
                }
            }
            <Modal open={editing.is_some()} title={i18n.t("users.edit")} on_close={on_close.clone()}>
                if let Some(user) = (*editing).clone() {
                    <AdminProfileForm key={user.id} user={user.clone()} {on_saved} on_cancel={on_close} />
                }
            </Modal>
        </div>
    }
}

#[function_component(StoresAdmin)]
fn stores_admin() -> Html {
    let (i18n, ..) = use_translation();
    let client = use_client();
    let stores = use_state(|| None::<Vec<Store>>);
    let error = use_state(|| None::<String>);
    let search = use_state(String::new);

    {
        let client = client.clone();
        let stores = stores.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match client.list_stores().await {
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
    let oninput = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                search.set(value);
            }
        })
    };

    html! {
        <div class="space-y-4">
            if let Some(message) = (*error).clone() {
                <AlertBanner {message} />
            }
            <input
                class="input input-bordered w-full"
                type="search"
                placeholder={i18n.t("stores.search")}
                value={(*search).clone()}
                {oninput}
            />
            {
                match (*stores).as_ref() {
                    Some(list) => html! { <StoresTable stores={filter_by_name(list, &search)} {on_delete} /> },
                    None => html! { <Loading /> },
                }
            }
        </div>
    }
}
