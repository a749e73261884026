use i18nrs::yew::use_translation;
use shared::models::{Id, Store};
use yew::{Callback, Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct StoresTableProps {
    pub stores: Vec<Store>,
    pub on_delete: Callback<Id>,
    #[prop_or_default]
    pub on_edit: Option<Callback<Store>>,
}

#[function_component(StoresTable)]
pub fn stores_table(props: &StoresTableProps) -> Html {
    let (i18n, ..) = use_translation();

    if props.stores.is_empty() {
        return html! { <p class="opacity-70 py-4">{i18n.t("stores.empty")}</p> };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{i18n.t("stores.name")}</th>
                        <th>{i18n.t("stores.address")}</th>
                        <th>{i18n.t("stores.contact")}</th>
                        <th>{i18n.t("stores.owner")}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                {
                    for props.stores.iter().map(|store| {
                        let id = store.id;
                        let on_delete = props.on_delete.clone();
                        let edit = props.on_edit.clone().map(|on_edit| {
                            let store = store.clone();
                            html! {
                                <button class="btn btn-ghost btn-xs" onclick={move |_| on_edit.emit(store.clone())}>
                                    <Icon icon_id={IconId::HeroiconsSolidPencilSquare} width="16" height="16" />
                                </button>
                            }
                        });
                        html! {
                            <tr key={id}>
                                <td>
                                    <Link<MainRoute> to={MainRoute::Store { id: id.to_string() }} classes="link link-hover font-semibold">
                                        {store.name.clone()}
                                    </Link<MainRoute>>
                                </td>
                                <td>{store.address.clone()}</td>
                                <td>{store.contact.clone()}</td>
                                <td>{store.owner_email.clone().unwrap_or_default()}</td>
                                <td class="flex gap-1 justify-end">
                                    {edit}
                                    <button class="btn btn-ghost btn-xs text-error" onclick={move |_| on_delete.emit(id)}>
                                        <Icon icon_id={IconId::HeroiconsSolidTrash} width="16" height="16" />
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                }
                </tbody>
            </table>
        </div>
    }
}
