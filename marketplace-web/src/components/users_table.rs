use i18nrs::yew::use_translation;
use shared::models::{Id, User};
use yew::{Callback, Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct UsersTableProps {
    pub users: Vec<User>,
    pub on_edit: Callback<User>,
    pub on_delete: Callback<Id>,
}

#[function_component(UsersTable)]
pub fn users_table(props: &UsersTableProps) -> Html {
    let (i18n, ..) = use_translation();

    if props.users.is_empty() {
        return html! { <p class="opacity-70 py-4">{i18n.t("users.empty")}</p> };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{i18n.t("users.name")}</th>
                        <th>{i18n.t("users.email")}</th>
                        <th>{i18n.t("users.cpf")}</th>
                        <th>{i18n.t("users.role")}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                {
                    for props.users.iter().map(|user| {
                        let id = user.id;
                        let on_delete = props.on_delete.clone();
                        let on_edit = props.on_edit.clone();
                        let edited = user.clone();
                        html! {
                            <tr key={id}>
                                <td>{user.full_name()}</td>
                                <td>{user.email.clone()}</td>
                                <td>{user.cpf.clone()}</td>
                                <td>
                                    <span class="badge badge-outline">
                                        {user.role.map(|role| role.to_string()).unwrap_or_default()}
                                    </span>
                                </td>
                                <td class="flex gap-1 justify-end">
                                    <button class="btn btn-ghost btn-xs" onclick={move |_| on_edit.emit(edited.clone())}>
                                        <Icon icon_id={IconId::HeroiconsSolidPencilSquare} width="16" height="16" />
                                    </button>
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
