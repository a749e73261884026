use crate::{models::app_state::AppState, routes::MainRoute};
use i18nrs::yew::use_translation;
use shared::access::Landing;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

#[derive(yew::Properties, PartialEq)]
pub struct UserDropdownProps {
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(UserDropdown)]
pub fn user_dropdown(props: &UserDropdownProps) -> Html {
    let navigator = use_navigator();
    let (i18n, ..) = use_translation();
    let session_state = use_selector(|state: &AppState| state.session.clone());
    let (Some(session), Some(navigator)) = ((*session_state).clone(), navigator) else {
        return html! {};
    };

    let dashboard_button = {
        let navigator = navigator.clone();
        let landing = MainRoute::from_landing(Landing::for_role(session.role));
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            navigator.push(&landing);
        });
        html! {
            <li><a {onclick}>{i18n.t("nav.dashboard")}</a></li>
        }
    };

    let logout_button = {
        let on_logout = props.on_logout.clone();
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            if let Some(callback) = &on_logout {
                callback.emit(());
            }
            navigator.push(&MainRoute::Home);
        });
        html! {
            <li><a {onclick}>{i18n.t("header.logout")}</a></li>
        }
    };

    let role = session.role.map(|role| role.to_string()).unwrap_or_default();

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost gap-2">
                <span class="text-sm">{ session.email.clone().unwrap_or_default() }</span>
                <span class="badge badge-outline badge-sm">{ role }</span>
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                {dashboard_button}
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
