use crate::{
    components::{
        header_nav_item::HeaderNavItem, language_selector::LanguageSelector,
        user_dropdown::UserDropdown,
    },
    models::app_state::AppState,
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

/// Top navigation bar.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let session = use_selector(|state: &AppState| state.session.clone());
    let session = (*session).clone().filter(|session| session.is_authenticated());
    let routes = MainRoute::header_routes(session.as_ref().and_then(|session| session.role));

    let render_routes = |routes: &[MainRoute]| -> Html {
        html! {
            { for routes.iter().map(|route| html! {
                <HeaderNavItem
                    current_route={props.current_route.clone()}
                    route={route.clone()}
                />
            }) }
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                {i18n.t("app.title")}
            </Link<MainRoute>>
            <div class="dropdown dropdown-end sm:hidden">
                <button class="btn btn-soft">{"☰"}</button>
                <ul
                tabindex="0"
                class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                { render_routes(&routes) }
                </ul>
            </div>
            <ul class="hidden menu sm:menu-horizontal">
                { render_routes(&routes) }
            </ul>
            <div class="flex items-center gap-2">
                <LanguageSelector />
                {
                    if session.is_some() {
                        html! { <UserDropdown on_logout={props.on_logout.clone()} /> }
                    } else {
                        html! {
                            <>
                                <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                    {i18n.t("header.login")}
                                </Link<MainRoute>>
                                <Link<MainRoute> to={MainRoute::Register} classes="btn btn-ghost btn-sm">
                                    {i18n.t("header.register")}
                                </Link<MainRoute>>
                            </>
                        }
                    }
                }
            </div>
        </nav>
    }
}
