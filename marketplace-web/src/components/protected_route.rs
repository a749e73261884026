use shared::access::Access;
use shared::models::Role;
use yew::{Children, Html, Properties, function_component, html};
use yew_router::prelude::Redirect;
use yewdux::prelude::use_store_value;

use crate::components::loading::Loading;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    #[prop_or_default]
    pub role: Option<Role>,
    pub children: Children,
}

/// Renders its children only for a session holding the required role.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let state = use_store_value::<AppState>();
    if !state.restored {
        return html! { <Loading /> };
    }

    match Access::check(state.session.as_ref(), props.role) {
        Access::Granted => html! { <>{props.children.clone()}</> },
        Access::RedirectToLogin => html! { <Redirect<MainRoute> to={MainRoute::Login} /> },
        Access::Forbidden => html! {
            <div class="alert alert-error my-8">
                <span class="text-lg font-bold">{Access::FORBIDDEN_MESSAGE}</span>
            </div>
        },
    }
}
