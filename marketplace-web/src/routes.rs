use crate::components::protected_route::ProtectedRoute;
use crate::{containers::layout::Layout, pages::*};
use shared::access::Landing;
use shared::models::Role;
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::Callback;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::models::app_state::AppState;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/products")]
    Products,
    #[at("/store/:id")]
    Store { id: String },
    #[at("/dashboard")]
    Dashboard,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Role a session needs to open the route, if the route is gated.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::Dashboard => Some(Role::User),
            Self::Admin => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn from_landing(landing: Landing) -> Self {
        match landing {
            Landing::AdminDashboard => Self::Admin,
            Landing::UserDashboard => Self::Dashboard,
        }
    }

    /// Translation key of the route's navigation label.
    pub fn nav_key(&self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::Login => "nav.login",
            Self::Register => "nav.register",
            Self::Products => "nav.products",
            Self::Store { .. } => "nav.store",
            Self::Dashboard => "nav.dashboard",
            Self::Admin => "nav.admin",
            Self::NotFound => "nav.not_found",
        }
    }

    /// Links shown in the navbar for a session with `role`.
    pub fn header_routes(role: Option<Role>) -> Vec<Self> {
        let mut routes = vec![Self::Home, Self::Products];
        match role {
            Some(Role::Admin) => routes.push(Self::Admin),
            Some(Role::User) => routes.push(Self::Dashboard),
            None => {}
        }
        routes
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub on_logout: Callback<()>,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let signed_in = (*session).as_ref().is_some_and(|s| s.is_authenticated());
    let landing = Landing::for_role((*session).as_ref().and_then(|s| s.role));
    let on_logout = Some(props.on_logout.clone());
    let current_route = Some(props.route.clone());
    let role = props.route.required_role();

    let page = match props.route.clone() {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Login if signed_in => {
            return html! { <Redirect<MainRoute> to={MainRoute::from_landing(landing)} /> };
        }
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Register => html! { <RegisterPage /> },
        MainRoute::Products => html! { <ProductsPage /> },
        MainRoute::Store { id } => html! { <StorePage {id} /> },
        MainRoute::Dashboard => html! {
            <ProtectedRoute {role}><UserDashboardPage /></ProtectedRoute>
        },
        MainRoute::Admin => html! {
            <ProtectedRoute {role}><AdminDashboardPage /></ProtectedRoute>
        },
        MainRoute::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <Layout {current_route} {on_logout}>
            {page}
        </Layout>
    }
}

/// Switch function for the main routes.
pub fn switch_with_logout(route: MainRoute, on_logout: Callback<()>) -> Html {
    log(std::format!("Switching to main route: {:?}", route).as_str());
    html! { <MainRouteView {route} {on_logout} /> }
}
