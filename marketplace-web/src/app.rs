use crate::api::shared_client;
use crate::models::app_state::AppState;
use crate::routes::{MainRoute, switch_with_logout};
use crate::session::BrowserSessionStore;
use shared::actions;
use shared::session::SessionStore;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<AppState>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            let stored = BrowserSessionStore.load();
            let has_token = stored.as_ref().is_some_and(|s| s.is_authenticated());
            dispatch.set(AppState {
                restored: true,
                session: stored,
            });
            if has_token {
                spawn_local(async move {
                    let session =
                        actions::refresh_session(&shared_client(), &BrowserSessionStore).await;
                    dispatch.set(AppState {
                        restored: true,
                        session,
                    });
                });
            }
            || ()
        });
    }

    let on_logout = Callback::from(move |()| {
        actions::logout(&BrowserSessionStore);
        log::info!("signed out");
        dispatch.set(AppState::signed_out());
    });

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={move |route| switch_with_logout(route, on_logout.clone())} />
        </BrowserRouter>
    }
}
