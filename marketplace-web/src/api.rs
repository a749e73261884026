use once_cell::unsync::OnceCell;
use shared::api::ApiClient;
use shared::config::ApiConfig;
use shared::models::Session;
use yew::hook;
use yewdux::prelude::use_selector;

use crate::config::FrontendConfig;
use crate::models::app_state::AppState;

thread_local! {
    static SHARED_CLIENT: OnceCell<ApiClient> = const { OnceCell::new() };
}

/// The anonymous client for the configured API.
pub fn shared_client() -> ApiClient {
    SHARED_CLIENT.with(|cell| {
        cell.get_or_init(|| ApiClient::new(&ApiConfig::new(FrontendConfig::new().api_url())))
            .clone()
    })
}

/// A client carrying the session's bearer token, if any.
pub fn client_for(session: Option<&Session>) -> ApiClient {
    shared_client().for_session(session)
}

/// Client for the current session, rebuilt whenever the session changes.
#[hook]
pub fn use_client() -> ApiClient {
    let session = use_selector(|state: &AppState| state.session.clone());
    client_for((*session).as_ref())
}
