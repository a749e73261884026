use i18nrs::yew::use_translation;
use shared::catalog::{Page, filter_by_name};
use shared::models::Store;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::api::shared_client;
use crate::browser::input_value;
use crate::components::alert::AlertBanner;
use crate::components::loading::Loading;
use crate::components::pagination::Pagination;
use crate::config::FrontendConfig;
use crate::routes::MainRoute;

/// Public store grid with search and pagination.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, ..) = use_translation();
    let stores = use_state(|| None::<Vec<Store>>);
    let error = use_state(|| None::<String>);
    let search = use_state(String::new);
    let page = use_state(|| 1_usize);

    {
        let stores = stores.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match shared_client().list_public_stores().await {
                    Ok(list) => stores.set(Some(list)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    let oninput = {
        let search = search.clone();
        let page = page.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                search.set(value);
                page.set(1);
            }
        })
    };
    let on_page = {
        let page = page.clone();
        Callback::from(move |number: usize| page.set(number))
    };

    let grid = match ((*stores).as_ref(), (*error).clone()) {
        (_, Some(message)) => html! { <AlertBanner {message} /> },
        (None, None) => html! { <Loading /> },
        (Some(list), None) => {
            let matches = filter_by_name(list, &search);
            let current = Page::of(&matches, *page, FrontendConfig::new().page_size);
            if current.items.is_empty() {
                html! { <p class="opacity-70 text-center py-8">{i18n.t("stores.empty")}</p> }
            } else {
                html! {
                    <>
                        <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                            { for current.items.iter().map(store_card) }
                        </div>
                        <Pagination page={current.page} total_pages={current.total_pages} on_change={on_page} />
                    </>
                }
            }
        }
    };

    html! {
        <div class="space-y-6">
            <div class="hero bg-base-200 rounded-box py-8">
                <div class="hero-content text-center">
                    <div>
                        <h1 class="text-3xl font-bold">{i18n.t("home.title")}</h1>
                        <p class="py-2 opacity-80">{i18n.t("home.subtitle")}</p>
                    </div>
                </div>
            </div>
            <input
                class="input input-bordered w-full"
                type="search"
                placeholder={i18n.t("home.search")}
                value={(*search).clone()}
                {oninput}
            />
            {grid}
        </div>
    }
}

fn store_card(store: &Store) -> Html {
    html! {
        <Link<MainRoute> to={MainRoute::Store { id: store.id.to_string() }} classes="card bg-base-200 shadow-sm hover:shadow-md">
            if let Some(url) = store.image_url.clone().filter(|url| !url.is_empty()) {
                <figure class="h-32 overflow-hidden">
                    <img src={url} alt={store.name.clone()} class="object-cover w-full" />
                </figure>
            }
            <div class="card-body p-4">
                <h2 class="card-title">{store.name.clone()}</h2>
                <p class="text-sm opacity-80">{store.address.clone()}</p>
                <p class="text-xs opacity-60">{store.contact.clone()}</p>
            </div>
        </Link<MainRoute>>
    }
}
