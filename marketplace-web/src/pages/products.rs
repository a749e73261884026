use i18nrs::yew::use_translation;
use shared::api::ProductListQuery;
use shared::catalog::{ProductQuery, ProductSort, attach_tags, distinct_tag_names};
use shared::models::Product;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::shared_client;
use crate::browser::{input_value, select_value};
use crate::components::alert::AlertBanner;
use crate::components::loading::Loading;
use crate::components::product_list::ProductList;

/// Catalog of every product with search, tag filter and ordering.
#[function_component(ProductsPage)]
pub fn products_page() -> Html {
    let (i18n, ..) = use_translation();
    let products = use_state(|| None::<Vec<Product>>);
    let tag_names = use_state(Vec::<String>::new);
    let error = use_state(|| None::<String>);
    let query = use_state(ProductQuery::default);

    {
        let products = products.clone();
        let tag_names = tag_names.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = shared_client();
                let listed = client.list_products(&ProductListQuery::default()).await;
                let tags = client.all_tags().await.unwrap_or_else(|err| {
                    log::warn!("tags unavailable: {err}");
                    Vec::new()
                });
                match listed {
                    Ok(list) => {
                        tag_names.set(distinct_tag_names(&tags));
                        products.set(Some(attach_tags(list, &tags)));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    let on_search = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(search) = input_value(&event) {
                query.set(ProductQuery {
                    search,
                    ..(*query).clone()
                });
            }
        })
    };
    let on_sort = {
        let query = query.clone();
        Callback::from(move |event: Event| {
            if let Some(sort) = select_value(&event).as_deref().and_then(ProductSort::from_key) {
                query.set(ProductQuery {
                    sort,
                    ..(*query).clone()
                });
            }
        })
    };
    let toggle_tag = |name: String| {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*query).clone();
            next.toggle_tag(&name);
            query.set(next);
        })
    };

    let sort_label = |sort: ProductSort| i18n.t(&format!("products.sort.{}", sort.key()));

    let body = match ((*products).as_ref(), (*error).clone()) {
        (_, Some(message)) => html! { <AlertBanner {message} /> },
        (None, None) => html! { <Loading /> },
        (Some(list), None) => html! { <ProductList products={query.apply(list)} /> },
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{i18n.t("products.title")}</h1>
            <div class="flex flex-col sm:flex-row gap-2">
                <input
                    class="input input-bordered flex-grow"
                    type="search"
                    placeholder={i18n.t("products.search")}
                    value={query.search.clone()}
                    oninput={on_search}
                />
                <select class="select select-bordered" onchange={on_sort}>
                    {
                        for ProductSort::ALL.into_iter().map(|sort| html! {
                            <option value={sort.key()} selected={sort == query.sort}>{sort_label(sort)}</option>
                        })
                    }
                </select>
            </div>
            <div class="flex flex-wrap gap-2">
                {
                    for tag_names.iter().map(|name| {
                        let active = query.tags.contains(name);
                        html! {
                            <button
                                key={name.clone()}
                                class={classes!("badge", "badge-lg", "cursor-pointer", if active { "badge-primary" } else { "badge-outline" })}
                                onclick={toggle_tag(name.clone())}
                            >
                                {name.clone()}
                            </button>
                        }
                    })
                }
            </div>
            {body}
        </div>
    }
}
