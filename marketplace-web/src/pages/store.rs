use i18nrs::yew::use_translation;
use shared::access::can_edit_store;
use shared::actions;
use shared::api::ApiError;
use shared::forms::parse_store_id;
use shared::models::{Id, Product, Store};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::api::use_client;
use crate::browser::confirm;
use crate::components::alert::AlertBanner;
use crate::components::loading::Loading;
use crate::components::product_form_modal::ProductFormModal;
use crate::components::product_list::ProductList;
use crate::components::store_form_modal::StoreFormModal;
use crate::models::app_state::AppState;

#[derive(Properties, PartialEq)]
pub struct StorePageProps {
    /// Store id as it appears in the URL.
    pub id: String,
}

#[derive(Clone, PartialEq)]
enum ProductEditor {
    Closed,
    New,
    Existing(Product),
}

/// Store details with its products. Owners and admins can edit both.
#[function_component(StorePage)]
pub fn store_page(props: &StorePageProps) -> Html {
    let (i18n, ..) = use_translation();
    let client = use_client();
    let session = use_selector(|state: &AppState| state.session.clone());
    let store = use_state(|| None::<Store>);
    let products = use_state(Vec::<Product>::new);
    let error = use_state(|| None::<String>);
    let editing_store = use_state(|| false);
    let product_editor = use_state(|| ProductEditor::Closed);

    {
        let client = client.clone();
        let store = store.clone();
        let products = products.clone();
        let error = error.clone();
        let invalid_text = i18n.t("stores.invalid_id");
        use_effect_with((props.id.clone(), client.token().map(str::to_string)), move |(id, _)| {
            match parse_store_id(id) {
                Ok(id) => spawn_local(async move {
                    match client.find_store(id).await {
                        Ok(found) => {
                            let listed = if found.products.is_empty() {
                                listed_or_empty(id, client.store_products(id).await)
                            } else {
                                found.products.clone()
                            };
                            products.set(listed);
                            store.set(Some(found));
                        }
                        Err(err) => error.set(Some(err.to_string())),
                    }
                }),
                Err(_) => error.set(Some(invalid_text)),
            }
            || ()
        });
    }

    let Some(current) = (*store).clone() else {
        return match (*error).clone() {
            Some(message) => html! { <AlertBanner {message} /> },
            None => html! { <Loading /> },
        };
    };
    let editable = can_edit_store((*session).as_ref(), &current);

    let on_store_saved = {
        let store = store.clone();
        let editing_store = editing_store.clone();
        Callback::from(move |saved: Store| {
            store.set(Some(saved));
            editing_store.set(false);
        })
    };
    let open_store_editor = {
        let editing_store = editing_store.clone();
        Callback::from(move |_: MouseEvent| editing_store.set(true))
    };
    let close_store_editor = {
        let editing_store = editing_store.clone();
        Callback::from(move |()| editing_store.set(false))
    };

    let on_product_saved = {
        let products = products.clone();
        let product_editor = product_editor.clone();
        Callback::from(move |saved: Product| {
            let mut list = (*products).clone();
            match list.iter_mut().find(|product| product.id == saved.id) {
                Some(existing) => {
                    let tags = std::mem::take(&mut existing.tags);
                    *existing = Product { tags, ..saved };
                }
                None => list.push(saved),
            }
            products.set(list);
            product_editor.set(ProductEditor::Closed);
        })
    };
    let on_edit_product = {
        let product_editor = product_editor.clone();
        Callback::from(move |product: Product| product_editor.set(ProductEditor::Existing(product)))
    };
    let on_new_product = {
        let product_editor = product_editor.clone();
        Callback::from(move |_: MouseEvent| product_editor.set(ProductEditor::New))
    };
    let close_product_editor = {
        let product_editor = product_editor.clone();
        Callback::from(move |()| product_editor.set(ProductEditor::Closed))
    };
    let on_delete_product = {
        let products = products.clone();
        let error = error.clone();
        let prompt = i18n.t("products.confirm_delete");
        Callback::from(move |id: Id| {
            let client = client.clone();
            let products = products.clone();
            let error = error.clone();
            let prompt = prompt.clone();
            let mut list = (*products).clone();
            spawn_local(async move {
                match actions::delete_product(&client, &mut list, id, || confirm(&prompt)).await {
                    Ok(true) => products.set(list),
                    Ok(false) => {}
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let (product_open, edited_product) = match &*product_editor {
        ProductEditor::Closed => (false, None),
        ProductEditor::New => (true, None),
        ProductEditor::Existing(product) => (true, Some(product.clone())),
    };

    html! {
        <div class="space-y-6">
            if let Some(message) = (*error).clone() {
                <AlertBanner {message} />
            }
            <div class="card lg:card-side bg-base-200 shadow-sm">
                if let Some(url) = current.image_url.clone().filter(|url| !url.is_empty()) {
                    <figure class="lg:w-1/3"><img src={url} alt={current.name.clone()} /></figure>
                }
                <div class="card-body">
                    <h1 class="card-title text-3xl">{current.name.clone()}</h1>
                    <p>{current.description.clone()}</p>
                    <p class="text-sm opacity-80">{format!("{}: {}", i18n.t("stores.address"), current.address)}</p>
                    <p class="text-sm opacity-80">{format!("{}: {}", i18n.t("stores.contact"), current.contact)}</p>
                    if editable {
                        <div class="card-actions justify-end">
                            <button class="btn btn-sm" onclick={open_store_editor}>{i18n.t("stores.edit")}</button>
                            <button class="btn btn-sm btn-primary" onclick={on_new_product}>{i18n.t("products.new")}</button>
                        </div>
                    }
                </div>
            </div>
            <ProductList
                products={(*products).clone()}
                store={current.clone()}
                on_edit={on_edit_product}
                on_delete={on_delete_product}
            />
            if editable {
                <StoreFormModal
                    open={*editing_store}
                    store={current.clone()}
                    on_close={close_store_editor}
                    on_saved={on_store_saved}
                />
                <ProductFormModal
                    open={product_open}
                    store_id={props.id.clone()}
                    product={edited_product}
                    on_close={close_product_editor}
                    on_saved={on_product_saved}
                />
            }
        </div>
    }
}

/// Products of a store, or none when the listing failed.
fn listed_or_empty(store_id: Id, listed: Result<Vec<Product>, ApiError>) -> Vec<Product> {
    listed.unwrap_or_else(|err| {
        log::warn!("products of store {store_id} unavailable: {err}");
        Vec::new()
    })
}
