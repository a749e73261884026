use i18nrs::yew::use_translation;
use shared::actions::{self, ActionError};
use shared::access::can_edit_store;
use shared::models::{Id, Product, Store, Tag};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

use crate::api::use_client;
use crate::browser::alert;
use crate::components::comment_modal::CommentModal;
use crate::components::price_tag::PriceTag;
use crate::components::rating_stars::RatingStars;
use crate::components::tag_modal::TagModal;
use crate::config::FrontendConfig;
use crate::models::app_state::AppState;

#[derive(Properties, PartialEq)]
pub struct ProductListProps {
    pub products: Vec<Product>,
    /// Store the products belong to; enables editing for its owner.
    #[prop_or_default]
    pub store: Option<Store>,
    #[prop_or_default]
    pub on_edit: Option<Callback<Product>>,
    #[prop_or_default]
    pub on_delete: Option<Callback<Id>>,
}

#[function_component(ProductList)]
pub fn product_list(props: &ProductListProps) -> Html {
    let (i18n, ..) = use_translation();
    let session = use_selector(|state: &AppState| state.session.clone());
    let editable = props
        .store
        .as_ref()
        .is_some_and(|store| can_edit_store((*session).as_ref(), store));

    if props.products.is_empty() {
        return html! { <p class="opacity-70 py-6 text-center">{i18n.t("products.empty")}</p> };
    }

    html! {
        <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4">
            {
                for props.products.iter().map(|product| html! {
                    <ProductCard
                        key={product.id}
                        product={product.clone()}
                        {editable}
                        on_edit={props.on_edit.clone()}
                        on_delete={props.on_delete.clone()}
                    />
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    #[prop_or_default]
    pub editable: bool,
    #[prop_or_default]
    pub on_edit: Option<Callback<Product>>,
    #[prop_or_default]
    pub on_delete: Option<Callback<Id>>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let (i18n, ..) = use_translation();
    let client = use_client();
    let session = use_selector(|state: &AppState| state.session.clone());
    let rating = use_state(|| props.product.rating());
    let tags = use_state(|| props.product.tags.clone());
    let comments_open = use_state(|| false);
    let tags_open = use_state(|| false);
    let currency = FrontendConfig::new().currency;
    let product = &props.product;

    let on_rate = {
        let rating = rating.clone();
        let product_id = product.id;
        let login_text = i18n.t("products.login_to_rate");
        Callback::from(move |value: u8| {
            let client = client.clone();
            let session = (*session).clone();
            let rating = rating.clone();
            let login_text = login_text.clone();
            spawn_local(async move {
                match actions::rate_product(&client, session.as_ref(), product_id, value).await {
                    Ok(Some(average)) => rating.set(average),
                    Ok(None) => {}
                    Err(ActionError::LoginRequired) => alert(&login_text),
                    Err(err) => alert(&err.to_string()),
                }
            });
        })
    };

    let toggle = |handle: &UseStateHandle<bool>, open: bool| {
        let handle = handle.clone();
        Callback::from(move |()| handle.set(open))
    };
    let on_tags_change = {
        let tags = tags.clone();
        Callback::from(move |list: Vec<Tag>| tags.set(list))
    };

    let owner_actions = props.editable.then(|| {
        let edit = props.on_edit.clone().map(|on_edit| {
            let product = product.clone();
            html! {
                <button class="btn btn-ghost btn-xs" onclick={move |_| on_edit.emit(product.clone())}>
                    <Icon icon_id={IconId::HeroiconsSolidPencilSquare} width="16" height="16" />
                </button>
            }
        });
        let delete = props.on_delete.clone().map(|on_delete| {
            let id = product.id;
            html! {
                <button class="btn btn-ghost btn-xs text-error" onclick={move |_| on_delete.emit(id)}>
                    <Icon icon_id={IconId::HeroiconsSolidTrash} width="16" height="16" />
                </button>
            }
        });
        html! { <div class="flex gap-1">{edit}{delete}</div> }
    });

    html! {
        <div class="card bg-base-200 shadow-sm">
            if let Some(url) = product.image_url.clone().filter(|url| !url.is_empty()) {
                <figure class="h-40 overflow-hidden">
                    <img src={url} alt={product.name.clone()} class="object-cover w-full" />
                </figure>
            }
            <div class="card-body p-4 gap-2">
                <div class="flex justify-between items-start">
                    <h3 class="card-title text-base">{product.name.clone()}</h3>
                    {owner_actions}
                </div>
                if let Some(store_name) = product.store_name.clone() {
                    <span class="text-xs opacity-60">{store_name}</span>
                }
                <p class="text-sm opacity-80">{product.description.clone()}</p>
                <PriceTag product={product.clone()} currency={currency} />
                if let Some(quantity) = product.quantity {
                    <span class="text-xs opacity-70">{format!("{}: {quantity}", i18n.t("products.quantity"))}</span>
                }
                <RatingStars value={*rating} on_rate={on_rate} />
                <div class="flex flex-wrap gap-1">
                    { for tags.iter().map(|tag| html! { <span key={tag.id} class="badge badge-outline badge-sm">{tag.tag_name.clone()}</span> }) }
                </div>
                <div class="card-actions justify-end">
                    <button class="btn btn-xs" onclick={toggle(&tags_open, true).reform(|_: MouseEvent| ())}>
                        {i18n.t("tags.title")}
                    </button>
                    <button class="btn btn-xs btn-primary" onclick={toggle(&comments_open, true).reform(|_: MouseEvent| ())}>
                        {i18n.t("comments.title")}
                    </button>
                </div>
            </div>
            <CommentModal
                open={*comments_open}
                product_id={product.id}
                product_name={product.name.clone()}
                on_close={toggle(&comments_open, false)}
            />
            <TagModal
                open={*tags_open}
                product_id={product.id}
                tags={(*tags).clone()}
                editable={props.editable}
                on_close={toggle(&tags_open, false)}
                on_change={on_tags_change}
            />
        </div>
    }
}
