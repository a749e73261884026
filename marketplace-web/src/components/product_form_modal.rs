use i18nrs::yew::use_translation;
use shared::actions;
use shared::forms::ProductForm;
use shared::models::Product;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::use_client;
use crate::components::alert::AlertBanner;
use crate::components::modal::Modal;
use crate::components::text_field::TextField;

#[derive(Properties, PartialEq)]
pub struct ProductFormModalProps {
    pub open: bool,
    /// Route id of the store new products are added to.
    pub store_id: AttrValue,
    /// Product being edited; `None` creates a new one.
    #[prop_or_default]
    pub product: Option<Product>,
    pub on_close: Callback<()>,
    pub on_saved: Callback<Product>,
}

#[function_component(ProductFormModal)]
pub fn product_form_modal(props: &ProductFormModalProps) -> Html {
    let (i18n, ..) = use_translation();
    let client = use_client();
    let form = use_state(ProductForm::default);
    let error = use_state(|| None::<String>);

    {
        let form = form.clone();
        let error = error.clone();
        use_effect_with((props.open, props.product.clone()), move |(_, product)| {
            form.set(product.as_ref().map(ProductForm::from_product).unwrap_or_default());
            error.set(None);
            || ()
        });
    }

    let field = |update: fn(&mut ProductForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            update(&mut next, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let on_saved = props.on_saved.clone();
        let store_id = props.store_id.to_string();
        let product_id = props.product.as_ref().map(|product| product.id);
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let client = client.clone();
            let form = (*form).clone();
            let error = error.clone();
            let on_saved = on_saved.clone();
            let store_id = store_id.clone();
            spawn_local(async move {
                let result = match product_id {
                    Some(id) => actions::update_product(&client, id, &form).await,
                    None => actions::create_product(&client, &store_id, &form).await,
                };
                match result {
                    Ok(product) => on_saved.emit(product),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let title = if props.product.is_some() {
        i18n.t("products.edit")
    } else {
        i18n.t("products.new")
    };
    let on_cancel = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal open={props.open} {title} on_close={props.on_close.clone()}>
            <form class="space-y-2" {onsubmit}>
                if let Some(message) = (*error).clone() {
                    <AlertBanner {message} />
                }
                <TextField id="product-name" label={i18n.t("products.name")} value={form.name.clone()}
                    on_input={field(|f, v| f.name = v)} required=true />
                <TextField id="product-description" label={i18n.t("products.description")}
                    value={form.description.clone()} on_input={field(|f, v| f.description = v)} multiline=true />
                <div class="grid grid-cols-3 gap-2">
                    <TextField id="product-price" label={i18n.t("products.price")} value={form.price.clone()}
                        on_input={field(|f, v| f.price = v)} required=true />
                    <TextField id="product-quantity" label={i18n.t("products.quantity")} value={form.quantity.clone()}
                        on_input={field(|f, v| f.quantity = v)} />
                    <TextField id="product-discount" label={i18n.t("products.discount")} value={form.discount.clone()}
                        on_input={field(|f, v| f.discount = v)} />
                </div>
                <TextField id="product-image" kind="url" label={i18n.t("products.image_url")} value={form.image_url.clone()}
                    on_input={field(|f, v| f.image_url = v)} />
                <div class="modal-action">
                    <button type="button" class="btn" onclick={on_cancel}>{i18n.t("common.cancel")}</button>
                    <button type="submit" class="btn btn-primary">{i18n.t("common.save")}</button>
                </div>
            </form>
        </Modal>
    }
}
