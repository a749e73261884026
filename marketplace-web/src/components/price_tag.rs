use shared::models::Product;
use shared::models::product::format_money;
use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PriceTagProps {
    pub product: Product,
    pub currency: AttrValue,
}

/// Final price, with the list price struck through when discounted.
#[function_component(PriceTag)]
pub fn price_tag(props: &PriceTagProps) -> Html {
    let product = &props.product;
    let currency = props.currency.as_str();

    html! {
        <div class="flex items-baseline gap-2">
            if product.has_discount() {
                <span class="line-through text-sm opacity-60">{format_money(currency, product.price)}</span>
                <span class="text-lg font-bold text-success">{format_money(currency, product.final_price())}</span>
                <span class="badge badge-success badge-sm">{format!("-{}%", product.discount.unwrap_or_default())}</span>
            } else {
                <span class="text-lg font-bold">{format_money(currency, product.price)}</span>
            }
        </div>
    }
}
