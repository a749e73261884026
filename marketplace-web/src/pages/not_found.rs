use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// `NotFoundPage` page component
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="p-4 space-y-6 text-center">
            <h1 class="text-4xl font-bold">{ "404" }</h1>
            <p>{ i18n.t("not_found.message") }</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                { i18n.t("not_found.back") }
            </Link<MainRoute>>
        </div>
    }
}
