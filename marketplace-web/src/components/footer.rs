use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

#[function_component(Footer)]
pub fn footer() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
            <div>
                <p>{i18n.t("footer.text")}</p>
            </div>
        </footer>
    }
}
