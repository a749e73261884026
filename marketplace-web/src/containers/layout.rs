use crate::components::footer::Footer;
use crate::containers::header::Header;
use crate::routes::MainRoute;
use web_sys::window;
use yew::{Callback, Children, Html, Properties, classes, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(document) = window().and_then(|window| window.document())
            && let Some(html_element) = document.document_element()
        {
            html_element
                .set_attribute("data-theme", "light")
                .unwrap_or_default();
        }
        || {}
    });

    html! {
    <div class="min-h-screen flex flex-col bg-base-100">
        <Header current_route={props.current_route.clone()} on_logout={props.on_logout.clone()} />
        <main class={classes!(
            "flex-grow",
            "container",
            "mx-auto",
            "p-4",
        )}>
            {props.children.clone()}
        </main>
        <Footer />
    </div>
    }
}
