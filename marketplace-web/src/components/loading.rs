use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex justify-center items-center py-12" role="status">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}
