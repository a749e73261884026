use yew::{Callback, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// 1-based current page.
    pub page: usize,
    pub total_pages: usize,
    pub on_change: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }
    let page = props.page;
    let go_to = |target: usize| {
        let on_change = props.on_change.clone();
        Callback::from(move |_: yew::MouseEvent| on_change.emit(target))
    };

    html! {
        <div class="join flex justify-center mt-6">
            <button class="join-item btn" disabled={page <= 1} onclick={go_to(page.saturating_sub(1))}>{"«"}</button>
            {
                for (1..=props.total_pages).map(|number| html! {
                    <button
                        class={classes!("join-item", "btn", (number == page).then_some("btn-active"))}
                        onclick={go_to(number)}
                    >
                        {number}
                    </button>
                })
            }
            <button class="join-item btn" disabled={page >= props.total_pages} onclick={go_to(page + 1)}>{"»"}</button>
        </div>
    }
}
