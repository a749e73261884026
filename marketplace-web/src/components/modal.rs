use yew::{Callback, Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: String,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Dialog rendered only while `open` is set.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }
    let close = props.on_close.reform(|_: yew::MouseEvent| ());

    html! {
        <div class="modal modal-open" role="dialog">
            <div class="modal-box max-w-2xl">
                <div class="flex justify-between items-center mb-4">
                    <h3 class="font-bold text-lg">{props.title.clone()}</h3>
                    <button class="btn btn-sm btn-circle btn-ghost" onclick={close.clone()}>{"✕"}</button>
                </div>
                {props.children.clone()}
            </div>
            <div class="modal-backdrop" onclick={close}></div>
        </div>
    }
}
