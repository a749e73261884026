use yew::{AttrValue, Callback, Html, Properties, function_component, html};

use crate::browser::input_value;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: String,
    pub value: String,
    pub on_input: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub multiline: bool,
}

/// Labelled form input bound to a string.
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let on_input = props.on_input.clone();
    let oninput = Callback::from(move |event: yew::events::InputEvent| {
        if let Some(value) = input_value(&event) {
            on_input.emit(value);
        }
    });

    html! {
        <div class="form-control w-full">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{props.label.clone()}</span>
            </label>
            if props.multiline {
                <textarea
                    id={props.id.clone()}
                    class="textarea textarea-bordered"
                    required={props.required}
                    value={props.value.clone()}
                    {oninput}
                />
            } else {
                <input
                    id={props.id.clone()}
                    class="input input-bordered w-full"
                    type={props.kind.clone()}
                    required={props.required}
                    value={props.value.clone()}
                    {oninput}
                />
            }
        </div>
    }
}
