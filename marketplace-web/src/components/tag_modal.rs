use i18nrs::yew::use_translation;
use shared::actions;
use shared::models::{Id, Tag};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::use_client;
use crate::browser::{confirm, input_value};
use crate::components::alert::AlertBanner;
use crate::components::modal::Modal;

#[derive(Properties, PartialEq)]
pub struct TagModalProps {
    pub open: bool,
    pub product_id: Id,
    pub tags: Vec<Tag>,
    /// Owners and admins may add and remove tags.
    #[prop_or_default]
    pub editable: bool,
    pub on_close: Callback<()>,
    pub on_change: Callback<Vec<Tag>>,
}

#[function_component(TagModal)]
pub fn tag_modal(props: &TagModalProps) -> Html {
    let (i18n, ..) = use_translation();
    let client = use_client();
    let draft = use_state(String::new);
    let error = use_state(|| None::<String>);

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                draft.set(value);
            }
        })
    };

    let onsubmit = {
        let client = client.clone();
        let draft = draft.clone();
        let error = error.clone();
        let on_change = props.on_change.clone();
        let tags = props.tags.clone();
        let product_id = props.product_id;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let client = client.clone();
            let draft = draft.clone();
            let error = error.clone();
            let on_change = on_change.clone();
            let mut tags = tags.clone();
            let name = (*draft).clone();
            spawn_local(async move {
                match actions::add_tag(&client, &mut tags, product_id, &name).await {
                    Ok(()) => {
                        draft.set(String::new());
                        error.set(None);
                        on_change.emit(tags);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let remove = {
        let error = error.clone();
        let on_change = props.on_change.clone();
        let tags = props.tags.clone();
        let prompt = i18n.t("tags.confirm_delete");
        move |id: Id| {
            let client = client.clone();
            let error = error.clone();
            let on_change = on_change.clone();
            let tags = tags.clone();
            let prompt = prompt.clone();
            Callback::from(move |_: MouseEvent| {
                let client = client.clone();
                let error = error.clone();
                let on_change = on_change.clone();
                let mut tags = tags.clone();
                let prompt = prompt.clone();
                spawn_local(async move {
                    match actions::delete_tag(&client, &mut tags, id, || confirm(&prompt)).await {
                        Ok(true) => on_change.emit(tags),
                        Ok(false) => {}
                        Err(err) => error.set(Some(err.to_string())),
                    }
                });
            })
        }
    };

    html! {
        <Modal open={props.open} title={i18n.t("tags.title")} on_close={props.on_close.clone()}>
            if let Some(message) = (*error).clone() {
                <AlertBanner {message} />
            }
            <div class="flex flex-wrap gap-2">
                if props.tags.is_empty() {
                    <span class="opacity-70">{i18n.t("tags.empty")}</span>
                }
                {
                    for props.tags.iter().map(|tag| html! {
                        <span key={tag.id} class="badge badge-secondary gap-1">
                            {tag.tag_name.clone()}
                            if props.editable {
                                <button class="btn btn-ghost btn-xs px-1" onclick={remove(tag.id)}>{"✕"}</button>
                            }
                        </span>
                    })
                }
            </div>
            if props.editable {
                <form class="join mt-4 w-full" {onsubmit}>
                    <input
                        class="input input-bordered join-item w-full"
                        placeholder={i18n.t("tags.placeholder")}
                        value={(*draft).clone()}
                        {oninput}
                    />
                    <button type="submit" class="btn btn-primary join-item">{i18n.t("tags.add")}</button>
                </form>
            }
        </Modal>
    }
}
