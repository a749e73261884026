use i18nrs::yew::use_translation;
use shared::actions;
use shared::models::{Comment, Id};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::api::use_client;
use crate::browser::{confirm, input_value};
use crate::components::alert::AlertBanner;
use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::models::app_state::AppState;

#[derive(Properties, PartialEq)]
pub struct CommentModalProps {
    pub open: bool,
    pub product_id: Id,
    pub product_name: String,
    pub on_close: Callback<()>,
}

#[function_component(CommentModal)]
pub fn comment_modal(props: &CommentModalProps) -> Html {
    let (i18n, ..) = use_translation();
    let client = use_client();
    let is_admin = use_selector(|state: &AppState| {
        state.session.as_ref().is_some_and(|session| session.is_admin())
    });
    let comments = use_state(|| None::<Vec<Comment>>);
    let draft = use_state(String::new);
    let error = use_state(|| None::<String>);

    {
        let client = client.clone();
        let comments = comments.clone();
        let error = error.clone();
        use_effect_with((props.open, props.product_id), move |&(open, product_id)| {
            if open {
                spawn_local(async move {
                    match client.product_comments(product_id).await {
                        Ok(list) => comments.set(Some(list)),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                });
            }
            || ()
        });
    }

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
        let comments = comments.clone();
        let draft = draft.clone();
        let error = error.clone();
        let product_id = props.product_id;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let client = client.clone();
            let comments = comments.clone();
            let draft = draft.clone();
            let error = error.clone();
            let mut list = (*comments).clone().unwrap_or_default();
            let text = (*draft).clone();
            spawn_local(async move {
                match actions::add_comment(&client, &mut list, product_id, &text).await {
                    Ok(()) => {
                        comments.set(Some(list));
                        draft.set(String::new());
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_delete = {
        let comments = comments.clone();
        let error = error.clone();
        let prompt = i18n.t("comments.confirm_delete");
        move |id: Id| {
            let client = client.clone();
            let comments = comments.clone();
            let error = error.clone();
            let prompt = prompt.clone();
            Callback::from(move |_: MouseEvent| {
                let client = client.clone();
                let comments = comments.clone();
                let error = error.clone();
                let prompt = prompt.clone();
                let mut list = (*comments).clone().unwrap_or_default();
                spawn_local(async move {
                    match actions::delete_comment(&client, &mut list, id, || confirm(&prompt)).await {
                        Ok(true) => comments.set(Some(list)),
                        Ok(false) => {}
                        Err(err) => error.set(Some(err.to_string())),
                    }
                });
            })
        }
    };

    let list = match (*comments).clone() {
        None => html! { <Loading /> },
        Some(list) if list.is_empty() => html! { <p class="opacity-70">{i18n.t("comments.empty")}</p> },
        Some(list) => html! {
            <ul class="space-y-3 max-h-80 overflow-y-auto">
            {
                for list.into_iter().map(|comment| html! {
                    <li key={comment.id} class="bg-base-200 rounded-box p-3">
                        <div class="flex justify-between text-sm opacity-70">
                            <span class="font-semibold">{comment.author().to_string()}</span>
                            <span>{comment.created_at.clone().unwrap_or_default()}</span>
                        </div>
                        <p class="mt-1">{comment.comment.clone()}</p>
                        if *is_admin {
                            <button class="btn btn-ghost btn-xs text-error" onclick={on_delete(comment.id)}>
                                {i18n.t("common.delete")}
                            </button>
                        }
                    </li>
                })
            }
            </ul>
        },
    };

    let title = format!("{} · {}", i18n.t("comments.title"), props.product_name);

    html! {
        <Modal open={props.open} {title} on_close={props.on_close.clone()}>
            if let Some(message) = (*error).clone() {
                <AlertBanner {message} />
            }
            {list}
            <form class="mt-4 flex flex-col gap-2" {onsubmit}>
                <textarea
                    class="textarea textarea-bordered"
                    placeholder={i18n.t("comments.placeholder")}
                    value={(*draft).clone()}
                    {oninput}
                />
                <button type="submit" class="btn btn-primary btn-sm self-end">{i18n.t("comments.send")}</button>
            </form>
        </Modal>
    }
}
