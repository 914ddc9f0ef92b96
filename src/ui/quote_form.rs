//! Add-quote form

use crate::app::AppState;
use crate::types::notice::Notice;
use dioxus::prelude::*;

#[component]
pub fn AddQuoteForm() -> Element {
    let mut text = use_signal(String::new);
    let mut category = use_signal(String::new);
    let app_state = use_context::<AppState>();
    let mut app_state_add = app_state.clone();

    let handle_add = move |_| match app_state_add.add_quote(&text(), &category()) {
        Ok(()) => {
            text.set(String::new());
            category.set(String::new());
        }
        Err(e) => app_state_add.notice.set(Some(Notice::error(e.to_string()))),
    };

    rsx! {
        div {
            class: "form",
            h2 { class: "card-title", "Add a Quote" }
            input {
                class: "field",
                r#type: "text",
                placeholder: "Enter a new quote",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
            }
            input {
                class: "field",
                r#type: "text",
                placeholder: "Enter quote category",
                value: "{category}",
                oninput: move |evt| category.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                onclick: handle_add,
                "Add Quote"
            }
        }
    }
}
