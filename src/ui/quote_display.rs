use crate::app::AppState;
use crate::quotes::display::render;
use dioxus::prelude::*;

#[component]
pub fn QuoteDisplay() -> Element {
    let app_state = use_context::<AppState>();
    let text = render(app_state.current_quote.read().as_ref());
    let mut app_state_next = app_state.clone();

    rsx! {
        div {
            class: "quote-display",
            p { class: "quote-text", "{text}" }
            button {
                class: "btn btn-primary",
                onclick: move |_| app_state_next.show_random_quote(),
                "Show New Quote"
            }
        }
    }
}
