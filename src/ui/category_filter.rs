use crate::app::AppState;
use crate::quotes::filter::ALL_CATEGORIES;
use dioxus::prelude::*;

#[component]
pub fn CategoryFilterSelect() -> Element {
    let app_state = use_context::<AppState>();
    let categories = app_state.categories();
    let selected = app_state.filter.read().as_str().to_string();
    let mut app_state_filter = app_state.clone();

    rsx! {
        div {
            class: "filter",
            label { class: "filter-label", "Filter by category" }
            select {
                class: "field",
                value: "{selected}",
                onchange: move |evt| app_state_filter.select_filter(&evt.value()),
                option {
                    value: ALL_CATEGORIES,
                    selected: selected == ALL_CATEGORIES,
                    "All Categories"
                }
                for category in categories {
                    option {
                        key: "{category}",
                        value: "{category}",
                        selected: selected == category,
                        "{category}"
                    }
                }
            }
        }
    }
}
