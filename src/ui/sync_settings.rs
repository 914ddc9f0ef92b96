//! Server sync settings card
//!
//! Edits are saved immediately; the sync engine picks them up on next launch.

use crate::app::AppState;
use crate::storage::settings::save_settings;
use dioxus::prelude::*;

#[component]
pub fn SyncSettings() -> Element {
    let app_state = use_context::<AppState>();
    let settings = app_state.settings.read().clone();
    let remote_url = settings.remote_url.clone();
    let push_url = settings.push_url.clone();
    let mut app_state_toggle = app_state.clone();
    let mut app_state_remote = app_state.clone();
    let mut app_state_push = app_state.clone();

    rsx! {
        div {
            class: "form",
            h2 { class: "card-title", "Server Sync" }

            div {
                class: "settings-row",
                span { "Sync with server every 30 seconds" }
                button {
                    class: if settings.sync_enabled { "toggle-switch active" } else { "toggle-switch" },
                    onclick: move |_| {
                        let mut settings = app_state_toggle.settings.write();
                        settings.sync_enabled = !settings.sync_enabled;
                        if let Err(error) = save_settings(&settings) {
                            tracing::error!("Failed to save settings: {}", error);
                        }
                    },
                    div { class: "toggle-switch-knob" }
                }
            }

            label { class: "filter-label", "Fetch quotes from" }
            input {
                class: "field",
                r#type: "url",
                value: "{remote_url}",
                oninput: move |e| {
                    let mut settings = app_state_remote.settings.write();
                    settings.remote_url = e.value();
                    if let Err(error) = save_settings(&settings) {
                        tracing::error!("Failed to save settings: {}", error);
                    }
                },
            }

            label { class: "filter-label", "Push quotes to" }
            input {
                class: "field",
                r#type: "url",
                value: "{push_url}",
                oninput: move |e| {
                    let mut settings = app_state_push.settings.write();
                    settings.push_url = e.value();
                    if let Err(error) = save_settings(&settings) {
                        tracing::error!("Failed to save settings: {}", error);
                    }
                },
            }

            p {
                class: "sync-status",
                "Changes apply the next time QuoteDeck starts."
            }
        }
    }
}
