//! Notice banner and sync status line

use crate::app::AppState;
use crate::types::notice::NoticeTone;
use dioxus::prelude::*;

#[component]
pub fn NoticeBanner() -> Element {
    let app_state = use_context::<AppState>();
    let mut notice_signal = app_state.notice;
    let notice = notice_signal.read().clone();

    match notice {
        None => rsx! {},
        Some(notice) => {
            let tone_class = match notice.tone {
                NoticeTone::Success => "notice notice-success",
                NoticeTone::Error => "notice notice-error",
            };
            rsx! {
                div {
                    class: tone_class,
                    span { "{notice.message}" }
                    button {
                        class: "notice-close",
                        title: "Dismiss",
                        onclick: move |_| notice_signal.set(None),
                        "×"
                    }
                }
            }
        }
    }
}

#[component]
pub fn SyncStatus() -> Element {
    let app_state = use_context::<AppState>();
    let enabled = app_state.sync.is_some();
    let status = match (enabled, *app_state.last_sync.read()) {
        (false, _) => "Server sync is off".to_string(),
        (true, None) => "Waiting for first server sync".to_string(),
        (true, Some(at)) => format!("Last synced at {}", at.format("%H:%M:%S")),
    };

    rsx! {
        p { class: "sync-status", "{status}" }
    }
}
