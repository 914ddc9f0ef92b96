//! Export and import controls

use crate::app::AppState;
use crate::types::notice::Notice;
use dioxus::prelude::*;

#[component]
pub fn TransferControls() -> Element {
    let app_state = use_context::<AppState>();
    let mut app_state_export = app_state.clone();
    let app_state_import = app_state.clone();

    rsx! {
        div {
            class: "transfer",
            h2 { class: "card-title", "Import / Export" }
            div {
                class: "transfer-row",
                button {
                    class: "btn",
                    onclick: move |_| match app_state_export.export_quotes() {
                        Ok(path) => app_state_export
                            .notice
                            .set(Some(Notice::success(format!("Exported to {}", path.display())))),
                        Err(e) => {
                            tracing::error!("Export failed: {}", e);
                            app_state_export.notice.set(Some(Notice::error(e.to_string())));
                        }
                    },
                    "Export Quotes"
                }
                input {
                    class: "file-input",
                    r#type: "file",
                    accept: ".json,application/json",
                    onchange: move |evt: FormEvent| {
                        let mut app_state = app_state_import.clone();
                        async move {
                            let Some(file_engine) = evt.files() else {
                                return;
                            };
                            let Some(name) = file_engine.files().into_iter().next() else {
                                return;
                            };
                            match file_engine.read_file_to_string(&name).await {
                                Some(contents) => app_state.import_quotes(&contents),
                                None => {
                                    tracing::error!("Failed to read import file {}", name);
                                    app_state.notice.set(Some(Notice::error("Could not read the selected file")));
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
