//! Root Dioxus application component
//!
//! This module contains the application state shared by every component and
//! the App component that serves as the root of the UI tree. The state owns
//! the quote repository; components go through its methods so that every
//! mutation is followed by persistence and a display refresh.

use crate::quotes::display::random_quote;
use crate::quotes::{CategoryFilter, QuoteRepository};
use crate::storage::quotes::{load_filter, load_quotes, revalidate_filter, save_filter, save_quotes};
use crate::storage::settings::{load_settings, AppSettings};
use crate::storage::transfer::{default_export_dir, export_to_dir, import_and_persist, TransferError};
use crate::storage::LocalStore;
use crate::sync::{sync_ticker, HttpRemote, SyncEngine};
use crate::types::notice::Notice;
use crate::types::quote::{Quote, QuoteError};
use crate::ui::Layout;
use chrono::{DateTime, Local};
use dioxus::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

/// Fallback store location when no platform data directory exists
const FALLBACK_DATA_DIR: &str = "./quotedeck-data";

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub store: LocalStore,
    pub settings: Signal<AppSettings>,
    pub repository: Signal<QuoteRepository>,
    pub filter: Signal<CategoryFilter>,
    /// Quote currently shown in the display area
    pub current_quote: Signal<Option<Quote>>,
    pub notice: Signal<Option<Notice>>,
    pub last_sync: Signal<Option<DateTime<Local>>>,
    pub sync: Option<Arc<SyncEngine>>,
}

impl AppState {
    pub fn new() -> Self {
        let store = LocalStore::open_default().unwrap_or_else(|e| {
            tracing::warn!("{}, storing data in {}", e, FALLBACK_DATA_DIR);
            LocalStore::new(FALLBACK_DATA_DIR)
        });
        tracing::info!("Using data directory {:?}", store.root());

        let settings = load_settings();
        let repository = load_quotes(&store);
        let filter = revalidate_filter(&store, &load_filter(&store), &repository.all_categories());
        let current_quote = random_quote(&repository.filtered(&filter)).cloned();

        let sync = if settings.sync_enabled {
            match HttpRemote::new(&settings) {
                Ok(remote) => Some(Arc::new(SyncEngine::new(Arc::new(remote), store.clone()))),
                Err(e) => {
                    tracing::error!("Failed to create HTTP client, sync disabled: {}", e);
                    None
                }
            }
        } else {
            tracing::info!("Remote sync disabled in settings");
            None
        };

        tracing::info!("AppState initialized with {} quotes", repository.len());

        Self {
            store,
            settings: Signal::new(settings),
            repository: Signal::new(repository),
            filter: Signal::new(filter),
            current_quote: Signal::new(current_quote),
            notice: Signal::new(None),
            last_sync: Signal::new(None),
            sync,
        }
    }

    /// Distinct categories for the dropdown
    pub fn categories(&self) -> Vec<String> {
        self.repository.read().all_categories()
    }

    /// Show another random quote under the current filter
    pub fn show_random_quote(&mut self) {
        let next = {
            let repository = self.repository.read();
            let filter = self.filter.read();
            random_quote(&repository.filtered(&filter)).cloned()
        };
        self.current_quote.set(next);
    }

    /// Validate form input, append it, persist, and refresh the display
    pub fn add_quote(&mut self, text: &str, category: &str) -> Result<(), QuoteError> {
        let quote = Quote::from_input(text, category)?;
        self.repository.write().add(quote);
        self.persist_quotes();
        self.refresh();
        Ok(())
    }

    /// Change the category filter and remember it
    pub fn select_filter(&mut self, value: &str) {
        let filter = CategoryFilter::parse(value);
        if let Err(e) = save_filter(&self.store, &filter) {
            tracing::error!("Failed to save category filter: {}", e);
        }
        self.filter.set(filter);
        self.show_random_quote();
    }

    /// Import quotes from the text of a JSON file
    ///
    /// Invalid input leaves the collection and the stored state untouched.
    pub fn import_quotes(&mut self, json: &str) {
        let result = import_and_persist(&self.store, &mut self.repository.write(), json);
        match result {
            Ok(count) => {
                self.refresh();
                tracing::info!("Imported {} quotes from file", count);
                self.notice.set(Some(Notice::success("Quotes imported successfully!")));
            }
            Err(e @ TransferError::Storage(_)) => {
                tracing::error!("Imported quotes could not be saved: {}", e);
                self.refresh();
                self.notice.set(Some(Notice::error(e.to_string())));
            }
            Err(e) => {
                tracing::warn!("Rejected import: {:?}", e);
                self.notice.set(Some(Notice::error(e.to_string())));
            }
        }
    }

    /// Write `quotes.json` to the export directory
    pub fn export_quotes(&self) -> Result<PathBuf, TransferError> {
        let dir = default_export_dir()?;
        export_to_dir(&self.repository.read(), &dir)
    }

    /// Re-check the filter against current categories and re-roll the display
    fn refresh(&mut self) {
        let categories = self.categories();
        let filter = revalidate_filter(&self.store, &self.filter.read(), &categories);
        if *self.filter.read() != filter {
            self.filter.set(filter);
        }
        self.show_random_quote();
    }

    fn persist_quotes(&self) {
        if let Err(e) = save_quotes(&self.store, &self.repository.read()) {
            tracing::error!("Failed to save quotes: {}", e);
        }
    }

    /// Periodic sync loop; runs until the app exits
    ///
    /// A failed fetch skips the cycle and waits for the next tick.
    pub async fn run_sync_loop(mut self) {
        let Some(engine) = self.sync.clone() else {
            return;
        };

        let mut ticker = sync_ticker();
        loop {
            ticker.tick().await;

            let batch = match engine.fetch().await {
                Ok(batch) => batch,
                Err(e) => {
                    tracing::warn!("Sync cycle skipped: {}", e);
                    continue;
                }
            };

            let outcome = engine.apply(&mut self.repository.write(), batch);
            self.last_sync.set(Some(Local::now()));

            if outcome.report.has_changes() {
                self.refresh();
                self.notice.set(Some(Notice::success(outcome.report.summary())));
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let app_state = use_context_provider(AppState::new);

    use_future(move || app_state.clone().run_sync_loop());

    rsx! {
        Layout {}
    }
}
