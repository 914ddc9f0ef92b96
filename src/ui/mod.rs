//! UI components for QuoteDeck
//!
//! This module contains all user interface components built with Dioxus.

#![allow(non_snake_case)]

pub mod category_filter;
pub mod notice;
pub mod quote_display;
pub mod quote_form;
pub mod sync_settings;
pub mod transfer;

use crate::ui::category_filter::CategoryFilterSelect;
use crate::ui::notice::{NoticeBanner, SyncStatus};
use crate::ui::quote_display::QuoteDisplay;
use crate::ui::quote_form::AddQuoteForm;
use crate::ui::sync_settings::SyncSettings;
use crate::ui::transfer::TransferControls;
use dioxus::prelude::*;

const STYLE: &str = include_str!("../../assets/main.css");

/// Main window layout
#[component]
pub fn Layout() -> Element {
    rsx! {
        style { {STYLE} }
        div {
            class: "deck",

            h1 { class: "deck-title", "Dynamic Quote Generator" }

            NoticeBanner {}

            div {
                class: "card",
                CategoryFilterSelect {}
                QuoteDisplay {}
            }

            div {
                class: "card",
                AddQuoteForm {}
            }

            div {
                class: "card",
                TransferControls {}
            }

            div {
                class: "card",
                SyncSettings {}
            }

            SyncStatus {}
        }
    }
}
