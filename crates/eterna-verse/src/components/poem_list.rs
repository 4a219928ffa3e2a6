//! The latest poems, newest first.

use dioxus::prelude::*;
use eterna_core::PoemRecord;

use crate::view;

#[component]
pub fn PoemList(poems: Vec<PoemRecord>, loading: bool) -> Element {
    rsx! {
        section { class: "poem-list",
            div { class: "panel-header",
                h2 { class: "panel-title", "🕊 Eternal Verses" }
                if loading {
                    span { class: "panel-loading", "loading..." }
                }
            }

            if poems.is_empty() {
                p { class: "poem-empty", {view::EMPTY_BOARD} }
            } else {
                for (index, record) in poems.iter().enumerate() {
                    PoemCard { key: "{index}", record: record.clone() }
                }
            }
        }
    }
}

/// A single poem.
#[component]
fn PoemCard(record: PoemRecord) -> Element {
    let text = view::quoted(&record);
    let byline = view::byline(&record);

    rsx! {
        article { class: "poem-card",
            p { class: "poem-text", "{text}" }
            small { class: "poem-byline", "{byline}" }
        }
    }
}
