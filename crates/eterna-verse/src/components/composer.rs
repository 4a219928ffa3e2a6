//! Poem compose box with submit button and status line.

use dioxus::prelude::*;
use eterna_core::BoardState;

use crate::state::BoardHandle;
use crate::view;

/// Composer shown once a wallet is connected.
#[component]
pub fn Composer(state: BoardState) -> Element {
    let handle = use_context::<BoardHandle>();
    let draft_handle = handle.clone();

    let can_submit = state.can_submit();
    let label = view::submit_label(&state);
    let wallet = state
        .wallet
        .as_ref()
        .map(|w| w.to_string())
        .unwrap_or_default();
    let status = state
        .status
        .as_ref()
        .map(|s| (view::status_class(s), s.to_string()));

    rsx! {
        div { class: "composer",
            p { class: "wallet-line", "Connected as {wallet}" }

            textarea {
                class: "composer-input",
                rows: "4",
                placeholder: view::DRAFT_PLACEHOLDER,
                value: "{state.draft}",
                disabled: state.submitting,
                oninput: move |evt| draft_handle.board().set_draft(evt.value()),
            }

            button {
                class: "primary-button submit-button",
                disabled: !can_submit,
                onclick: move |_| {
                    if can_submit {
                        handle.spawn_submit();
                    }
                },
                "{label}"
            }

            if let Some((class, text)) = status {
                p { class: "{class}", "{text}" }
            }
        }
    }
}
