use dioxus::prelude::*;

use crate::state::BoardHandle;
use crate::view;

/// Title and tagline.
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "board-header",
            h1 { class: "board-title", "EternaVerse" }
            p { class: "board-tagline",
                em { "\u{201c}Write your soul, and it shall live forever.\u{201d}" }
            }
        }
    }
}

/// Shown until a wallet is connected. Disabled while the wallet prompt is open.
#[component]
pub fn ConnectButton(connecting: bool) -> Element {
    let handle = use_context::<BoardHandle>();

    rsx! {
        button {
            class: "primary-button connect-button",
            disabled: connecting,
            onclick: move |_| handle.spawn_connect(),
            {view::connect_label(connecting)}
        }
    }
}

/// Connection notice.
#[component]
pub fn NoticeBanner(text: String) -> Element {
    rsx! {
        div { class: "notice-banner", "{text}" }
    }
}
