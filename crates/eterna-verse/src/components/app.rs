//! Root component.

use dioxus::prelude::*;

use crate::state::{self, BoardHandle};

use super::{Composer, ConnectButton, Header, NoticeBanner, PoemList};

/// Root application component.
#[component]
pub fn App() -> Element {
    match state::installed() {
        Some(handle) => rsx! {
            Board { handle }
        },
        None => rsx! {
            main { class: "board",
                Header {}
                NoticeBanner { text: "No poem board is configured." }
            }
        },
    }
}

/// The board: header, connect or compose, then the latest poems.
#[component]
fn Board(handle: BoardHandle) -> Element {
    use_context_provider(|| handle.clone());
    let state = state::use_board_state(&handle);

    use_drop(|| tracing::info!("Shutting down EternaVerse"));

    let current = state.read().clone();

    rsx! {
        main { class: "board",
            Header {}

            if let Some(notice) = &current.notice {
                NoticeBanner { text: notice.to_string() }
            }

            if current.is_connected() {
                Composer { state: current.clone() }
            } else {
                ConnectButton { connecting: current.connecting }
            }

            PoemList { poems: current.poems.clone(), loading: current.loading }
        }
    }
}
