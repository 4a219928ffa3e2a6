//! Shared board handle and the hook that mirrors board snapshots into a signal.

use std::sync::{Arc, OnceLock};

use dioxus::prelude::*;
use eterna_core::{BoardState, PoemBoard};

/// Process-wide board, installed by `main` before launch.
static BOARD: OnceLock<BoardHandle> = OnceLock::new();

/// Handle to the running board, provided to components via context.
#[derive(Clone)]
pub struct BoardHandle(pub Arc<PoemBoard>);

impl std::fmt::Debug for BoardHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BoardHandle").field(&self.0).finish()
    }
}

impl PartialEq for BoardHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl BoardHandle {
    pub fn board(&self) -> &PoemBoard {
        &self.0
    }

    /// Runs `connect` on the UI executor.
    pub fn spawn_connect(&self) {
        let board = self.0.clone();
        spawn(async move { board.connect().await });
    }

    /// Runs `submit` on the UI executor.
    pub fn spawn_submit(&self) {
        let board = self.0.clone();
        spawn(async move { board.submit().await });
    }
}

/// Installs the board. Returns `false` if one was already installed.
pub fn install(board: PoemBoard) -> bool {
    BOARD.set(BoardHandle(Arc::new(board))).is_ok()
}

/// The installed board, if any.
pub fn installed() -> Option<BoardHandle> {
    BOARD.get().cloned()
}

/// Subscribes to `handle` and returns a signal holding its latest snapshot.
///
/// The receiver is created before the signal is seeded from it, so no update
/// published in between can be missed.
pub fn use_board_state(handle: &BoardHandle) -> Signal<BoardState> {
    let updates = use_hook(|| handle.board().subscribe());
    let state = use_signal(|| updates.borrow().clone());

    use_future(move || {
        let mut state = state;
        let mut rx = updates.clone();
        async move {
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow_and_update().clone();
                state.set(snapshot);
            }
            tracing::debug!("Board update stream closed");
        }
    });

    state
}
