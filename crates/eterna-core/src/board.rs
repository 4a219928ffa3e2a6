//! The board controller.
//!
//! [`PoemBoard`] owns the injected capabilities and the view state. Each
//! operation runs to completion on the caller's task, folds its outcome into
//! [`BoardState`] and publishes the new snapshot on a watch channel, so a
//! render layer only ever has to observe snapshots.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::connector;
use crate::error::{ConnectError, ProviderResult};
use crate::loader;
use crate::provider::{PoemContract, WalletProvider};
use crate::submitter::{self, StatusMessage};
use crate::types::{PoemRecord, WalletAddress};

/// Everything the render layer draws.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    /// The connected account, if any.
    pub wallet: Option<WalletAddress>,
    /// The poem being composed.
    pub draft: String,
    /// The newest poems, newest first.
    pub poems: Vec<PoemRecord>,
    /// Outcome of the last submission attempt.
    pub status: Option<StatusMessage>,
    /// Outcome of the last failed connection attempt.
    pub notice: Option<ConnectError>,
    /// A wallet connection request is outstanding.
    pub connecting: bool,
    /// A submission is awaiting confirmation.
    pub submitting: bool,
    /// A reload is in flight.
    pub loading: bool,
}

impl BoardState {
    pub fn is_connected(&self) -> bool {
        self.wallet.is_some()
    }

    /// Whether the submit button should accept a click.
    pub fn can_submit(&self) -> bool {
        self.is_connected() && !self.submitting
    }

    /// Whether the connect button should accept a click.
    pub fn can_connect(&self) -> bool {
        !self.connecting
    }
}

/// Controller for the poem board.
pub struct PoemBoard {
    wallet: Option<Arc<dyn WalletProvider>>,
    contract: Arc<dyn PoemContract>,
    state: watch::Sender<BoardState>,
    /// Bumped by every reload; only the newest reload may publish its list.
    reload_generation: AtomicU64,
}

impl std::fmt::Debug for PoemBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoemBoard")
            .field("has_wallet_provider", &self.wallet.is_some())
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl PoemBoard {
    /// Creates a board. Pass `None` for `wallet` when no provider is installed.
    pub fn new(wallet: Option<Arc<dyn WalletProvider>>, contract: Arc<dyn PoemContract>) -> Self {
        let (state, _) = watch::channel(BoardState::default());
        Self {
            wallet,
            contract,
            state,
            reload_generation: AtomicU64::new(0),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> BoardState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<BoardState> {
        self.state.subscribe()
    }

    /// Replaces the draft text.
    pub fn set_draft(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.send_modify(|s| s.draft = text);
    }

    /// Connects the wallet and, on success, loads the board.
    ///
    /// Does nothing while a previous connection request is outstanding.
    pub async fn connect(&self) {
        let started = self.state.send_if_modified(|s| {
            if s.connecting {
                return false;
            }
            s.connecting = true;
            true
        });
        if !started {
            tracing::debug!("Connection already in progress");
            return;
        }

        match connector::connect(self.wallet.as_deref()).await {
            Ok(address) => {
                self.state.send_modify(|s| {
                    s.wallet = Some(address);
                    s.notice = None;
                    s.connecting = false;
                });
                self.reload().await;
            }
            Err(notice) => {
                self.state.send_modify(|s| {
                    s.notice = Some(notice);
                    s.connecting = false;
                });
            }
        }
    }

    /// Submits the current draft and reloads the board once it is mined.
    ///
    /// Does nothing while a previous submission is still pending.
    pub async fn submit(&self) {
        let mut request = None;
        self.state.send_if_modified(|s| {
            if s.submitting {
                return false;
            }
            match submitter::validate(s.wallet.as_ref(), &s.draft) {
                Ok(identity) => {
                    request = Some((identity.clone(), s.draft.clone()));
                    s.submitting = true;
                }
                Err(status) => s.status = Some(status),
            }
            true
        });

        let Some((identity, draft)) = request else {
            tracing::debug!("Submission skipped");
            return;
        };

        let result = submitter::submit(self.contract.as_ref(), Some(&identity), &draft, |_| {
            self.state
                .send_modify(|s| s.status = Some(StatusMessage::Writing));
        })
        .await;

        match result {
            Ok(_) => {
                self.state.send_modify(|s| {
                    s.status = Some(StatusMessage::Written);
                    s.draft.clear();
                    s.submitting = false;
                });
                self.reload().await;
            }
            Err(status) => {
                self.state.send_modify(|s| {
                    s.status = Some(status);
                    s.submitting = false;
                });
            }
        }
    }

    /// Reloads the newest poems.
    ///
    /// On failure the previously shown list is kept. When reloads overlap,
    /// only the one started last updates the list or clears `loading`.
    pub async fn reload(&self) {
        let mut generation = 0;
        self.state.send_modify(|s| {
            generation = self.reload_generation.fetch_add(1, Ordering::SeqCst) + 1;
            s.loading = true;
        });

        let result = self.fetch_recent().await;
        if let Err(e) = &result {
            tracing::warn!("Failed to load poems: {}", e);
        }

        let applied = self.state.send_if_modified(|s| {
            if self.reload_generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            if let Ok(poems) = result {
                s.poems = poems;
            }
            s.loading = false;
            true
        });
        if !applied {
            tracing::debug!(generation, "Discarded superseded reload");
        }
    }

    async fn fetch_recent(&self) -> ProviderResult<Vec<PoemRecord>> {
        let reader = self.contract.reader().await?;
        loader::load_recent(reader.as_ref()).await
    }
}
