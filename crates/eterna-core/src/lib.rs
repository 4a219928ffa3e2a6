//! Core engine for the EternaVerse poem board.
//!
//! Holds everything the board does that is independent of a chain client or
//! a UI toolkit:
//!
//! - [`WalletProvider`] and [`PoemContract`]: capability traits injected by
//!   the host, so tests and alternative backends can substitute them
//! - [`connect`](connector::connect): account access through a wallet provider
//! - [`submit`](submitter::submit): write a poem and wait for confirmation
//! - [`load_recent`](loader::load_recent): read back the newest poems
//! - [`PoemBoard`]: the controller that sequences those operations and
//!   publishes [`BoardState`] snapshots for a render layer to observe

pub mod board;
pub mod connector;
pub mod error;
pub mod loader;
pub mod provider;
pub mod submitter;
pub mod types;

pub use board::{BoardState, PoemBoard};
pub use connector::connect;
pub use error::{ConnectError, ProviderError, ProviderResult};
pub use loader::{RECENT_WINDOW, load_recent, recent_indices};
pub use provider::{
    Confirmation, PendingSubmission, PoemContract, PoemReader, PoemWriter, WalletProvider,
};
pub use submitter::{StatusMessage, submit};
pub use types::{PoemRecord, RawPoem, WalletAddress, format_timestamp};
