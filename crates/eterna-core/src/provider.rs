//! Capability traits the board consumes.
//!
//! The host injects implementations of these traits instead of the board
//! reaching for a global wallet object. `eterna-ethers` provides the EVM
//! implementations; tests provide in-memory ones.

use async_trait::async_trait;

use crate::error::ProviderResult;
use crate::types::{RawPoem, WalletAddress};

/// Grants access to the user's accounts.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Requests account access and returns the granted addresses.
    ///
    /// May return an empty list when the user has no unlocked account.
    async fn request_accounts(&self) -> ProviderResult<Vec<String>>;
}

/// The deployed poem contract.
#[async_trait]
pub trait PoemContract: Send + Sync {
    /// Opens a read-only session.
    async fn reader(&self) -> ProviderResult<Box<dyn PoemReader>>;

    /// Opens a signing session bound to `identity`.
    async fn signer(&self, identity: &WalletAddress) -> ProviderResult<Box<dyn PoemWriter>>;
}

/// Read-only view of the contract.
#[async_trait]
pub trait PoemReader: Send + Sync {
    /// Total number of poems ever written.
    async fn total_poems(&self) -> ProviderResult<u64>;

    /// The poem stored at `index`.
    async fn poem(&self, index: u64) -> ProviderResult<RawPoem>;
}

/// State-changing view of the contract.
#[async_trait]
pub trait PoemWriter: Send + Sync {
    /// Sends a `writePoem` transaction and returns once it is broadcast.
    async fn write_poem(&self, text: &str) -> ProviderResult<Box<dyn PendingSubmission>>;
}

/// A broadcast transaction awaiting confirmation.
#[async_trait]
pub trait PendingSubmission: Send + Sync {
    /// Hash of the broadcast transaction.
    fn tx_hash(&self) -> String;

    /// Suspends until the transaction is mined.
    ///
    /// A reverted transaction is an error.
    async fn wait(&self) -> ProviderResult<Confirmation>;
}

/// A mined submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub tx_hash: String,
    pub block_number: Option<u64>,
}
