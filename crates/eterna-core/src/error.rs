//! Error types for eterna-core

use thiserror::Error;

/// Failures reported by a wallet provider or contract backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The user declined the request in their wallet
    #[error("request rejected by the user")]
    Rejected,

    /// Transport or node-level failure
    #[error("rpc error: {0}")]
    Rpc(String),

    /// The transaction was mined but reverted
    #[error("transaction reverted: {0}")]
    Reverted(String),

    /// The transaction left the mempool without a receipt
    #[error("transaction dropped: {0}")]
    Dropped(String),

    /// A response could not be converted into a typed value
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Result type for provider and contract calls
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Outcome of a failed wallet connection, shown to the user as a notice
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// No wallet provider is present in the host environment
    #[error("🦊 Please install a wallet provider.")]
    ProviderUnavailable,

    /// The provider granted access to zero accounts
    #[error("⚠️ No wallet connected.")]
    NoAccount,

    /// The provider failed or the user rejected the request
    #[error("❌ Wallet connection failed.")]
    Failed(#[source] ProviderError),
}
