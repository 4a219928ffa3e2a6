//! Configuration for the chain backend

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Errors raised while turning configuration into a backend
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The RPC endpoint is not a valid URL
    #[error("invalid rpc url: {0}")]
    InvalidRpcUrl(String),

    /// The contract address is not a 20-byte hex address
    #[error("invalid contract address: {0}")]
    InvalidContractAddress(String),

    /// The private key could not be parsed
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
}

/// Where the board gets its accounts from
#[derive(Clone, Default, PartialEq, Eq)]
pub enum WalletSource {
    /// Accounts unlocked on the node
    #[default]
    Node,
    /// A hex-encoded private key
    LocalKey(String),
    /// No wallet; the board is read-only
    Disabled,
}

impl fmt::Debug for WalletSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletSource::Node => f.write_str("Node"),
            WalletSource::LocalKey(_) => f.write_str("LocalKey(<redacted>)"),
            WalletSource::Disabled => f.write_str("Disabled"),
        }
    }
}

/// Configuration for the chain backend
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// JSON-RPC endpoint
    pub rpc_url: String,
    /// Address of the deployed poem contract
    pub contract_address: String,
    /// Account source
    pub wallet: WalletSource,
    /// Blocks to wait for before a submission counts as confirmed
    pub confirmations: usize,
    /// How often pending transactions are polled
    pub poll_interval: Duration,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            contract_address: String::new(),
            wallet: WalletSource::default(),
            confirmations: 1,
            poll_interval: Duration::from_secs(2),
        }
    }
}

impl ChainConfig {
    /// Create a configuration for a deployed contract
    pub fn new(contract_address: impl Into<String>) -> Self {
        Self {
            contract_address: contract_address.into(),
            ..Self::default()
        }
    }

    /// Set the JSON-RPC endpoint
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    /// Set the account source
    pub fn with_wallet(mut self, wallet: WalletSource) -> Self {
        self.wallet = wallet;
        self
    }

    /// Set the confirmation depth
    pub fn with_confirmations(mut self, confirmations: usize) -> Self {
        self.confirmations = confirmations.max(1);
        self
    }

    /// Set the transaction poll interval
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}
