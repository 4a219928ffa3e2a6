//! Wallet providers over JSON-RPC and local keys.

use async_trait::async_trait;
use ethers::providers::{Http, Middleware, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::Address;

use eterna_core::{ProviderResult, WalletProvider};

use crate::config::ConfigError;
use crate::convert::{format_address, is_method_not_found, provider_error};

/// Accounts unlocked on the connected node.
#[derive(Debug, Clone)]
pub struct RpcWallet {
    provider: Provider<Http>,
}

impl RpcWallet {
    pub fn new(provider: Provider<Http>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl WalletProvider for RpcWallet {
    async fn request_accounts(&self) -> ProviderResult<Vec<String>> {
        let requested = self
            .provider
            .request::<_, Vec<Address>>("eth_requestAccounts", Vec::<String>::new())
            .await;

        let accounts = match requested {
            Ok(accounts) => accounts,
            Err(e) if is_method_not_found(&e) => {
                tracing::debug!("Node has no eth_requestAccounts, falling back to eth_accounts");
                self.provider.get_accounts().await.map_err(provider_error)?
            }
            Err(e) => return Err(provider_error(e)),
        };

        tracing::debug!(count = accounts.len(), "Node granted accounts");
        Ok(accounts.iter().map(format_address).collect())
    }
}

/// A single account backed by a private key held in memory.
#[derive(Debug, Clone)]
pub struct KeyWallet {
    wallet: LocalWallet,
}

impl KeyWallet {
    /// Parses a hex-encoded private key, with or without a `0x` prefix.
    pub fn from_hex(key: &str) -> Result<Self, ConfigError> {
        let key = key.trim();
        let key = key.strip_prefix("0x").unwrap_or(key);
        let wallet = key
            .parse::<LocalWallet>()
            .map_err(|e| ConfigError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self { wallet })
    }

    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    pub fn wallet(&self) -> &LocalWallet {
        &self.wallet
    }
}

#[async_trait]
impl WalletProvider for KeyWallet {
    async fn request_accounts(&self) -> ProviderResult<Vec<String>> {
        Ok(vec![format_address(&self.wallet.address())])
    }
}
