//! Wires a [`ChainConfig`] into board capabilities.

use std::sync::Arc;

use ethers::providers::{Http, Provider};
use ethers::types::Address;

use eterna_core::{PoemBoard, PoemContract, WalletProvider};

use crate::client::EthersPoemContract;
use crate::config::{ChainConfig, ConfigError, WalletSource};
use crate::convert::format_address;
use crate::wallet::{KeyWallet, RpcWallet};

/// The capabilities a board runs against.
pub struct Backend {
    pub wallet: Option<Arc<dyn WalletProvider>>,
    pub contract: Arc<dyn PoemContract>,
}

impl Backend {
    /// Builds the backend. No network calls are made here.
    pub fn from_config(config: &ChainConfig) -> Result<Self, ConfigError> {
        let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
            .map_err(|e| ConfigError::InvalidRpcUrl(format!("{}: {}", config.rpc_url, e)))?
            .interval(config.poll_interval);

        let address: Address = config
            .contract_address
            .parse()
            .map_err(|e| {
                ConfigError::InvalidContractAddress(format!("{:?}: {}", config.contract_address, e))
            })?;

        let mut contract = EthersPoemContract::new(provider.clone(), address)
            .with_confirmations(config.confirmations);

        let wallet: Option<Arc<dyn WalletProvider>> = match &config.wallet {
            WalletSource::Node => Some(Arc::new(RpcWallet::new(provider))),
            WalletSource::LocalKey(key) => {
                let key = KeyWallet::from_hex(key)?;
                tracing::info!(address = %format_address(&key.address()), "Using local signing key");
                contract = contract.with_local_key(key.wallet().clone());
                Some(Arc::new(key))
            }
            WalletSource::Disabled => None,
        };

        tracing::info!(
            rpc_url = %config.rpc_url,
            contract = %format_address(&address),
            wallet = ?config.wallet,
            "Chain backend ready"
        );

        Ok(Self {
            wallet,
            contract: Arc::new(contract),
        })
    }

    /// Creates a board over these capabilities.
    pub fn into_board(self) -> PoemBoard {
        PoemBoard::new(self.wallet, self.contract)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    #[test]
    fn test_node_wallet_by_default() {
        let backend = Backend::from_config(&ChainConfig::new(CONTRACT)).unwrap();
        assert!(backend.wallet.is_some());
    }

    #[test]
    fn test_disabled_wallet() {
        let config = ChainConfig::new(CONTRACT).with_wallet(WalletSource::Disabled);
        let backend = Backend::from_config(&config).unwrap();
        assert!(backend.wallet.is_none());
    }

    #[test]
    fn test_rejects_bad_contract_address() {
        let result = Backend::from_config(&ChainConfig::new("0xnope"));
        assert!(matches!(result, Err(ConfigError::InvalidContractAddress(_))));

        let result = Backend::from_config(&ChainConfig::new(""));
        assert!(matches!(result, Err(ConfigError::InvalidContractAddress(_))));
    }

    #[test]
    fn test_rejects_bad_rpc_url() {
        let config = ChainConfig::new(CONTRACT).with_rpc_url("not a url");
        assert!(matches!(
            Backend::from_config(&config),
            Err(ConfigError::InvalidRpcUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_without_wallet_board_reports_missing_provider() {
        let config = ChainConfig::new(CONTRACT).with_wallet(WalletSource::Disabled);
        let board = Backend::from_config(&config).unwrap().into_board();

        board.connect().await;

        assert_eq!(
            board.snapshot().notice,
            Some(eterna_core::ConnectError::ProviderUnavailable)
        );
    }
}
