//! Contract sessions over JSON-RPC.

use std::sync::Arc;

use async_trait::async_trait;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, PendingTransaction, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, TxHash, U256};

use eterna_core::{
    Confirmation, PendingSubmission, PoemContract, PoemReader, PoemWriter, ProviderError,
    ProviderResult, RawPoem, WalletAddress,
};

use crate::contract::EternaVerse;
use crate::convert::{
    contract_error, format_address, parse_address, provider_error, receipt_outcome, to_u64,
};

/// The deployed poem contract, reached through one JSON-RPC endpoint.
#[derive(Debug, Clone)]
pub struct EthersPoemContract {
    provider: Provider<Http>,
    address: Address,
    local_key: Option<LocalWallet>,
    confirmations: usize,
}

impl EthersPoemContract {
    pub fn new(provider: Provider<Http>, address: Address) -> Self {
        Self {
            provider,
            address,
            local_key: None,
            confirmations: 1,
        }
    }

    /// Signs with `wallet` when the connected identity is its address.
    pub fn with_local_key(mut self, wallet: LocalWallet) -> Self {
        self.local_key = Some(wallet);
        self
    }

    pub fn with_confirmations(mut self, confirmations: usize) -> Self {
        self.confirmations = confirmations;
        self
    }
}

#[async_trait]
impl PoemContract for EthersPoemContract {
    async fn reader(&self) -> ProviderResult<Box<dyn PoemReader>> {
        let client = Arc::new(self.provider.clone());
        Ok(Box::new(ContractReader {
            contract: EternaVerse::new(self.address, client),
        }))
    }

    async fn signer(&self, identity: &WalletAddress) -> ProviderResult<Box<dyn PoemWriter>> {
        let from = parse_address(identity)?;

        match &self.local_key {
            Some(wallet) if wallet.address() == from => {
                let client =
                    SignerMiddleware::new_with_provider_chain(self.provider.clone(), wallet.clone())
                        .await
                        .map_err(|e| ProviderError::Rpc(e.to_string()))?;
                tracing::debug!(chain_id = client.signer().chain_id(), "Local signing session");
                Ok(Box::new(ContractWriter {
                    contract: EternaVerse::new(self.address, Arc::new(client)),
                    from: None,
                    provider: self.provider.clone(),
                    confirmations: self.confirmations,
                }))
            }
            Some(wallet) => Err(ProviderError::Rpc(format!(
                "no signer for {identity}, local key is {}",
                format_address(&wallet.address())
            ))),
            None => {
                // The node signs for its own unlocked accounts
                Ok(Box::new(ContractWriter {
                    contract: EternaVerse::new(self.address, Arc::new(self.provider.clone())),
                    from: Some(from),
                    provider: self.provider.clone(),
                    confirmations: self.confirmations,
                }))
            }
        }
    }
}

struct ContractReader {
    contract: EternaVerse<Provider<Http>>,
}

#[async_trait]
impl PoemReader for ContractReader {
    async fn total_poems(&self) -> ProviderResult<u64> {
        let total = self
            .contract
            .get_total_poems()
            .call()
            .await
            .map_err(contract_error)?;
        to_u64(total, "poem count")
    }

    async fn poem(&self, index: u64) -> ProviderResult<RawPoem> {
        let (sender, text, timestamp) = self
            .contract
            .get_poem(U256::from(index))
            .call()
            .await
            .map_err(contract_error)?;
        Ok(RawPoem::new(
            format_address(&sender),
            text,
            to_u64(timestamp, "poem timestamp")?,
        ))
    }
}

struct ContractWriter<M> {
    contract: EternaVerse<M>,
    from: Option<Address>,
    provider: Provider<Http>,
    confirmations: usize,
}

#[async_trait]
impl<M: Middleware + 'static> PoemWriter for ContractWriter<M> {
    async fn write_poem(&self, text: &str) -> ProviderResult<Box<dyn PendingSubmission>> {
        let mut call = self.contract.write_poem(text.to_string());
        if let Some(from) = self.from {
            call = call.from(from);
        }

        let tx_hash = call.send().await.map_err(contract_error)?.tx_hash();

        Ok(Box::new(EthersPending {
            provider: self.provider.clone(),
            tx_hash,
            confirmations: self.confirmations,
        }))
    }
}

struct EthersPending {
    provider: Provider<Http>,
    tx_hash: TxHash,
    confirmations: usize,
}

#[async_trait]
impl PendingSubmission for EthersPending {
    fn tx_hash(&self) -> String {
        format!("{:?}", self.tx_hash)
    }

    async fn wait(&self) -> ProviderResult<Confirmation> {
        let receipt = PendingTransaction::new(self.tx_hash, &self.provider)
            .confirmations(self.confirmations)
            .await
            .map_err(provider_error)?;

        receipt_outcome(self.tx_hash, receipt)
    }
}
