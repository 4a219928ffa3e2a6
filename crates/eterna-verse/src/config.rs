use std::time::Duration;

use clap::Parser;
use eterna_ethers::{ChainConfig, WalletSource};

#[derive(Parser)]
#[command(name = "eterna-verse", about = "Write your soul, and it shall live forever.")]
pub struct Cli {
    /// Address of the deployed EternaVerse contract
    #[arg(long, env = "ETERNA_CONTRACT_ADDRESS")]
    pub contract_address: String,

    /// JSON-RPC endpoint of the node
    #[arg(long, env = "ETERNA_RPC_URL", default_value = "http://localhost:8545")]
    pub rpc_url: String,

    /// Hex private key to sign with instead of the node's unlocked accounts
    #[arg(long, env = "ETERNA_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Run without a wallet
    #[arg(long, conflicts_with = "private_key")]
    pub no_wallet: bool,

    /// Blocks to wait for before a poem counts as written
    #[arg(long, default_value_t = 1)]
    pub confirmations: usize,

    /// Pending transaction poll interval in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub poll_interval_ms: u64,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Resolves the chain backend configuration.
    pub fn chain_config(&self) -> ChainConfig {
        let wallet = match (&self.private_key, self.no_wallet) {
            (_, true) => WalletSource::Disabled,
            (Some(key), false) => WalletSource::LocalKey(key.clone()),
            (None, false) => WalletSource::Node,
        };

        ChainConfig::new(self.contract_address.clone())
            .with_rpc_url(self.rpc_url.clone())
            .with_wallet(wallet)
            .with_confirmations(self.confirmations)
            .with_poll_interval(Duration::from_millis(self.poll_interval_ms))
    }
}
