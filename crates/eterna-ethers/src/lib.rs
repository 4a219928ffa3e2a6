//! EVM backend for the EternaVerse poem board.
//!
//! Implements the `eterna-core` capability traits over an Ethereum JSON-RPC
//! endpoint:
//!
//! - [`RpcWallet`]: accounts managed by the node (`eth_requestAccounts`)
//! - [`KeyWallet`]: a single local private key
//! - [`EthersPoemContract`]: reads and writes against the deployed contract
//!
//! [`Backend::from_config`] wires them together from a [`ChainConfig`].

pub mod backend;
pub mod client;
pub mod config;
pub mod contract;
pub mod convert;
pub mod wallet;

pub use backend::Backend;
pub use client::EthersPoemContract;
pub use config::{ChainConfig, ConfigError, WalletSource};
pub use contract::EternaVerse;
pub use wallet::{KeyWallet, RpcWallet};
