//! In-memory wallet and contract doubles that count calls.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use eterna_core::{
    Confirmation, PendingSubmission, PoemContract, PoemReader, PoemWriter, ProviderError,
    ProviderResult, RawPoem, WalletAddress, WalletProvider,
};
use tokio::sync::Notify;

/// Wallet that returns a fixed answer.
pub struct MockWallet {
    accounts: ProviderResult<Vec<String>>,
    /// When set, account requests wait until notified.
    gate: Option<Arc<Notify>>,
    pub requests: AtomicUsize,
}

impl MockWallet {
    pub fn with_accounts(accounts: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            accounts: Ok(accounts.iter().map(|a| a.to_string()).collect()),
            gate: None,
            requests: AtomicUsize::new(0),
        })
    }

    pub fn failing(err: ProviderError) -> Arc<Self> {
        Arc::new(Self {
            accounts: Err(err),
            gate: None,
            requests: AtomicUsize::new(0),
        })
    }

    /// Wallet whose account request blocks until the returned gate is notified.
    pub fn gated(accounts: &[&str]) -> (Arc<Self>, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let wallet = Arc::new(Self {
            accounts: Ok(accounts.iter().map(|a| a.to_string()).collect()),
            gate: Some(gate.clone()),
            requests: AtomicUsize::new(0),
        });
        (wallet, gate)
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn request_accounts(&self) -> ProviderResult<Vec<String>> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.accounts.clone()
    }
}

/// Shared state behind the contract double.
#[derive(Default)]
pub struct ContractState {
    pub poems: Mutex<Vec<RawPoem>>,
    /// Index whose read fails, if any.
    pub fail_read_at: Mutex<Option<u64>>,
    pub fail_total: Mutex<bool>,
    pub fail_write: Mutex<bool>,
    pub revert: Mutex<bool>,
    /// When set, confirmation waits until notified.
    pub gate: Mutex<Option<Arc<Notify>>>,
    /// When set, the next poem read takes this gate and waits until notified.
    pub read_gate: Mutex<Option<Arc<Notify>>>,
    pub signers: Mutex<Vec<String>>,
    pub total_calls: AtomicUsize,
    pub poem_calls: AtomicUsize,
    pub write_calls: AtomicUsize,
    pub clock: AtomicUsize,
}

#[derive(Clone, Default)]
pub struct MockContract {
    pub state: Arc<ContractState>,
}

impl MockContract {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contract pre-populated with `count` poems, `poem {i}` by `0x{i}`.
    pub fn with_poems(count: u64) -> Self {
        let contract = Self::new();
        {
            let mut poems = contract.state.poems.lock().unwrap();
            for i in 0..count {
                poems.push(RawPoem::new(format!("0x{i:x}"), format!("poem {i}"), i * 60));
            }
        }
        contract
    }

    pub fn arc(&self) -> Arc<dyn PoemContract> {
        Arc::new(self.clone())
    }

    pub fn total_calls(&self) -> usize {
        self.state.total_calls.load(Ordering::SeqCst)
    }

    pub fn write_calls(&self) -> usize {
        self.state.write_calls.load(Ordering::SeqCst)
    }

    pub fn set_fail_read_at(&self, index: Option<u64>) {
        *self.state.fail_read_at.lock().unwrap() = index;
    }

    pub fn set_fail_total(&self, fail: bool) {
        *self.state.fail_total.lock().unwrap() = fail;
    }

    pub fn set_fail_write(&self, fail: bool) {
        *self.state.fail_write.lock().unwrap() = fail;
    }

    pub fn set_revert(&self, revert: bool) {
        *self.state.revert.lock().unwrap() = revert;
    }

    pub fn gate(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.state.gate.lock().unwrap() = Some(notify.clone());
        notify
    }

    pub fn read_gate(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.state.read_gate.lock().unwrap() = Some(notify.clone());
        notify
    }

    pub fn poem_calls(&self) -> usize {
        self.state.poem_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PoemContract for MockContract {
    async fn reader(&self) -> ProviderResult<Box<dyn PoemReader>> {
        Ok(Box::new(self.clone()))
    }

    async fn signer(&self, identity: &WalletAddress) -> ProviderResult<Box<dyn PoemWriter>> {
        self.state
            .signers
            .lock()
            .unwrap()
            .push(identity.to_string());
        Ok(Box::new(MockWriter {
            sender: identity.to_string(),
            state: self.state.clone(),
        }))
    }
}

#[async_trait]
impl PoemReader for MockContract {
    async fn total_poems(&self) -> ProviderResult<u64> {
        self.state.total_calls.fetch_add(1, Ordering::SeqCst);
        if *self.state.fail_total.lock().unwrap() {
            return Err(ProviderError::Rpc("node unreachable".into()));
        }
        Ok(self.state.poems.lock().unwrap().len() as u64)
    }

    async fn poem(&self, index: u64) -> ProviderResult<RawPoem> {
        self.state.poem_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.state.read_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if *self.state.fail_read_at.lock().unwrap() == Some(index) {
            return Err(ProviderError::Rpc(format!("read of {index} failed")));
        }
        self.state
            .poems
            .lock()
            .unwrap()
            .get(index as usize)
            .cloned()
            .ok_or_else(|| ProviderError::Rpc(format!("index {index} out of range")))
    }
}

struct MockWriter {
    sender: String,
    state: Arc<ContractState>,
}

#[async_trait]
impl PoemWriter for MockWriter {
    async fn write_poem(&self, text: &str) -> ProviderResult<Box<dyn PendingSubmission>> {
        self.state.write_calls.fetch_add(1, Ordering::SeqCst);
        if *self.state.fail_write.lock().unwrap() {
            return Err(ProviderError::Rejected);
        }
        let nonce = self.state.clock.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockPending {
            tx_hash: format!("0x{nonce:064x}"),
            poem: RawPoem::new(self.sender.clone(), text, 1_700_000_000 + nonce as u64),
            state: self.state.clone(),
        }))
    }
}

struct MockPending {
    tx_hash: String,
    poem: RawPoem,
    state: Arc<ContractState>,
}

#[async_trait]
impl PendingSubmission for MockPending {
    fn tx_hash(&self) -> String {
        self.tx_hash.clone()
    }

    async fn wait(&self) -> ProviderResult<Confirmation> {
        let gate = self.state.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if *self.state.revert.lock().unwrap() {
            return Err(ProviderError::Reverted(self.tx_hash.clone()));
        }

        let mut poems = self.state.poems.lock().unwrap();
        poems.push(self.poem.clone());
        Ok(Confirmation {
            tx_hash: self.tx_hash.clone(),
            block_number: Some(poems.len() as u64),
        })
    }
}
