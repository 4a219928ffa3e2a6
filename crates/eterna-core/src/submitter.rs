//! Poem submission.

use std::fmt;

use crate::provider::{Confirmation, PendingSubmission, PoemContract};
use crate::types::WalletAddress;

/// Outcome line shown under the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    /// Submit was pressed before a wallet was connected.
    WalletRequired,
    /// The draft is empty or whitespace.
    EmptyPoem,
    /// The transaction is broadcast and awaiting confirmation.
    Writing,
    /// The transaction was mined.
    Written,
    /// Signing, broadcast or confirmation failed.
    Failed,
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StatusMessage::WalletRequired => "⚠️ Connect a wallet first.",
            StatusMessage::EmptyPoem => "⚠️ Please write a poem.",
            StatusMessage::Writing => "✍️ Writing your verse...",
            StatusMessage::Written => "✅ Your poem lives on the chain!",
            StatusMessage::Failed => "❌ Transaction failed.",
        };
        f.write_str(text)
    }
}

/// Checks that a submission can be attempted.
pub fn validate<'a>(
    identity: Option<&'a WalletAddress>,
    draft: &str,
) -> Result<&'a WalletAddress, StatusMessage> {
    let identity = identity.ok_or(StatusMessage::WalletRequired)?;
    if draft.trim().is_empty() {
        return Err(StatusMessage::EmptyPoem);
    }
    Ok(identity)
}

/// Writes `draft` to the contract as `identity` and waits for it to be mined.
///
/// `on_broadcast` runs once the transaction has been sent and before the
/// confirmation wait begins. Failures are logged and returned as the status
/// line to show; nothing is sent when validation fails.
pub async fn submit<F>(
    contract: &dyn PoemContract,
    identity: Option<&WalletAddress>,
    draft: &str,
    on_broadcast: F,
) -> Result<Confirmation, StatusMessage>
where
    F: FnOnce(&dyn PendingSubmission),
{
    let identity = validate(identity, draft)?;

    let signer = contract.signer(identity).await.map_err(|e| {
        tracing::error!(address = %identity, "Failed to open signing session: {}", e);
        StatusMessage::Failed
    })?;

    let pending = signer.write_poem(draft).await.map_err(|e| {
        tracing::error!("Transaction failed: {}", e);
        StatusMessage::Failed
    })?;

    tracing::info!(tx = %pending.tx_hash(), "Poem submitted, awaiting confirmation");
    on_broadcast(&*pending);

    let confirmation = pending.wait().await.map_err(|e| {
        tracing::error!(tx = %pending.tx_hash(), "Transaction failed: {}", e);
        StatusMessage::Failed
    })?;

    tracing::info!(
        tx = %confirmation.tx_hash,
        block = ?confirmation.block_number,
        "Poem confirmed"
    );
    Ok(confirmation)
}
