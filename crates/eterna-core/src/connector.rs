//! Wallet connection.

use crate::error::ConnectError;
use crate::provider::WalletProvider;
use crate::types::WalletAddress;

/// Requests account access and returns the first granted address.
///
/// `provider` is `None` when the host has no wallet provider installed.
pub async fn connect(provider: Option<&dyn WalletProvider>) -> Result<WalletAddress, ConnectError> {
    let Some(provider) = provider else {
        tracing::warn!("No wallet provider available");
        return Err(ConnectError::ProviderUnavailable);
    };

    let accounts = match provider.request_accounts().await {
        Ok(accounts) => accounts,
        Err(e) => {
            tracing::error!("Wallet connection failed: {}", e);
            return Err(ConnectError::Failed(e));
        }
    };

    let Some(first) = accounts.first() else {
        tracing::warn!("Wallet provider returned no accounts");
        return Err(ConnectError::NoAccount);
    };

    let address = WalletAddress::parse(first).map_err(|e| {
        tracing::error!("Wallet returned an unusable account: {}", e);
        ConnectError::Failed(e)
    })?;

    tracing::info!(address = %address, "Wallet connected");
    Ok(address)
}
