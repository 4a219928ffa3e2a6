//! Conversions from untyped JSON-RPC values and errors into core types.

use ethers::contract::ContractError;
use ethers::providers::{
    JsonRpcError, Middleware, MiddlewareError, ProviderError as RpcProviderError, RpcError,
};
use ethers::types::{Address, TransactionReceipt, TxHash, U256, U64};
use ethers::utils::to_checksum;

use eterna_core::{Confirmation, ProviderError, WalletAddress};

/// EIP-1193 code for a request the user declined.
pub const USER_REJECTED: i64 = 4001;

/// JSON-RPC code for an unknown method.
pub const METHOD_NOT_FOUND: i64 = -32601;

/// Renders an address in EIP-55 checksum form.
pub fn format_address(address: &Address) -> String {
    to_checksum(address, None)
}

/// Parses a connected identity into an EVM address.
pub fn parse_address(identity: &WalletAddress) -> Result<Address, ProviderError> {
    identity
        .as_str()
        .parse()
        .map_err(|e| ProviderError::Malformed(format!("{identity} is not an EVM address: {e}")))
}

/// Narrows a `uint256` that must fit in 64 bits.
pub fn to_u64(value: U256, what: &str) -> Result<u64, ProviderError> {
    if value > U256::from(u64::MAX) {
        return Err(ProviderError::Malformed(format!(
            "{what} does not fit in 64 bits: {value}"
        )));
    }
    Ok(value.as_u64())
}

/// Whether a node error means the method is not implemented.
pub fn is_method_not_found(e: &RpcProviderError) -> bool {
    RpcError::as_error_response(e).is_some_and(|resp| resp.code == METHOD_NOT_FOUND)
}

/// Maps a provider error, recognising user rejection.
pub fn provider_error(e: RpcProviderError) -> ProviderError {
    rpc_failure(RpcError::as_error_response(&e), e.to_string())
}

/// Maps a contract call error, recognising reverts and user rejection.
pub fn contract_error<M: Middleware>(e: ContractError<M>) -> ProviderError {
    if let Some(data) = e.as_revert() {
        return ProviderError::Reverted(data.to_string());
    }
    let response = match &e {
        ContractError::MiddlewareError { e } => MiddlewareError::as_error_response(e),
        ContractError::ProviderError { e } => RpcError::as_error_response(e),
        _ => None,
    };
    rpc_failure(response, e.to_string())
}

fn rpc_failure(response: Option<&JsonRpcError>, message: String) -> ProviderError {
    match response {
        Some(resp) if resp.code == USER_REJECTED => ProviderError::Rejected,
        _ => ProviderError::Rpc(message),
    }
}

/// Interprets the receipt of a mined (or vanished) transaction.
///
/// Status `0` means the transaction reverted; no receipt means it was dropped.
pub fn receipt_outcome(
    tx_hash: TxHash,
    receipt: Option<TransactionReceipt>,
) -> Result<Confirmation, ProviderError> {
    let receipt = receipt.ok_or_else(|| ProviderError::Dropped(format!("{tx_hash:?}")))?;

    if receipt.status == Some(U64::zero()) {
        return Err(ProviderError::Reverted(format!("{tx_hash:?}")));
    }

    Ok(Confirmation {
        tx_hash: format!("{:?}", receipt.transaction_hash),
        block_number: receipt.block_number.map(|b| b.as_u64()),
    })
}
