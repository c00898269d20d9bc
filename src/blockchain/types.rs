//! Ledger-facing types and error definitions.

use solana_sdk::hash::Hash;
use thiserror::Error;

// Re-export RpcConfig from config module to avoid duplication
pub use crate::config::schema::RpcConfig;

/// Recent blockhash anchoring a transaction to a point in ledger history.
///
/// Fetched once per transfer and never cached.
pub type BlockReference = Hash;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Recipient or account address could not be parsed.
    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Invalid key material or keypair file.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Transaction signing failed.
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Transaction was not confirmed within the allowed time.
    #[error("Transaction not confirmed after {0} seconds")]
    ConfirmationTimeout(u64),
}

/// Result type for ledger operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// Transaction confirmation status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationStatus {
    /// The ledger has not reported the signature yet.
    Pending,
    /// Transaction reached the configured commitment level.
    Confirmed,
    /// Transaction was processed but returned an error.
    Failed(String),
}
