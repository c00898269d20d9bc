//! The narrow interface the wallet uses to talk to a ledger.

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::blockchain::types::{BlockReference, BlockchainResult};

/// Remote ledger operations consumed by the wallet and the transfer executor.
///
/// [`RpcLedgerClient`](crate::blockchain::RpcLedgerClient) is the production
/// implementation; tests provide scripted ones.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Fetch a recent block reference to anchor a new transaction.
    async fn latest_block_reference(&self) -> BlockchainResult<BlockReference>;

    /// Submit an already signed transaction.
    ///
    /// Returns the transaction signature that identifies it on the ledger.
    async fn submit_transaction(&self, transaction: &Transaction) -> BlockchainResult<Signature>;

    /// Get the balance of an account in lamports.
    async fn get_balance(&self, address: &Pubkey) -> BlockchainResult<u64>;

    /// Ask the test-network faucet to credit an account.
    async fn request_airdrop(
        &self,
        address: &Pubkey,
        lamports: u64,
    ) -> BlockchainResult<Signature>;
}
