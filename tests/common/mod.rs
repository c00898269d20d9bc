//! Shared utilities for transfer integration tests.

use async_trait::async_trait;
use devnet_wallet::blockchain::{BlockReference, BlockchainError, BlockchainResult, LedgerClient};
use devnet_wallet::resilience::Delay;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// Recipient used across tests.
pub const RECIPIENT: &str = "CSg4fcG4WqaVgTE33gzquXYGKAuZpikNWKQ4P4y71kke";

/// A programmable in-memory ledger.
///
/// Submissions fail until `fail_submissions` have been rejected, then succeed.
pub struct ScriptedLedger {
    fail_reference: bool,
    fail_submissions: u32,
    reference_calls: AtomicU32,
    submitted: Mutex<Vec<Transaction>>,
    balances: Mutex<HashMap<Pubkey, u64>>,
}

#[allow(dead_code)]
impl ScriptedLedger {
    pub fn new(fail_submissions: u32) -> Self {
        Self {
            fail_reference: false,
            fail_submissions,
            reference_calls: AtomicU32::new(0),
            submitted: Mutex::new(Vec::new()),
            balances: Mutex::new(HashMap::new()),
        }
    }

    /// A ledger that never hands out a block reference.
    pub fn unreachable() -> Self {
        Self {
            fail_reference: true,
            ..Self::new(0)
        }
    }

    pub fn always_failing() -> Self {
        Self::new(u32::MAX)
    }

    pub fn submissions(&self) -> Vec<Transaction> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn reference_calls(&self) -> u32 {
        self.reference_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LedgerClient for ScriptedLedger {
    async fn latest_block_reference(&self) -> BlockchainResult<BlockReference> {
        self.reference_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reference {
            return Err(BlockchainError::Rpc("connection refused".to_string()));
        }
        // A fresh hash per call makes a mid-retry refetch visible
        Ok(Hash::new_unique())
    }

    async fn submit_transaction(&self, transaction: &Transaction) -> BlockchainResult<Signature> {
        let mut submitted = self.submitted.lock().unwrap();
        submitted.push(transaction.clone());
        if submitted.len() as u32 <= self.fail_submissions {
            return Err(BlockchainError::Rpc("Blockhash not found".to_string()));
        }
        Ok(transaction.signatures[0])
    }

    async fn get_balance(&self, address: &Pubkey) -> BlockchainResult<u64> {
        Ok(self.balances.lock().unwrap().get(address).copied().unwrap_or(0))
    }

    async fn request_airdrop(
        &self,
        address: &Pubkey,
        lamports: u64,
    ) -> BlockchainResult<Signature> {
        *self.balances.lock().unwrap().entry(*address).or_insert(0) += lamports;
        Ok(Signature::new_unique())
    }
}

/// A delay that only counts how often it was asked to wait.
#[derive(Clone, Default)]
pub struct RecordingDelay {
    waits: Arc<AtomicU32>,
}

impl RecordingDelay {
    pub fn waits(&self) -> u32 {
        self.waits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn wait(&self, _failures: u32) {
        self.waits.fetch_add(1, Ordering::SeqCst);
    }
}
