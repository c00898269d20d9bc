//! Transfer request, receipt and error types.

use solana_sdk::signature::Signature;
use thiserror::Error;

use crate::blockchain::types::BlockchainError;
use crate::blockchain::wallet::Wallet;

/// A single transfer to execute.
///
/// `lamports > 0` and balance sufficiency are the caller's responsibility.
#[derive(Debug, Clone, Copy)]
pub struct TransferRequest<'a> {
    pub sender: &'a Wallet,
    pub recipient: &'a str,
    pub lamports: u64,
}

impl<'a> TransferRequest<'a> {
    pub fn new(sender: &'a Wallet, recipient: &'a str, lamports: u64) -> Self {
        Self {
            sender,
            recipient,
            lamports,
        }
    }
}

/// Successful transfer outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    /// Signature returned by the ledger for the accepted submission.
    pub signature: Signature,
    /// Number of submissions it took, starting at 1.
    pub attempts: u32,
}

impl TransferReceipt {
    /// Human-readable outcome line.
    pub fn message(&self) -> String {
        let plural = if self.attempts == 1 { "" } else { "s" };
        format!(
            "Transaction {} sent after {} attempt{}",
            self.signature, self.attempts, plural
        )
    }
}

/// Why a transfer did not go through.
#[derive(Debug, Error)]
pub enum TransferError {
    /// No recent block reference could be fetched. Never retried.
    #[error("block reference unavailable: {0}")]
    ReferenceUnavailable(#[source] BlockchainError),

    /// The transaction could not be built or signed. Never retried.
    #[error("transaction construction failed: {0}")]
    ConstructionFailed(#[source] BlockchainError),

    /// The ledger rejected every submission within the attempt budget.
    #[error("send failed after {attempts} attempts: {last_error}")]
    SubmissionExhausted {
        attempts: u32,
        #[source]
        last_error: BlockchainError,
    },
}

impl TransferError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            TransferError::ReferenceUnavailable(_) => "reference_unavailable",
            TransferError::ConstructionFailed(_) => "construction_failed",
            TransferError::SubmissionExhausted { .. } => "submission_exhausted",
        }
    }
}
