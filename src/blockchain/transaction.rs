//! Transfer transaction construction and signing.
//!
//! # Responsibilities
//! - Parse the recipient address
//! - Build a single system-program transfer instruction
//! - Anchor the message to a block reference and sign it once

use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_instruction;
use solana_sdk::transaction::Transaction;
use std::str::FromStr;

use crate::blockchain::types::{BlockReference, BlockchainError, BlockchainResult};
use crate::blockchain::wallet::Wallet;

/// A fully built and signed transfer.
///
/// Immutable once constructed: retries submit exactly this transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransfer {
    transaction: Transaction,
}

impl SignedTransfer {
    /// Build and sign a transfer of `lamports` from `sender` to `recipient`.
    ///
    /// The sender pays the fee and is the only signer.
    pub fn build(
        sender: &Wallet,
        recipient: &str,
        lamports: u64,
        block_reference: BlockReference,
    ) -> BlockchainResult<Self> {
        let recipient_key =
            Pubkey::from_str(recipient.trim()).map_err(|e| BlockchainError::InvalidAddress {
                address: recipient.to_string(),
                reason: e.to_string(),
            })?;

        let payer = sender.address();
        let instruction = system_instruction::transfer(&payer, &recipient_key, lamports);
        let message = Message::new(&[instruction], Some(&payer));

        let mut transaction = Transaction::new_unsigned(message);
        transaction
            .try_sign(&[sender.keypair()], block_reference)
            .map_err(|e| BlockchainError::Signing(e.to_string()))?;

        tracing::debug!(
            from = %payer,
            to = %recipient_key,
            lamports = lamports,
            block_reference = %block_reference,
            "Transfer transaction signed"
        );

        Ok(Self { transaction })
    }

    /// The signed transaction, ready for submission.
    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }
}
