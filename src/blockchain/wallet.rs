//! Wallet key management.
//!
//! # Security
//! - Keys live in memory only and are dropped at exit
//! - Secret key bytes are never logged; `Debug` prints the address only

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair, Signer};
use std::path::Path;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// A ledger account: an ed25519 keypair with signing capability.
pub struct Wallet {
    keypair: Keypair,
}

impl Wallet {
    /// Generate a fresh random keypair.
    pub fn generate() -> Self {
        let keypair = Keypair::new();
        tracing::info!(address = %keypair.pubkey(), "Generated new wallet");
        Self { keypair }
    }

    /// Import a wallet from 64 raw keypair bytes (secret followed by public half).
    pub fn from_bytes(bytes: &[u8]) -> BlockchainResult<Self> {
        let keypair = Keypair::from_bytes(bytes)
            .map_err(|e| BlockchainError::Wallet(format!("Invalid keypair bytes: {}", e)))?;

        tracing::info!(address = %keypair.pubkey(), "Wallet imported");
        Ok(Self { keypair })
    }

    /// Import a wallet from a JSON byte array such as `[12,201,...]`.
    ///
    /// This is the format [`Wallet::secret_key_json`] prints and the format
    /// Solana keypair files use.
    pub fn from_json_bytes(json: &str) -> BlockchainResult<Self> {
        let bytes: Vec<u8> = serde_json::from_str(json.trim())
            .map_err(|e| BlockchainError::Wallet(format!("Invalid secret key JSON: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    /// Import a wallet from a Solana keypair file.
    pub fn from_keypair_file(path: &Path) -> BlockchainResult<Self> {
        let keypair = read_keypair_file(path).map_err(|e| {
            BlockchainError::Wallet(format!(
                "Failed to read keypair file {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::info!(address = %keypair.pubkey(), path = %path.display(), "Wallet imported");
        Ok(Self { keypair })
    }

    /// Get the wallet's public address.
    pub fn address(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Secret key material as a JSON byte array, for display to the owner.
    pub fn secret_key_json(&self) -> BlockchainResult<String> {
        serde_json::to_string(&self.keypair.to_bytes()[..])
            .map_err(|e| BlockchainError::Wallet(format!("Failed to encode secret key: {}", e)))
    }

    /// Signing capability for transaction construction.
    pub(crate) fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}
