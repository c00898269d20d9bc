//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.
//! Every section falls back to defaults, so an empty file is a valid config.

use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;

/// Public devnet endpoint used when nothing else is configured.
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Root configuration for the wallet.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WalletConfig {
    /// Ledger RPC connection settings.
    pub rpc: RpcConfig,

    /// Test-network faucet settings.
    pub airdrop: AirdropConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Ledger RPC connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// JSON-RPC endpoint URL.
    pub url: String,

    /// Failover JSON-RPC endpoint URLs, tried in order.
    pub failover_urls: Vec<String>,

    /// Commitment level for reads and confirmations.
    pub commitment: Commitment,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: DEVNET_RPC_URL.to_string(),
            failover_urls: Vec::new(),
            commitment: Commitment::Confirmed,
            timeout_secs: 30,
        }
    }
}

/// Ledger commitment level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn to_commitment_config(self) -> CommitmentConfig {
        match self {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

/// Airdrop configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AirdropConfig {
    /// Request an airdrop for the wallet at startup.
    pub enabled: bool,

    /// Lamports to request (1 SOL = 1_000_000_000 lamports).
    pub lamports: u64,

    /// Maximum time to wait for the airdrop to settle, in seconds.
    pub settle_timeout_secs: u64,
}

impl Default for AirdropConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lamports: 2_000_000_000,
            settle_timeout_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
