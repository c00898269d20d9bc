//! Ledger integration subsystem.
//!
//! # Data Flow
//! ```text
//! Key material (generated, JSON bytes, or keypair file)
//!     → wallet.rs (key loading, signing capability)
//!     → transaction.rs (build & sign a transfer once)
//!     → ledger.rs (LedgerClient trait)
//!     → client.rs (Solana RPC with timeouts and failover)
//! ```
//!
//! # Security Constraints
//! - Keys are never persisted by this crate
//! - Never log secret keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod ledger;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::RpcLedgerClient;
pub use ledger::LedgerClient;
pub use transaction::SignedTransfer;
pub use types::{BlockReference, BlockchainError, BlockchainResult, ConfirmationStatus};
pub use wallet::Wallet;
