//! Devnet wallet: keypair creation, airdrop and retried SOL transfers.

pub mod blockchain;
pub mod config;
pub mod console;
pub mod observability;
pub mod resilience;
pub mod transfer;

pub use blockchain::{LedgerClient, RpcLedgerClient, Wallet};
pub use config::WalletConfig;
pub use transfer::{TransferError, TransferExecutor, TransferReceipt, TransferRequest};
