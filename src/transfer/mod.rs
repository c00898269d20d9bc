//! Transfer subsystem.
//!
//! # Data Flow
//! ```text
//! TransferRequest (sender wallet, recipient, lamports)
//!     → executor.rs: fetch block reference (once)
//!     → blockchain/transaction.rs: build + sign (once)
//!     → executor.rs: submit, retrying the same bytes up to 10 times
//!     → TransferReceipt | TransferError
//! ```

pub mod executor;
pub mod types;

pub use executor::TransferExecutor;
pub use types::{TransferError, TransferReceipt, TransferRequest};
