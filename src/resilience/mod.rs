//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Transfer submission:
//!     → ledger client (per-call timeout, endpoint failover)
//!     → On failure: retries.rs (attempt budget)
//!     → backoff.rs (fixed pause before the next attempt)
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every RPC call has a deadline
//! - Only submission is retried, and always with the same signed bytes
//! - The pause is a trait so callers can swap in a no-op in tests

pub mod backoff;
pub mod retries;

pub use backoff::{Delay, FixedDelay};
pub use retries::{MAX_SUBMIT_ATTEMPTS, SUBMIT_RETRY_DELAY};
