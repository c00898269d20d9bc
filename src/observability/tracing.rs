//! Spans with correlation IDs.
//!
//! Every transfer gets a random UUID so all log lines of one retry loop
//! can be grouped, even when a host runs several wallets.

use tracing::Span;
use uuid::Uuid;

/// Create the span a single transfer runs in.
pub fn transfer_span(transfer_id: Uuid, sender: &str, recipient: &str, lamports: u64) -> Span {
    tracing::info_span!(
        "transfer",
        transfer_id = %transfer_id,
        sender = %sender,
        recipient = %recipient,
        lamports = lamports
    )
}
