//! Metrics collection.
//!
//! # Metrics
//! - `wallet_submission_attempts_total` (counter): submissions by outcome
//! - `wallet_transfers_total` (counter): finished transfers by outcome
//! - `wallet_rpc_health` (gauge): 1=healthy, 0=unhealthy
//!
//! Recording goes through the `metrics` facade and is a no-op until a host
//! installs a recorder.

/// Record one submission attempt.
pub fn record_submission_attempt(accepted: bool) {
    let outcome = if accepted { "accepted" } else { "rejected" };
    metrics::counter!("wallet_submission_attempts_total", "outcome" => outcome).increment(1);
}

/// Record the terminal outcome of a transfer.
pub fn record_transfer(outcome: &'static str) {
    metrics::counter!("wallet_transfers_total", "outcome" => outcome).increment(1);
}

/// Record RPC endpoint health.
pub fn record_rpc_health(healthy: bool) {
    metrics::gauge!("wallet_rpc_health").set(if healthy { 1.0 } else { 0.0 });
}
