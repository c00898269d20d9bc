//! Transfer submission retry policy.
//!
//! # Policy
//! - Up to [`MAX_SUBMIT_ATTEMPTS`] submissions of the same signed transaction
//! - [`SUBMIT_RETRY_DELAY`] between a failed attempt and the next one
//! - No delay after the final failed attempt
//! - Block reference fetch and transaction construction are never retried

use std::time::Duration;

/// Maximum number of submission attempts per transfer.
pub const MAX_SUBMIT_ATTEMPTS: u32 = 10;

/// Fixed pause between failed submission attempts.
pub const SUBMIT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Whether another attempt is allowed after `failures` failed submissions.
pub fn should_retry(failures: u32) -> bool {
    failures < MAX_SUBMIT_ATTEMPTS
}
