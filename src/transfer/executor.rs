//! Build-once, submit-with-retries transfer execution.
//!
//! # States
//! ```text
//! Start → ReferenceFetched → TransactionBuilt → Submitting ⇄ (failure, delay)
//!                                                   ↓            ↓
//!                                               Succeeded   ExhaustedFailed
//! ```
//! Fetching the block reference and building the transaction happen once.
//! Only submission is retried, always with the same signed transaction.

use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use crate::blockchain::ledger::LedgerClient;
use crate::blockchain::transaction::SignedTransfer;
use crate::observability::metrics;
use crate::observability::tracing::transfer_span;
use crate::resilience::backoff::{Delay, FixedDelay};
use crate::resilience::retries::{should_retry, MAX_SUBMIT_ATTEMPTS};
use crate::transfer::types::{TransferError, TransferReceipt, TransferRequest};

/// Executes transfers against a ledger with a bounded retry loop.
pub struct TransferExecutor<C, D = FixedDelay> {
    client: Arc<C>,
    delay: D,
}

impl<C: LedgerClient> TransferExecutor<C, FixedDelay> {
    /// Create an executor that pauses 2 seconds between failed submissions.
    pub fn new(client: Arc<C>) -> Self {
        let delay = FixedDelay::default();
        tracing::debug!(
            max_attempts = MAX_SUBMIT_ATTEMPTS,
            retry_delay_ms = delay.duration().as_millis() as u64,
            "Transfer executor ready"
        );
        Self::with_delay(client, delay)
    }
}

impl<C: LedgerClient, D: Delay> TransferExecutor<C, D> {
    /// Create an executor with a custom delay strategy.
    pub fn with_delay(client: Arc<C>, delay: D) -> Self {
        Self { client, delay }
    }

    /// Execute one transfer.
    ///
    /// Performs at most [`MAX_SUBMIT_ATTEMPTS`] submissions and one fewer delays.
    pub async fn execute(
        &self,
        request: TransferRequest<'_>,
    ) -> Result<TransferReceipt, TransferError> {
        let span = transfer_span(
            Uuid::new_v4(),
            &request.sender.address().to_string(),
            request.recipient,
            request.lamports,
        );

        let result = self.run(request).instrument(span).await;
        match &result {
            Ok(_) => metrics::record_transfer("succeeded"),
            Err(e) => metrics::record_transfer(e.kind()),
        }
        result
    }

    async fn run(&self, request: TransferRequest<'_>) -> Result<TransferReceipt, TransferError> {
        let block_reference = self
            .client
            .latest_block_reference()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Could not fetch block reference");
                TransferError::ReferenceUnavailable(e)
            })?;

        let transfer = SignedTransfer::build(
            request.sender,
            request.recipient,
            request.lamports,
            block_reference,
        )
        .map_err(|e| {
            tracing::error!(error = %e, "Could not build transfer transaction");
            TransferError::ConstructionFailed(e)
        })?;

        let mut failures = 0u32;
        loop {
            let attempt = failures + 1;
            match self.client.submit_transaction(transfer.transaction()).await {
                Ok(signature) => {
                    metrics::record_submission_attempt(true);
                    tracing::info!(
                        signature = %signature,
                        attempt = attempt,
                        "Transaction accepted"
                    );
                    return Ok(TransferReceipt {
                        signature,
                        attempts: attempt,
                    });
                }
                Err(e) => {
                    metrics::record_submission_attempt(false);
                    failures += 1;
                    tracing::warn!(
                        attempt = attempt,
                        max_attempts = MAX_SUBMIT_ATTEMPTS,
                        error = %e,
                        "Transaction submission failed"
                    );

                    if !should_retry(failures) {
                        return Err(TransferError::SubmissionExhausted {
                            attempts: failures,
                            last_error: e,
                        });
                    }
                    self.delay.wait(failures).await;
                }
            }
        }
    }
}
