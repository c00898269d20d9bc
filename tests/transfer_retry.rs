//! Retry-loop behavior of the transfer executor against a scripted ledger.

use std::sync::Arc;

use devnet_wallet::blockchain::{BlockchainError, LedgerClient, Wallet};
use devnet_wallet::resilience::MAX_SUBMIT_ATTEMPTS;
use devnet_wallet::transfer::{TransferError, TransferExecutor, TransferRequest};

mod common;
use common::{RecordingDelay, ScriptedLedger, RECIPIENT};

#[tokio::test]
async fn test_succeeds_after_n_minus_one_failures() {
    for n in 1..=MAX_SUBMIT_ATTEMPTS {
        let ledger = Arc::new(ScriptedLedger::new(n - 1));
        let delay = RecordingDelay::default();
        let executor = TransferExecutor::with_delay(ledger.clone(), delay.clone());
        let sender = Wallet::generate();

        let receipt = executor
            .execute(TransferRequest::new(&sender, RECIPIENT, 1_000))
            .await
            .unwrap_or_else(|e| panic!("attempt budget {} should succeed: {}", n, e));

        assert_eq!(receipt.attempts, n);
        assert_eq!(ledger.submissions().len() as u32, n);
        assert_eq!(delay.waits(), n - 1);
    }
}

#[tokio::test]
async fn test_exhausted_after_ten_submissions() {
    let ledger = Arc::new(ScriptedLedger::always_failing());
    let delay = RecordingDelay::default();
    let executor = TransferExecutor::with_delay(ledger.clone(), delay.clone());
    let sender = Wallet::generate();

    let err = executor
        .execute(TransferRequest::new(&sender, RECIPIENT, 1_000))
        .await
        .unwrap_err();

    match err {
        TransferError::SubmissionExhausted { attempts, last_error } => {
            assert_eq!(attempts, 10);
            assert!(last_error.to_string().contains("Blockhash not found"));
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(ledger.submissions().len(), 10, "never an 11th attempt");
    assert_eq!(delay.waits(), 9);
}

#[tokio::test]
async fn test_reference_failure_skips_submission() {
    let ledger = Arc::new(ScriptedLedger::unreachable());
    let delay = RecordingDelay::default();
    let executor = TransferExecutor::with_delay(ledger.clone(), delay.clone());
    let sender = Wallet::generate();

    let err = executor
        .execute(TransferRequest::new(&sender, RECIPIENT, 1_000))
        .await
        .unwrap_err();

    assert!(matches!(err, TransferError::ReferenceUnavailable(BlockchainError::Rpc(_))));
    assert!(ledger.submissions().is_empty());
    assert_eq!(delay.waits(), 0);
}

#[tokio::test]
async fn test_retries_submit_identical_transaction() {
    let ledger = Arc::new(ScriptedLedger::new(5));
    let executor = TransferExecutor::with_delay(ledger.clone(), RecordingDelay::default());
    let sender = Wallet::generate();

    let receipt = executor
        .execute(TransferRequest::new(&sender, RECIPIENT, 1_000))
        .await
        .unwrap();

    let submissions = ledger.submissions();
    assert_eq!(submissions.len(), 6);
    assert!(submissions.iter().all(|tx| tx == &submissions[0]));
    assert_eq!(submissions[0].signatures.len(), 1);
    assert_eq!(receipt.signature, submissions[0].signatures[0]);
    assert_eq!(ledger.reference_calls(), 1);
}

#[tokio::test]
async fn test_funded_wallet_first_try() {
    let ledger = Arc::new(ScriptedLedger::new(0));
    let sender = Wallet::generate();
    ledger
        .request_airdrop(&sender.address(), 2_000_000_000)
        .await
        .unwrap();
    assert_eq!(ledger.get_balance(&sender.address()).await.unwrap(), 2_000_000_000);

    let executor = TransferExecutor::with_delay(ledger.clone(), RecordingDelay::default());
    let receipt = executor
        .execute(TransferRequest::new(&sender, RECIPIENT, 500_000_000))
        .await
        .unwrap();

    assert_eq!(receipt.attempts, 1);
    assert!(receipt.message().contains("after 1 attempt"));
}

#[tokio::test]
async fn test_malformed_recipient_fails_before_submission() {
    let ledger = Arc::new(ScriptedLedger::new(0));
    let delay = RecordingDelay::default();
    let executor = TransferExecutor::with_delay(ledger.clone(), delay.clone());
    let sender = Wallet::generate();

    let err = executor
        .execute(TransferRequest::new(&sender, "definitely not base58!", 1_000))
        .await
        .unwrap_err();

    assert!(matches!(err, TransferError::ConstructionFailed(_)));
    assert!(ledger.submissions().is_empty());
    assert_eq!(delay.waits(), 0);
}
