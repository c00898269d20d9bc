//! Ledger RPC client with timeout and failover handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint (plus optional failovers)
//! - Fetch blockhashes, balances and signature statuses
//! - Submit transactions and request airdrops
//! - Handle timeouts and network errors gracefully

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::blockchain::ledger::LedgerClient;
use crate::blockchain::types::{
    BlockReference, BlockchainError, BlockchainResult, ConfirmationStatus, RpcConfig,
};
use crate::observability::metrics;

/// Interval between signature status polls while waiting for confirmation.
const CONFIRMATION_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Solana RPC client wrapper with failover support.
#[derive(Clone)]
pub struct RpcLedgerClient {
    /// List of endpoints (primary + failovers).
    providers: Vec<Arc<RpcClient>>,
    /// Configuration.
    config: RpcConfig,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl RpcLedgerClient {
    /// Create a new ledger client.
    ///
    /// No request is made here; an unreachable endpoint surfaces on first use.
    pub fn new(config: RpcConfig) -> BlockchainResult<Self> {
        let timeout_duration = Duration::from_secs(config.timeout_secs);
        let commitment = config.commitment.to_commitment_config();
        let mut providers = Vec::new();

        let primary_url: url::Url = config.url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", config.url, e))
        })?;
        providers.push(Arc::new(RpcClient::new_with_commitment(
            primary_url.to_string(),
            commitment,
        )));

        for url_str in &config.failover_urls {
            match url_str.parse::<url::Url>() {
                Ok(url) => providers.push(Arc::new(RpcClient::new_with_commitment(
                    url.to_string(),
                    commitment,
                ))),
                Err(_) => tracing::warn!(url = %url_str, "Ignoring invalid failover RPC URL"),
            }
        }

        tracing::info!(
            rpc_url = %config.url,
            failovers = providers.len() - 1,
            commitment = ?config.commitment,
            "Ledger client initialized"
        );

        Ok(Self {
            providers,
            config,
            timeout_duration,
        })
    }

    /// Poll the signature status until it reaches the configured commitment.
    ///
    /// # Arguments
    /// * `signature` - Transaction signature to monitor
    /// * `timeout_secs` - Maximum time to wait for confirmation
    pub async fn wait_for_confirmation(
        &self,
        signature: &Signature,
        timeout_secs: u64,
    ) -> BlockchainResult<ConfirmationStatus> {
        let result = timeout(Duration::from_secs(timeout_secs), async {
            let mut ticker = interval(CONFIRMATION_POLL_INTERVAL);

            loop {
                ticker.tick().await;

                match self.get_signature_status(signature).await? {
                    ConfirmationStatus::Pending => {
                        tracing::debug!(signature = %signature, "Transaction pending");
                    }
                    status => return Ok(status),
                }
            }
        })
        .await;

        match result {
            Ok(status) => status,
            Err(_) => Err(BlockchainError::ConfirmationTimeout(timeout_secs)),
        }
    }

    /// Get the current status of a signature.
    pub async fn get_signature_status(
        &self,
        signature: &Signature,
    ) -> BlockchainResult<ConfirmationStatus> {
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.get_signature_status(signature);
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(None)) => return Ok(ConfirmationStatus::Pending),
                Ok(Ok(Some(Ok(())))) => return Ok(ConfirmationStatus::Confirmed),
                Ok(Ok(Some(Err(e)))) => return Ok(ConfirmationStatus::Failed(e.to_string())),
                Ok(Err(e)) => tracing::warn!(provider_idx = i, error = %e, "RPC error"),
                Err(_) => tracing::warn!(provider_idx = i, "RPC timeout"),
            }
        }
        Err(self.exhausted("get signature status"))
    }

    /// Check if the ledger is reachable and healthy.
    pub async fn is_healthy(&self) -> bool {
        let mut healthy = false;
        for provider in &self.providers {
            if let Ok(Ok(())) = timeout(self.timeout_duration, provider.get_health()).await {
                healthy = true;
                break;
            }
        }
        metrics::record_rpc_health(healthy);
        healthy
    }

    fn exhausted(&self, operation: &str) -> BlockchainError {
        if self.providers.len() == 1 {
            BlockchainError::Rpc(format!("RPC provider failed to {}", operation))
        } else {
            BlockchainError::Rpc(format!("All RPC providers failed to {}", operation))
        }
    }
}

#[async_trait]
impl LedgerClient for RpcLedgerClient {
    async fn latest_block_reference(&self) -> BlockchainResult<BlockReference> {
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.get_latest_blockhash();
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(hash)) => return Ok(hash),
                Ok(Err(e)) => {
                    tracing::warn!(provider_idx = i, error = %e, "RPC error, trying next provider");
                }
                Err(_) => {
                    tracing::warn!(provider_idx = i, "RPC timeout, trying next provider");
                }
            }
        }
        Err(self.exhausted("get latest blockhash"))
    }

    async fn submit_transaction(&self, transaction: &Transaction) -> BlockchainResult<Signature> {
        let mut last_error = BlockchainError::Timeout(self.config.timeout_secs);
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.send_transaction(transaction);
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(signature)) => return Ok(signature),
                Ok(Err(e)) => {
                    tracing::warn!(provider_idx = i, error = %e, "Transaction rejected");
                    last_error = BlockchainError::Rpc(e.to_string());
                }
                Err(_) => {
                    tracing::warn!(provider_idx = i, "RPC timeout");
                    last_error = BlockchainError::Timeout(self.config.timeout_secs);
                }
            }
        }
        Err(last_error)
    }

    async fn get_balance(&self, address: &Pubkey) -> BlockchainResult<u64> {
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.get_balance(address);
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(balance)) => return Ok(balance),
                Ok(Err(e)) => tracing::warn!(provider_idx = i, error = %e, "RPC error"),
                Err(_) => tracing::warn!(provider_idx = i, "RPC timeout"),
            }
        }
        Err(self.exhausted("get balance"))
    }

    async fn request_airdrop(
        &self,
        address: &Pubkey,
        lamports: u64,
    ) -> BlockchainResult<Signature> {
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.request_airdrop(address, lamports);
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(signature)) => return Ok(signature),
                Ok(Err(e)) => {
                    tracing::warn!(provider_idx = i, error = %e, "Airdrop request failed");
                }
                Err(_) => tracing::warn!(provider_idx = i, "RPC timeout"),
            }
        }
        Err(self.exhausted("request airdrop"))
    }
}

impl std::fmt::Debug for RpcLedgerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcLedgerClient")
            .field("rpc_url", &self.config.url)
            .field("failover_urls", &self.config.failover_urls)
            .field("timeout_secs", &self.config.timeout_secs)
            .finish()
    }
}
