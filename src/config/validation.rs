//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. All errors are
//! collected and returned together.

use thiserror::Error;

use crate::config::schema::WalletConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("rpc.url '{url}' is not a valid http(s) URL")]
    InvalidRpcUrl { url: String },

    #[error("rpc.failover_urls entry '{url}' is not a valid http(s) URL")]
    InvalidFailoverUrl { url: String },

    #[error("rpc.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("airdrop.lamports must be greater than zero when airdrop is enabled")]
    ZeroAirdrop,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &WalletConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_http_url(&config.rpc.url) {
        errors.push(ValidationError::InvalidRpcUrl {
            url: config.rpc.url.clone(),
        });
    }

    for url in &config.rpc.failover_urls {
        if !is_http_url(url) {
            errors.push(ValidationError::InvalidFailoverUrl { url: url.clone() });
        }
    }

    if config.rpc.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.airdrop.enabled && config.airdrop.lamports == 0 {
        errors.push(ValidationError::ZeroAirdrop);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(raw: &str) -> bool {
    matches!(
        url::Url::parse(raw).map(|u| u.scheme().to_string()).as_deref(),
        Ok("http") | Ok("https")
    )
}
