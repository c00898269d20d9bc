//! Reads a wallet configuration file and checks it before use.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::WalletConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Why a configuration file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

/// Render every validation problem on one line, comma separated.
fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read `path` as TOML and validate the result.
pub fn load_config(path: &Path) -> Result<WalletConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: WalletConfig = toml::from_str(&content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(path = %path.display(), rpc_url = %config.rpc.url, "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "devnet-wallet-{}-{}.toml",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_file() {
        let path = write_temp(
            "valid",
            "[rpc]\nurl = \"http://127.0.0.1:8899\"\ntimeout_secs = 5\n\n\
             [airdrop]\nlamports = 1000\n",
        );
        let config = load_config(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.rpc.url, "http://127.0.0.1:8899");
        assert_eq!(config.rpc.timeout_secs, 5);
        assert_eq!(config.airdrop.lamports, 1000);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/wallet.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("IO error: "));
    }

    #[test]
    fn test_parse_error() {
        let path = write_temp("parse", "[rpc\nurl = ");
        let err = load_config(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error: "));
    }

    #[test]
    fn test_validation_errors_are_joined() {
        let path = write_temp(
            "invalid",
            "[rpc]\ntimeout_secs = 0\n\n[observability]\nlog_level = \"chatty\"\n",
        );
        let err = load_config(&path).unwrap_err();
        fs::remove_file(&path).ok();

        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("timeout_secs"));
        assert!(message.contains("chatty"));
    }

    #[test]
    fn test_join_errors_separator() {
        let joined = join_errors(&[
            ValidationError::ZeroTimeout,
            ValidationError::ZeroAirdrop,
        ]);
        assert_eq!(
            joined,
            "rpc.timeout_secs must be greater than zero, \
             airdrop.lamports must be greater than zero when airdrop is enabled"
        );
        assert_eq!(join_errors(&[]), "");
    }
}
