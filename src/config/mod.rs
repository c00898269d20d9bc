//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → WalletConfig (validated, immutable)
//!     → CLI flags override individual fields
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults; running with no file targets devnet
//! - The transfer retry policy is fixed and intentionally not configurable

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AirdropConfig, Commitment, ObservabilityConfig, RpcConfig, WalletConfig};
pub use validation::{validate_config, ValidationError};
