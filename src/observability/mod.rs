//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events on stderr)
//!     → metrics.rs (counters, gauges)
//!     → tracing.rs (per-transfer spans with correlation IDs)
//! ```
//!
//! # Design Decisions
//! - Structured fields, never interpolated secrets
//! - Transfer ID flows through every event of one transfer
//! - Metrics are facade calls; exporting is the host's choice

pub mod logging;
pub mod metrics;
pub mod tracing;
