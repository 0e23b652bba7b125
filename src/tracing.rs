//! # Observability & Tracing
//!
//! This module provides the tracing setup for the whole process.
//!
//! The registry logs every store operation with structured fields (`%id`,
//! `found`, `size`, `dropped`), so the complete register/find flow is
//! visible at `debug` level while `info` stays compact.
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Per-lookup detail
//! RUST_LOG=debug cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Entity context comes from structured fields, not module paths
        .compact()
        .init();
}
