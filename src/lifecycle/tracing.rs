//! # Observability & Tracing
//!
//! Structured logging for the register, via the `tracing` crate.
//!
//! The compact format hides the crate/module prefix (`with_target(false)`);
//! events carry a `service_type` field instead, which keeps log lines
//! short while preserving structure. Levels come from `RUST_LOG`:
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Full request payloads at client entry points
//! RUST_LOG=debug cargo run
//! ```
//!
//! What gets traced:
//!
//! - **Actor lifecycle**: startup and shutdown per collection
//! - **Operations**: catalog saves, ledger appends, checkouts, with
//!   structured fields (row counts, transaction numbers, totals)
//! - **Errors**: rejected saves, rolled-back appends, refused checkouts
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - events carry service_type instead
        .compact() // Compact format shows spans inline (e.g., "checkout")
        .init();
}
