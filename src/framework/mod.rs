//! Generic actor plumbing for the register's components.
//!
//! This module provides the building blocks for running each collection
//! inside its own actor: a service trait, the mailbox loop, and the typed
//! request/response helper the clients are built on.
//!
//! # Main Components
//!
//! - [`Service`] - Trait a component implements to run inside an actor
//! - [`ServiceActor`] - Generic actor owning a service and its mailbox
//! - [`request`] - Send-and-await helper used by the clients
//! - [`FrameworkError`] - Channel transport errors

pub mod core;

// Re-export core types for convenience
pub use core::*;
