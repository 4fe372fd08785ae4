//! Error types for the ledger actor.

use thiserror::Error;

use crate::framework::FrameworkError;
use crate::storage::StorageError;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The persisted ledger could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    Channel(#[from] FrameworkError),
}
