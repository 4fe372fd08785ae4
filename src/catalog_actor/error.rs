//! Error types for the catalog actor.

use thiserror::Error;

use crate::framework::FrameworkError;
use crate::storage::StorageError;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A submitted product row has a blank name.
    #[error("Product row {row}: name must not be empty")]
    EmptyName { row: usize },

    /// A submitted product row has a price that does not parse as a
    /// non-negative number.
    #[error("Product row {row} ({name}): invalid price {price:?}")]
    InvalidPrice {
        row: usize,
        name: String,
        price: String,
    },

    /// The persisted catalog could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    Channel(#[from] FrameworkError),
}
