//! Error types for the cart actor.

use thiserror::Error;

use crate::framework::FrameworkError;
use crate::ledger_actor::LedgerError;

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Checkout was attempted on a cart with nothing in it.
    #[error("Cart is empty")]
    EmptyCart,

    /// The ledger refused the checkout; the cart is left untouched.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    Channel(#[from] FrameworkError),
}
