//! Type-safe wrappers hiding message passing from the UI shell.

pub mod cart_client;
pub mod catalog_client;
pub mod ledger_client;

pub use cart_client::*;
pub use catalog_client::*;
pub use ledger_client::*;
