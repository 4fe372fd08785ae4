//! Startup wiring and teardown for the register.
//!
//! Individual actors are simple; this module is where they are loaded,
//! wired together and shut down. [`RegisterSystem`] is the conductor:
//! it loads both collections (load failure is fatal to startup), spawns
//! one actor per collection, injects the cart's ledger dependency, and
//! coordinates the drop-clients-then-await shutdown. [`setup_tracing`]
//! initializes structured logging for the whole process.

pub mod register_system;
pub mod tracing;

pub use register_system::*;
pub use tracing::*;
