//! # till
//!
//! > **A single-register point-of-sale core, built as a small actor system.**
//!
//! Three collections, three actors: a product **catalog** (replaced
//! wholesale by the admin editor), an append-only transaction **ledger**
//! (numbered sales, rewritten to disk on every checkout), and an ephemeral
//! **cart** (the sale being rung up right now). The graphical shell that
//! would sit on top (buttons, popups, confirmations) is out of scope here;
//! it drives the system through the typed clients and nothing else.
//!
//! ## 🏗️ Design Notes
//!
//! ### Why actors for a single register?
//! The domain rule is "each collection is touched by exactly one operator
//! at a time." Giving each collection its own task with a sequential
//! mailbox makes that rule structural: no locks, no shared mutable state,
//! and every operation runs to completion before the next one starts.
//!
//! ### Snapshots, not references
//! Cart lines and order items copy the product they were created from.
//! Editing the catalog never reaches back into an in-progress cart or a
//! recorded sale.
//!
//! ### One committed state at a time
//! Both files are rewritten in full. A failed write rolls the in-memory
//! side back: a failed checkout keeps the cart and reuses its transaction
//! number on retry; a failed save keeps serving the previous catalog.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic mailbox loop and the typed request/response helper. Written
//! once, used by all three actors.
//!
//! ### 2. The Collections ([`catalog_actor`], [`ledger_actor`], [`cart_actor`])
//! The domain logic: validation and seeding in the catalog, transaction
//! numbering and rollback in the ledger, line merging and checkout in the
//! cart. The cart's ledger dependency is injected at `run()`, not at
//! construction.
//!
//! ### 3. The Interface ([`clients`])
//! Raw message passing is not exposed to the shell. [`CatalogClient`],
//! [`LedgerClient`] and [`CartClient`] wrap it with one async method per
//! operation.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`RegisterSystem`] loads both files (a malformed file fails startup),
//! spawns the actors, wires the cart to the ledger, and coordinates
//! graceful shutdown. [`setup_tracing`] configures logging.
//!
//! ### 5. The Seam ([`storage`])
//! Whole-file JSON persistence behind the [`Store`] trait: `JsonFile` in
//! production, `MemoryStore` (with scriptable write failure) in tests.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! # A scripted register session with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! File locations default to `products.json` / `orders.json` in the working
//! directory and can be overridden with `TILL_PRODUCTS_FILE` /
//! `TILL_ORDERS_FILE`.
//!
//! [`CatalogClient`]: clients::CatalogClient
//! [`LedgerClient`]: clients::LedgerClient
//! [`CartClient`]: clients::CartClient
//! [`RegisterSystem`]: lifecycle::RegisterSystem
//! [`setup_tracing`]: lifecycle::setup_tracing
//! [`Store`]: storage::Store

pub mod cart_actor;
pub mod catalog_actor;
pub mod clients;
pub mod framework;
pub mod ledger_actor;
pub mod lifecycle;
pub mod model;
pub mod storage;
