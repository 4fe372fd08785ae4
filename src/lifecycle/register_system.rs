use std::env;
use std::path::PathBuf;

use tracing::{error, info};

use crate::cart_actor;
use crate::catalog_actor::{self, Catalog};
use crate::clients::{CartClient, CatalogClient, LedgerClient};
use crate::ledger_actor::{self, Ledger};
use crate::storage::{JsonFile, StorageError, Store};

/// Locations of the two persisted collections.
#[derive(Debug, Clone)]
pub struct RegisterConfig {
    pub products_path: PathBuf,
    pub orders_path: PathBuf,
}

impl RegisterConfig {
    /// Reads file locations from `TILL_PRODUCTS_FILE` / `TILL_ORDERS_FILE`,
    /// falling back to the defaults in the working directory.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            products_path: env::var_os("TILL_PRODUCTS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.products_path),
            orders_path: env::var_os("TILL_ORDERS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.orders_path),
        }
    }
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            products_path: PathBuf::from("products.json"),
            orders_path: PathBuf::from("orders.json"),
        }
    }
}

/// The running register: one actor per collection, plus the clients the UI
/// shell drives.
///
/// Constructed once at startup and torn down at shutdown; the collections
/// live inside their actors, not in ambient globals.
pub struct RegisterSystem {
    /// Client for the product catalog (read by the shell, rewritten by the
    /// admin editor)
    pub catalog_client: CatalogClient,

    /// Client for the transaction ledger
    pub ledger_client: LedgerClient,

    /// Client for the in-progress cart
    pub cart_client: CartClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RegisterSystem {
    /// Opens the register against the configured files and starts all
    /// actors.
    ///
    /// Loading is all-or-nothing per collection: a malformed file fails
    /// startup with a [`StorageError`]. An absent products file is seeded
    /// with the starter catalog; an absent orders file is an empty ledger.
    pub fn open(config: RegisterConfig) -> Result<Self, StorageError> {
        let catalog = Catalog::load(JsonFile::new(config.products_path))?;
        let ledger = Ledger::load(JsonFile::new(config.orders_path))?;
        Ok(Self::start(catalog, ledger))
    }

    /// Starts the actors over already-loaded state. Tests use this directly
    /// with in-memory stores.
    pub fn start<P: Store, O: Store>(catalog: Catalog<P>, ledger: Ledger<O>) -> Self {
        // 1. Create actors and clients (no dependencies yet)
        let (catalog_actor, catalog_client) = catalog_actor::new(catalog);
        let (ledger_actor, ledger_client) = ledger_actor::new(ledger);
        let (cart_actor, cart_client) = cart_actor::new();

        // 2. Start actors with injected context
        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let ledger_handle = tokio::spawn(ledger_actor.run(()));

        // The cart talks to the ledger during checkout
        let cart_handle = tokio::spawn(cart_actor.run(ledger_client.clone()));

        info!("Register open");

        Self {
            catalog_client,
            ledger_client,
            cart_client,
            handles: vec![catalog_handle, ledger_handle, cart_handle],
        }
    }

    /// Gracefully shuts the register down.
    ///
    /// Dropping the clients closes their channels; each actor drains its
    /// mailbox and exits. The cart actor's ledger handle is a clone that
    /// goes away when the cart exits, so the ledger follows it out.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Closing register...");

        drop(self.catalog_client);
        drop(self.cart_client);
        drop(self.ledger_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Register closed");
        Ok(())
    }
}
