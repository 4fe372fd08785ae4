//! Ledger-specific logic: the append-only history of completed sales.
//!
//! Records are immutable once written. The only mutation the ledger knows
//! is appending one record and rewriting the whole file; a failed write is
//! rolled back so there is never a torn append.

pub mod error;

pub use error::*;

use async_trait::async_trait;
use chrono::Local;
use tracing::{info, warn};

use crate::clients::LedgerClient;
use crate::framework::{Response, Service, ServiceActor};
use crate::model::{OrderDraft, OrderRecord};
use crate::storage::{StorageError, Store};

/// Requests understood by the ledger actor.
#[derive(Debug)]
pub enum LedgerRequest {
    /// All recorded transactions, oldest first.
    List {
        respond_to: Response<Vec<OrderRecord>, LedgerError>,
    },
    /// Record a completed sale and persist the updated ledger.
    Append {
        draft: OrderDraft,
        respond_to: Response<OrderRecord, LedgerError>,
    },
}

/// The ledger actor's state: recorded transactions, the next transaction
/// number, and the backing store.
///
/// The next-number cursor is derived once at load and then kept in memory,
/// so a number handed out during a session is never reissued, even if
/// persistence lags behind.
#[derive(Debug)]
pub struct Ledger<S: Store> {
    store: S,
    records: Vec<OrderRecord>,
    next_transaction_number: u64,
}

impl<S: Store> Ledger<S> {
    /// Loads the persisted ledger.
    ///
    /// An absent or blank file is an empty ledger (no seed data, unlike the
    /// catalog); a file that fails to decode as an array of order records
    /// is a [`StorageError`].
    pub fn load(store: S) -> Result<Self, StorageError> {
        let records: Vec<OrderRecord> = match store.read()? {
            Some(contents) if !contents.trim().is_empty() => serde_json::from_str(&contents)
                .map_err(|e| StorageError::Malformed {
                    path: store.location().to_string(),
                    source: e,
                })?,
            _ => Vec::new(),
        };
        let next_transaction_number = compute_next_transaction_number(&records);
        Ok(Self {
            store,
            records,
            next_transaction_number,
        })
    }

    /// Stamps the draft, appends it and persists the full ledger.
    ///
    /// On write failure the pushed record is popped and the cursor is left
    /// alone, so the next attempt reuses the transaction number that
    /// failed. There is at most one committed state at any time.
    fn append(&mut self, draft: OrderDraft) -> Result<OrderRecord, StorageError> {
        let record = OrderRecord {
            transaction_number: self.next_transaction_number,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            items: draft.items,
            total: draft.total,
        };

        self.records.push(record.clone());
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }
        self.next_transaction_number += 1;
        Ok(record)
    }

    fn persist(&self) -> Result<(), StorageError> {
        let encoded = serde_json::to_string_pretty(&self.records).map_err(|e| {
            StorageError::Encode {
                path: self.store.location().to_string(),
                source: e,
            }
        })?;
        self.store.write(&encoded)
    }
}

#[async_trait]
impl<S: Store> Service for Ledger<S> {
    type Request = LedgerRequest;
    type Context = ();

    async fn handle(&mut self, request: LedgerRequest, _ctx: &()) {
        match request {
            LedgerRequest::List { respond_to } => {
                let _ = respond_to.send(Ok(self.records.clone()));
            }
            LedgerRequest::Append { draft, respond_to } => {
                let result = self.append(draft);
                match &result {
                    Ok(record) => info!(
                        transaction_number = record.transaction_number,
                        total = record.total,
                        "Transaction recorded"
                    ),
                    Err(e) => warn!(error = %e, "Append failed, ledger rolled back"),
                }
                let _ = respond_to.send(result.map_err(LedgerError::from));
            }
        }
    }
}

/// Creates the ledger actor and its client from already-loaded state.
pub fn new<S: Store>(ledger: Ledger<S>) -> (ServiceActor<Ledger<S>>, LedgerClient) {
    let (actor, sender) = ServiceActor::new(32, ledger);
    (actor, LedgerClient::new(sender))
}

/// One more than the highest transaction number on record, or 1 for an
/// empty ledger.
pub fn compute_next_transaction_number(records: &[OrderRecord]) -> u64 {
    records
        .iter()
        .map(|record| record.transaction_number)
        .max()
        .unwrap_or(0)
        + 1
}
