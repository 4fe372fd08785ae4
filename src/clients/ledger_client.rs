use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::framework;
use crate::ledger_actor::{LedgerError, LedgerRequest};
use crate::model::{OrderDraft, OrderRecord};

/// Client for interacting with the ledger actor.
///
/// The cart holds one of these as its checkout context; the UI shell can
/// hold another for reporting.
#[derive(Clone)]
pub struct LedgerClient {
    sender: mpsc::Sender<LedgerRequest>,
}

impl LedgerClient {
    pub fn new(sender: mpsc::Sender<LedgerRequest>) -> Self {
        Self { sender }
    }

    /// All recorded transactions, oldest first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<OrderRecord>, LedgerError> {
        debug!("Sending request");
        framework::request(&self.sender, |respond_to| LedgerRequest::List { respond_to }).await
    }

    /// Records a completed sale; the ledger stamps the transaction number
    /// and timestamp.
    #[instrument(skip(self, draft), fields(total = draft.total))]
    pub async fn append(&self, draft: OrderDraft) -> Result<OrderRecord, LedgerError> {
        debug!(?draft, "Sending request");
        framework::request(&self.sender, |respond_to| LedgerRequest::Append {
            draft,
            respond_to,
        })
        .await
    }
}
