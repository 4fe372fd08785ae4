use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::catalog_actor::{CatalogError, CatalogRequest};
use crate::framework;
use crate::model::{Product, ProductDraft};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    /// Current product list, in persisted order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("Sending request");
        framework::request(&self.sender, |respond_to| CatalogRequest::List { respond_to }).await
    }

    /// Replaces the whole catalog with the submitted rows and returns the
    /// saved products for the shell to refresh its display from.
    #[instrument(skip(self, drafts), fields(rows = drafts.len()))]
    pub async fn save(&self, drafts: Vec<ProductDraft>) -> Result<Vec<Product>, CatalogError> {
        debug!(?drafts, "Sending request");
        framework::request(&self.sender, |respond_to| CatalogRequest::Save {
            drafts,
            respond_to,
        })
        .await
    }
}
