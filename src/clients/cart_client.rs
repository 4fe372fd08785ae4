use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::cart_actor::{CartError, CartRequest};
use crate::framework;
use crate::model::{CartLine, OrderRecord, Product};

/// Client for interacting with the cart actor.
///
/// This is the surface the UI shell wires its triggers to: product buttons
/// call [`add`](CartClient::add), cart-line buttons call
/// [`remove_one`](CartClient::remove_one), and the checkout and clear-cart
/// buttons call the rest.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    /// Adds one unit of a product, merging with an existing line.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add(&self, product: Product) -> Result<(), CartError> {
        debug!("Sending request");
        framework::request(&self.sender, |respond_to| CartRequest::Add {
            product,
            respond_to,
        })
        .await
    }

    /// Takes one unit off a line; the line disappears at zero. Unknown ids
    /// are a no-op.
    #[instrument(skip(self, product_id))]
    pub async fn remove_one(&self, product_id: impl Into<String>) -> Result<(), CartError> {
        debug!("Sending request");
        let product_id = product_id.into();
        framework::request(&self.sender, |respond_to| CartRequest::RemoveOne {
            product_id,
            respond_to,
        })
        .await
    }

    /// Current lines, in order of first add.
    #[instrument(skip(self))]
    pub async fn lines(&self) -> Result<Vec<CartLine>, CartError> {
        debug!("Sending request");
        framework::request(&self.sender, |respond_to| CartRequest::Lines { respond_to }).await
    }

    /// Running total, rounded to cents. Zero for an empty cart.
    #[instrument(skip(self))]
    pub async fn total(&self) -> Result<f64, CartError> {
        debug!("Sending request");
        framework::request(&self.sender, |respond_to| CartRequest::Total { respond_to }).await
    }

    /// Records the sale and returns the transaction. The cart is left
    /// intact; call [`clear`](CartClient::clear) after showing the result.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> Result<OrderRecord, CartError> {
        debug!("Sending request");
        framework::request(&self.sender, |respond_to| CartRequest::Checkout { respond_to }).await
    }

    /// Discards every line. Used after checkout display and for explicit
    /// cancellation.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), CartError> {
        debug!("Sending request");
        framework::request(&self.sender, |respond_to| CartRequest::Clear { respond_to }).await
    }
}
