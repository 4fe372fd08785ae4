//! Cart-specific logic: the ephemeral set of items being assembled before
//! checkout.
//!
//! The cart is in-memory only and starts empty every run. Checkout is a
//! two-step contract: the actor records the sale and returns it, and the
//! caller clears the cart once the result has been shown. That keeps
//! persistence decoupled from display timing, and makes a failed checkout
//! trivially retryable: the lines are still there.

pub mod error;

pub use error::*;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::clients::{CartClient, LedgerClient};
use crate::framework::{Response, Service, ServiceActor};
use crate::model::{round_to_cents, CartLine, OrderDraft, OrderItem, OrderRecord, Product};

/// Requests understood by the cart actor.
#[derive(Debug)]
pub enum CartRequest {
    /// Add one unit of a product, merging with an existing line.
    Add {
        product: Product,
        respond_to: Response<(), CartError>,
    },
    /// Take one unit off a line, dropping the line at zero. Unknown ids are
    /// a no-op, not an error.
    RemoveOne {
        product_id: String,
        respond_to: Response<(), CartError>,
    },
    /// Current lines, in order of first add.
    Lines {
        respond_to: Response<Vec<CartLine>, CartError>,
    },
    /// Running total, rounded to cents.
    Total {
        respond_to: Response<f64, CartError>,
    },
    /// Record the sale in the ledger and return the transaction. The lines
    /// are left intact; send [`CartRequest::Clear`] once the result has
    /// been displayed.
    Checkout {
        respond_to: Response<OrderRecord, CartError>,
    },
    /// Discard every line.
    Clear {
        respond_to: Response<(), CartError>,
    },
}

/// The cart actor's state: the lines of the in-progress sale.
///
/// Lines keep the order in which their product was first added, so the
/// receipt reads the way the sale was rung up.
#[derive(Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, product: Product) {
        match self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product,
                quantity: 1,
            }),
        }
    }

    fn remove_one(&mut self, product_id: &str) {
        if let Some(index) = self
            .lines
            .iter()
            .position(|line| line.product.id == product_id)
        {
            if self.lines[index].quantity > 1 {
                self.lines[index].quantity -= 1;
            } else {
                self.lines.remove(index);
            }
        }
    }

    fn total(&self) -> f64 {
        round_to_cents(self.lines.iter().map(CartLine::subtotal).sum())
    }

    /// Snapshots the lines into a ledger draft, preserving line order.
    fn draft(&self) -> Result<OrderDraft, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::EmptyCart);
        }
        let items = self
            .lines
            .iter()
            .map(|line| OrderItem {
                id: line.product.id.clone(),
                name: line.product.name.clone(),
                quantity: line.quantity,
                unit_price: line.product.price,
            })
            .collect();
        Ok(OrderDraft {
            items,
            total: self.total(),
        })
    }

    /// Runs the checkout against the ledger.
    ///
    /// On failure the lines stay exactly as they were and the ledger's
    /// cursor has not moved, so the same transaction number is reused on
    /// the next try.
    async fn checkout(&self, ledger: &LedgerClient) -> Result<OrderRecord, CartError> {
        let draft = self.draft()?;
        match ledger.append(draft).await {
            Ok(record) => {
                info!(
                    transaction_number = record.transaction_number,
                    total = record.total,
                    "Checkout complete"
                );
                Ok(record)
            }
            Err(e) => {
                warn!(error = %e, "Checkout failed, cart kept");
                Err(CartError::Ledger(e))
            }
        }
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}

#[async_trait]
impl Service for Cart {
    type Request = CartRequest;
    type Context = LedgerClient;

    async fn handle(&mut self, request: CartRequest, ledger: &LedgerClient) {
        match request {
            CartRequest::Add {
                product,
                respond_to,
            } => {
                self.add(product);
                let _ = respond_to.send(Ok(()));
            }
            CartRequest::RemoveOne {
                product_id,
                respond_to,
            } => {
                self.remove_one(&product_id);
                let _ = respond_to.send(Ok(()));
            }
            CartRequest::Lines { respond_to } => {
                let _ = respond_to.send(Ok(self.lines.clone()));
            }
            CartRequest::Total { respond_to } => {
                let _ = respond_to.send(Ok(self.total()));
            }
            CartRequest::Checkout { respond_to } => {
                let result = self.checkout(ledger).await;
                let _ = respond_to.send(result);
            }
            CartRequest::Clear { respond_to } => {
                self.clear();
                let _ = respond_to.send(Ok(()));
            }
        }
    }
}

/// Creates the cart actor and its client. The ledger client it checks out
/// against is injected when the actor is started, not here.
pub fn new() -> (ServiceActor<Cart>, CartClient) {
    let (actor, sender) = ServiceActor::new(32, Cart::new());
    (actor, CartClient::new(sender))
}
