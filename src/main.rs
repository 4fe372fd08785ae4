//! A scripted register session.
//!
//! This binary stands in for the graphical shell: it opens the register,
//! rings up a short sale, checks out, clears the cart once the result has
//! been "displayed" (logged), and finishes with an admin edit of the menu.

use till::lifecycle::{setup_tracing, RegisterConfig, RegisterSystem};
use till::model::ProductDraft;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Opening register");

    let config = RegisterConfig::from_env();
    let system = RegisterSystem::open(config).map_err(|e| e.to_string())?;

    let products = system
        .catalog_client
        .list()
        .await
        .map_err(|e| e.to_string())?;
    for product in &products {
        info!(name = %product.name, price = product.price, "On the menu");
    }

    // Ring up two of the first product and one of the second
    let span = tracing::info_span!("ring_up");
    async {
        if let [first, rest @ ..] = products.as_slice() {
            system
                .cart_client
                .add(first.clone())
                .await
                .map_err(|e| e.to_string())?;
            system
                .cart_client
                .add(first.clone())
                .await
                .map_err(|e| e.to_string())?;
            if let Some(second) = rest.first() {
                system
                    .cart_client
                    .add(second.clone())
                    .await
                    .map_err(|e| e.to_string())?;
            }
        }
        let total = system.cart_client.total().await.map_err(|e| e.to_string())?;
        info!(total, "Cart totalled");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Check out; the cart is cleared only after the result is shown
    let span = tracing::info_span!("checkout");
    let outcome = async { system.cart_client.checkout().await }
        .instrument(span)
        .await;

    match outcome {
        Ok(record) => {
            info!(
                transaction_number = record.transaction_number,
                total = record.total,
                "Sale recorded"
            );
            system
                .cart_client
                .clear()
                .await
                .map_err(|e| e.to_string())?;
        }
        Err(e) => error!(error = %e, "Checkout refused"),
    }

    // Admin pass: rewrite the menu the way the edit screen would
    let span = tracing::info_span!("admin_edit");
    async {
        let drafts = vec![
            ProductDraft::new("Latte", "4.50"),
            ProductDraft::new("Cappuccino", "3.75"),
            ProductDraft::new("Espresso", "2.25"),
        ];
        let saved = system
            .catalog_client
            .save(drafts)
            .await
            .map_err(|e| e.to_string())?;
        info!(count = saved.len(), "Menu updated");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Register session complete");
    Ok(())
}
