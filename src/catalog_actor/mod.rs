//! Catalog-specific logic: the list of sellable products.
//!
//! The catalog is replaced wholesale on every admin save; individual
//! products are never edited in place. Validation of submitted rows lives
//! here, not in the editor that collects them.

pub mod error;

pub use error::*;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::clients::CatalogClient;
use crate::framework::{Response, Service, ServiceActor};
use crate::model::{Product, ProductDraft};
use crate::storage::{StorageError, Store};

/// Requests understood by the catalog actor.
#[derive(Debug)]
pub enum CatalogRequest {
    /// Current product list, in persisted order.
    List {
        respond_to: Response<Vec<Product>, CatalogError>,
    },
    /// Replace the whole catalog with the submitted rows.
    Save {
        drafts: Vec<ProductDraft>,
        respond_to: Response<Vec<Product>, CatalogError>,
    },
}

/// The catalog actor's state: the product list and its backing store.
#[derive(Debug)]
pub struct Catalog<S: Store> {
    store: S,
    products: Vec<Product>,
}

impl<S: Store> Catalog<S> {
    /// Loads the persisted catalog, seeding and persisting a starter set if
    /// nothing has been saved yet.
    ///
    /// # Errors
    /// Returns a [`StorageError`] if the file exists but is unreadable or
    /// is not a well-formed product array. Load failures are fatal to
    /// startup; there is no auto-repair.
    pub fn load(store: S) -> Result<Self, StorageError> {
        let products = match store.read()? {
            Some(contents) => decode(&store, &contents)?,
            None => {
                let seed = seed_products();
                write_products(&store, &seed)?;
                info!(count = seed.len(), "Seeded catalog");
                seed
            }
        };
        Ok(Self { store, products })
    }

    /// Validates and persists a full replacement catalog, then swaps it in.
    ///
    /// The write happens before the in-memory swap, so a failed save leaves
    /// both the file and the served list exactly as they were.
    fn save(&mut self, drafts: Vec<ProductDraft>) -> Result<Vec<Product>, CatalogError> {
        let products = parse_drafts(&drafts)?;
        write_products(&self.store, &products)?;
        self.products = products.clone();
        Ok(products)
    }
}

#[async_trait]
impl<S: Store> Service for Catalog<S> {
    type Request = CatalogRequest;
    type Context = ();

    async fn handle(&mut self, request: CatalogRequest, _ctx: &()) {
        match request {
            CatalogRequest::List { respond_to } => {
                let _ = respond_to.send(Ok(self.products.clone()));
            }
            CatalogRequest::Save { drafts, respond_to } => {
                let result = self.save(drafts);
                match &result {
                    Ok(products) => info!(count = products.len(), "Catalog saved"),
                    Err(e) => warn!(error = %e, "Catalog save rejected"),
                }
                let _ = respond_to.send(result);
            }
        }
    }
}

/// Creates the catalog actor and its client from already-loaded state.
pub fn new<S: Store>(catalog: Catalog<S>) -> (ServiceActor<Catalog<S>>, CatalogClient) {
    let (actor, sender) = ServiceActor::new(32, catalog);
    (actor, CatalogClient::new(sender))
}

/// Parses and validates editor-submitted rows.
///
/// The first invalid row aborts the whole save; nothing is written. Every
/// accepted row gets a freshly generated id.
fn parse_drafts(drafts: &[ProductDraft]) -> Result<Vec<Product>, CatalogError> {
    let mut products = Vec::with_capacity(drafts.len());
    for (index, draft) in drafts.iter().enumerate() {
        let row = index + 1;
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyName { row });
        }
        let price = draft
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0)
            .ok_or_else(|| CatalogError::InvalidPrice {
                row,
                name: name.to_string(),
                price: draft.price.clone(),
            })?;
        products.push(Product::new(Product::generate_id(), name, price));
    }
    Ok(products)
}

fn decode<S: Store>(store: &S, contents: &str) -> Result<Vec<Product>, StorageError> {
    serde_json::from_str(contents).map_err(|e| StorageError::Malformed {
        path: store.location().to_string(),
        source: e,
    })
}

fn write_products<S: Store>(store: &S, products: &[Product]) -> Result<(), StorageError> {
    let encoded =
        serde_json::to_string_pretty(products).map_err(|e| StorageError::Encode {
            path: store.location().to_string(),
            source: e,
        })?;
    store.write(&encoded)
}

/// The starter catalog written on first run.
fn seed_products() -> Vec<Product> {
    vec![
        Product::new(Product::generate_id(), "Latte", 4.5),
        Product::new(Product::generate_id(), "Cappuccino", 3.75),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_load_seeds_and_persists_when_absent() {
        let store = MemoryStore::new();
        let catalog = Catalog::load(store.clone()).unwrap();

        assert_eq!(catalog.products.len(), 2);
        assert_eq!(catalog.products[0].name, "Latte");
        assert_eq!(catalog.products[0].price, 4.5);

        // The seed is written before load returns, so a reload sees it
        let reloaded = Catalog::load(store).unwrap();
        assert_eq!(reloaded.products, catalog.products);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let store = MemoryStore::with_contents("{ not an array");
        let err = Catalog::load(store).unwrap_err();
        assert!(matches!(err, StorageError::Malformed { .. }));
    }

    #[test]
    fn test_load_rejects_non_product_records() {
        let store = MemoryStore::with_contents(r#"[{"id": "p-1", "name": "Latte"}]"#);
        let err = Catalog::load(store).unwrap_err();
        assert!(matches!(err, StorageError::Malformed { .. }));
    }

    #[test]
    fn test_save_replaces_catalog_and_generates_ids() {
        let store = MemoryStore::new();
        let mut catalog = Catalog::load(store.clone()).unwrap();

        let saved = catalog
            .save(vec![ProductDraft::new("  Flat White ", " 4.25 ")])
            .unwrap();

        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "Flat White");
        assert_eq!(saved[0].price, 4.25);
        assert!(!saved[0].id.is_empty());
        assert_eq!(catalog.products, saved);
        assert!(store.contents().unwrap().contains("Flat White"));
    }

    #[test]
    fn test_invalid_row_aborts_whole_save() {
        let store = MemoryStore::new();
        let mut catalog = Catalog::load(store.clone()).unwrap();
        let before = store.contents().unwrap();

        let err = catalog
            .save(vec![
                ProductDraft::new("Espresso", "2.25"),
                ProductDraft::new("   ", "3.00"),
            ])
            .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName { row: 2 }));

        // Nothing was written and the served list is unchanged
        assert_eq!(store.contents().unwrap(), before);
        assert_eq!(catalog.products.len(), 2);
    }

    #[test]
    fn test_price_must_be_a_non_negative_number() {
        for bad in ["", "abc", "-1", "NaN", "inf"] {
            let err = parse_drafts(&[ProductDraft::new("Espresso", bad)]).unwrap_err();
            assert!(
                matches!(err, CatalogError::InvalidPrice { row: 1, .. }),
                "price {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_failed_write_leaves_catalog_untouched() {
        let store = MemoryStore::new();
        let mut catalog = Catalog::load(store.clone()).unwrap();
        let before = catalog.products.clone();

        store.fail_next_write();
        let err = catalog
            .save(vec![ProductDraft::new("Espresso", "2.25")])
            .unwrap_err();
        assert!(matches!(err, CatalogError::Storage(_)));
        assert_eq!(catalog.products, before);
    }

    #[test]
    fn test_round_trip_modulo_ids() {
        let store = MemoryStore::new();
        let mut catalog = Catalog::load(store.clone()).unwrap();
        catalog
            .save(vec![
                ProductDraft::new("Espresso", "2.25"),
                ProductDraft::new("Mocha", "5.10"),
            ])
            .unwrap();

        let reloaded = Catalog::load(store).unwrap();
        let summary: Vec<(&str, f64)> = reloaded
            .products
            .iter()
            .map(|p| (p.name.as_str(), p.price))
            .collect();
        assert_eq!(summary, vec![("Espresso", 2.25), ("Mocha", 5.10)]);
    }
}
