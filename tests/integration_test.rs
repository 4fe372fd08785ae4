use tempfile::tempdir;
use till::cart_actor::CartError;
use till::catalog_actor::CatalogError;
use till::lifecycle::{RegisterConfig, RegisterSystem};
use till::model::ProductDraft;

/// Full end-to-end session against real files in a temp directory.
/// This tests the entire system working together.
#[tokio::test]
async fn test_full_register_session() {
    let dir = tempdir().unwrap();
    let config = RegisterConfig {
        products_path: dir.path().join("products.json"),
        orders_path: dir.path().join("orders.json"),
    };

    let system = RegisterSystem::open(config.clone()).expect("Failed to open register");

    // First run seeds the catalog
    let products = system
        .catalog_client
        .list()
        .await
        .expect("Failed to list products");
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Latte");
    assert_eq!(products[0].price, 4.5);

    // Ring up two lattes and a cappuccino
    system.cart_client.add(products[0].clone()).await.unwrap();
    system.cart_client.add(products[0].clone()).await.unwrap();
    system.cart_client.add(products[1].clone()).await.unwrap();

    let total = system.cart_client.total().await.unwrap();
    assert_eq!(total, 12.75);

    // Check out, "display" the result, then clear
    let record = system.cart_client.checkout().await.expect("Checkout failed");
    assert_eq!(record.transaction_number, 1);
    assert_eq!(record.total, 12.75);
    assert_eq!(record.items.len(), 2);
    assert_eq!(record.items[0].name, "Latte");
    assert_eq!(record.items[0].quantity, 2);
    assert_eq!(record.items[0].unit_price, 4.5);

    // Checkout leaves the lines for the caller to clear
    assert_eq!(system.cart_client.lines().await.unwrap().len(), 2);
    system.cart_client.clear().await.unwrap();
    assert_eq!(system.cart_client.total().await.unwrap(), 0.0);

    // An empty cart refuses to check out and records nothing
    let err = system.cart_client.checkout().await.unwrap_err();
    assert!(matches!(err, CartError::EmptyCart));
    assert_eq!(system.ledger_client.list().await.unwrap().len(), 1);

    system.shutdown().await.expect("Failed to shutdown");

    // Reopen: the ledger continues numbering where it left off
    let system = RegisterSystem::open(config).expect("Failed to reopen register");
    let products = system.catalog_client.list().await.unwrap();
    system.cart_client.add(products[1].clone()).await.unwrap();
    let record = system.cart_client.checkout().await.unwrap();
    assert_eq!(record.transaction_number, 2);
    system.cart_client.clear().await.unwrap();
    system.shutdown().await.unwrap();
}

/// Removing units one at a time walks a line down to removal, and removing
/// an unknown id changes nothing.
#[tokio::test]
async fn test_cart_lines_shrink_and_disappear() {
    let dir = tempdir().unwrap();
    let config = RegisterConfig {
        products_path: dir.path().join("products.json"),
        orders_path: dir.path().join("orders.json"),
    };
    let system = RegisterSystem::open(config).unwrap();

    let products = system.catalog_client.list().await.unwrap();
    system.cart_client.add(products[0].clone()).await.unwrap();
    system.cart_client.add(products[0].clone()).await.unwrap();

    system.cart_client.remove_one(&products[0].id).await.unwrap();
    let lines = system.cart_client.lines().await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 1);

    system.cart_client.remove_one(&products[0].id).await.unwrap();
    assert!(system.cart_client.lines().await.unwrap().is_empty());

    system.cart_client.remove_one("no-such-id").await.unwrap();
    assert!(system.cart_client.lines().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

/// A bad row aborts the whole admin save, byte-for-byte; a clean save
/// replaces the catalog and survives a reopen.
#[tokio::test]
async fn test_admin_save_validates_and_round_trips() {
    let dir = tempdir().unwrap();
    let config = RegisterConfig {
        products_path: dir.path().join("products.json"),
        orders_path: dir.path().join("orders.json"),
    };
    let system = RegisterSystem::open(config.clone()).unwrap();

    let before = std::fs::read_to_string(&config.products_path).unwrap();

    let drafts = vec![
        ProductDraft::new("Espresso", "2.25"),
        ProductDraft::new("   ", "3.00"),
    ];
    let err = system.catalog_client.save(drafts).await.unwrap_err();
    assert!(matches!(err, CatalogError::EmptyName { row: 2 }));

    // The file is untouched and the old list is still served
    let after = std::fs::read_to_string(&config.products_path).unwrap();
    assert_eq!(before, after);
    assert_eq!(system.catalog_client.list().await.unwrap().len(), 2);

    // A price that does not parse as a non-negative number is refused too
    let drafts = vec![ProductDraft::new("Espresso", "-2.25")];
    let err = system.catalog_client.save(drafts).await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidPrice { row: 1, .. }));

    // A clean save replaces the catalog wholesale
    let saved = system
        .catalog_client
        .save(vec![ProductDraft::new("Espresso", "2.25")])
        .await
        .unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name, "Espresso");
    assert_eq!(saved[0].price, 2.25);

    system.shutdown().await.unwrap();

    // The save is exactly what a reopen sees
    let system = RegisterSystem::open(config).unwrap();
    let products = system.catalog_client.list().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Espresso");
    system.shutdown().await.unwrap();
}

/// A corrupt products file is fatal to startup, not auto-repaired.
#[tokio::test]
async fn test_corrupt_products_file_fails_startup() {
    let dir = tempdir().unwrap();
    let config = RegisterConfig {
        products_path: dir.path().join("products.json"),
        orders_path: dir.path().join("orders.json"),
    };
    std::fs::write(&config.products_path, "{ not an array").unwrap();

    assert!(RegisterSystem::open(config).is_err());
}

/// A corrupt orders file is fatal too; records without a transaction
/// number are rejected rather than silently skipped.
#[tokio::test]
async fn test_corrupt_orders_file_fails_startup() {
    let dir = tempdir().unwrap();
    let config = RegisterConfig {
        products_path: dir.path().join("products.json"),
        orders_path: dir.path().join("orders.json"),
    };
    std::fs::write(
        &config.orders_path,
        r#"[{"timestamp": "2026-08-07 09:00:00", "items": [], "total": 1.0}]"#,
    )
    .unwrap();

    assert!(RegisterSystem::open(config).is_err());
}
