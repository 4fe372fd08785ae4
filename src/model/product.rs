use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sellable product, as shown on the register and persisted in the
/// products file.
///
/// Identity is the `id`. Products are never mutated in place: the admin
/// editor replaces the whole catalog on save, and cart lines and order
/// items hold their own snapshots, so a later edit cannot reach back into
/// history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Generates a fresh opaque product id. Ids are never reused.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}

/// One row as submitted by the product editor: raw name text and raw price
/// text. Parsing and validation happen in the catalog, not in the editor.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Product::generate_id();
        let b = Product::generate_id();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }
}
